//! Play Cheers on a plain terminal, one prompt per line.
//!
//! Press Enter to pass the turn to the next mate; type `q` to quit.
//!
//! # Examples
//!
//! ```sh
//! # Built-in prompts
//! cheers --player Alice --player Bob --player Carol
//!
//! # Custom prompt pack, reproducible order
//! cheers --player Alice --player Bob --prompts party-pack.txt --seed 7
//!
//! # Non-interactive: print the first 5 turns and exit
//! cheers --player Alice --player Bob --limit 5 < /dev/null
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use cheers_rs::{GameConfig, GameSession};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Cheers on a plain terminal.
///
/// Log verbosity follows the RUST_LOG environment variable (default: warn).
#[derive(Parser)]
#[command(name = "cheers")]
struct Cli {
    /// Player name, in turn order (repeat for each player, at least 2)
    #[arg(long = "player", short = 'p', required = true)]
    players: Vec<String>,

    /// Prompt file: a JSON array of strings (*.json) or one prompt per line
    #[arg(long)]
    prompts: Option<PathBuf>,

    /// Seed for a reproducible draw order
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns even if prompts remain (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = GameConfig::default().with_players(cli.players);
    config.prompts_file = cli.prompts;
    config.seed = cli.seed;

    let catalog = config.load_catalog().map_err(|e| e.to_string())?;
    let players = cheers_rs::Players::from_names(&config.players)
        .map_err(|e| format!("invalid players: {e}"))?;
    let mut game = GameSession::start(players, catalog, config.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    let write_err = |e: io::Error| format!("failed to write to stdout: {e}");

    loop {
        writeln!(
            stdout,
            "[{}/{}] {}: {}",
            game.pool().served(),
            game.pool().len(),
            game.current_player(),
            game.current_draw()
        )
        .map_err(write_err)?;

        if game.is_finished() || cli.limit.is_some_and(|limit| game.advances() + 1 >= limit) {
            break;
        }

        write!(stdout, "Next mate [Enter], quit [q]: ").map_err(write_err)?;
        stdout.flush().map_err(write_err)?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        if read == 0 {
            // EOF: keep dealing without waiting, like pressing Enter.
            writeln!(stdout).map_err(write_err)?;
        } else if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        game.advance();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_must_be_positive() {
        let err = Cli::try_parse_from(["cheers", "-p", "A", "-p", "B", "--limit", "0"]);
        assert!(err.is_err());

        let cli = Cli::try_parse_from(["cheers", "-p", "A", "-p", "B", "--limit", "1"]).unwrap();
        assert_eq!(cli.limit, Some(1));
    }

    #[test]
    fn players_are_required() {
        assert!(Cli::try_parse_from(["cheers"]).is_err());
        let cli = Cli::try_parse_from(["cheers", "--player", "A", "-p", "B"]).unwrap();
        assert_eq!(cli.players, ["A", "B"]);
        assert_eq!(cli.limit, None);
    }
}
