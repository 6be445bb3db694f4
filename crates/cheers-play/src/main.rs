//! Play Cheers in a full-screen terminal UI.
//!
//! # Examples
//!
//! ```sh
//! # Start on the home screen
//! cheers-play
//!
//! # Skip straight to setup with names filled in
//! cheers-play --player Alice --player Bob --player Carol
//!
//! # Custom prompt pack with the log pane open
//! cheers-play --prompts party-pack.json --show-logs
//! ```

use std::path::PathBuf;

use cheers_play::PlayConfig;
use cheers_rs::ui::tracing::UiTracingLayer;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Cheers in a full-screen terminal UI.
#[derive(Parser)]
#[command(name = "cheers-play")]
struct Cli {
    /// Prefill a player name on the setup screen (repeatable, up to 10)
    #[arg(long = "player", short = 'p')]
    players: Vec<String>,

    /// Prompt file: a JSON array of strings (*.json) or one prompt per line
    #[arg(long)]
    prompts: Option<PathBuf>,

    /// Seed for a reproducible draw order
    #[arg(long)]
    seed: Option<u64>,

    /// Open with the log pane visible
    #[arg(long)]
    show_logs: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = PlayConfig {
        players: cli.players,
        prompts: cli.prompts,
        seed: cli.seed,
        show_logs: cli.show_logs,
    };

    // Set up tracing → TUI log buffer.
    let (tracing_layer, log_buffer) = UiTracingLayer::new();
    tracing_subscriber::registry().with(tracing_layer).init();

    // Build the game before taking over the terminal so errors print
    // to stderr.
    let mut nav = match config.build_navigator() {
        Ok(nav) => nav,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let tui_config = config.build_tui_config(Some(log_buffer));
    if let Err(e) = cheers_tui::run_tui(&mut nav, &tui_config) {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
