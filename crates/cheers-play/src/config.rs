//! Launcher configuration with sensible defaults.
//!
//! [`PlayConfig`] captures what the `cheers-play` command line controls and
//! converts it into the core and TUI types via
//! [`build_navigator`](PlayConfig::build_navigator) and
//! [`build_tui_config`](PlayConfig::build_tui_config).

use std::path::PathBuf;

use cheers_rs::ui::tracing::LogBuffer;
use cheers_rs::{GameConfig, Navigator};
use cheers_tui::TuiConfig;

/// Configuration for a terminal game.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Names to prefill on the setup screen. Default: none (start on home).
    pub players: Vec<String>,
    /// Custom prompt file. Default: built-in prompts.
    pub prompts: Option<PathBuf>,
    /// Seed for a reproducible draw order. Default: OS entropy.
    pub seed: Option<u64>,
    /// Open with the log pane visible. Default: `false`.
    pub show_logs: bool,
}

impl PlayConfig {
    /// Build the core [`GameConfig`].
    pub fn build_game_config(&self) -> GameConfig {
        GameConfig {
            prompts_file: self.prompts.clone(),
            seed: self.seed,
            players: self.players.clone(),
        }
    }

    /// Load the catalog and build a [`Navigator`] ready to play.
    pub fn build_navigator(&self) -> Result<Navigator, String> {
        let game = self.build_game_config();
        let catalog = game.load_catalog().map_err(|e| e.to_string())?;
        Ok(Navigator::from_config(&game, catalog))
    }

    /// Build the [`TuiConfig`], attaching the tracing log buffer if any.
    pub fn build_tui_config(&self, log_buffer: Option<LogBuffer>) -> TuiConfig {
        TuiConfig {
            log_buffer,
            show_logs: self.show_logs,
        }
    }
}
