//! Play Cheers in the terminal.
//!
//! `cheers-play` wires the `cheers-rs` game core to the `cheers-tui`
//! frontend: command-line settings become a [`PlayConfig`], which builds the
//! [`Navigator`](cheers_rs::Navigator) and
//! [`TuiConfig`](cheers_tui::TuiConfig) for a game.
//!
//! # Library usage
//!
//! ```ignore
//! use cheers_play::PlayConfig;
//!
//! let config = PlayConfig {
//!     players: vec!["Alice".into(), "Bob".into()],
//!     ..Default::default()
//! };
//! let mut nav = config.build_navigator()?;
//! cheers_tui::run_tui(&mut nav, &config.build_tui_config(None))?;
//! ```
//!
//! # Binary
//!
//! ```sh
//! cheers-play --player Alice --player Bob --show-logs
//! ```

pub mod config;

pub use config::PlayConfig;
