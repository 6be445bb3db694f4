//! Core of the Cheers party drinking game.
//!
//! Players enter their names, then take turns revealing prompts
//! ("Everyone Drinks", "Waterfall", ...) drawn at random from a catalog.
//! No prompt is shown twice in one game; once the catalog runs dry every
//! turn shows [`FINISHED_TEXT`].
//!
//! This crate holds the game rules and contains no rendering code. The
//! `cheers-tui` crate draws the screens; the `cheers` binary in this crate
//! plays a game on a plain line-oriented terminal.
//!
//! # Getting started
//!
//! ```
//! use cheers_rs::prelude::*;
//!
//! let players = Players::from_names(["Alice", "Bob"]).unwrap();
//! let catalog = Catalog::new(["Waterfall", "Medusa"]).unwrap();
//! let mut game = GameSession::start(players, catalog, Some(7));
//!
//! // Alice gets the first prompt as soon as the game starts.
//! assert_eq!(game.current_player().name, "Alice");
//! assert!(!game.is_finished());
//!
//! // "Next mate": Bob gets the other prompt.
//! game.advance();
//! assert_eq!(game.current_player().name, "Bob");
//!
//! // The pool is empty now.
//! assert_eq!(game.advance().text(), FINISHED_TEXT);
//! ```
//!
//! # Where to find things
//!
//! - **Prompts and catalog files:** [`catalog`].
//! - **No-repeat random draws:** [`PromptPool`](pool::PromptPool).
//! - **Player setup (2 to 10 names):** [`Roster`](roster::Roster) and
//!   [`Players`](roster::Players).
//! - **Turns:** [`TurnCycle`](turn::TurnCycle) and
//!   [`GameSession`](session::GameSession).
//! - **Moving between home, setup and gameplay:**
//!   [`Navigator`](screen::Navigator).
//! - **Capturing logs for a UI:** [`ui::tracing`].

pub mod catalog;
pub mod config;
pub mod pool;
pub mod prelude;
pub mod roster;
pub mod screen;
pub mod session;
pub mod turn;
pub mod ui;

pub use catalog::{Catalog, CatalogError, DEFAULT_PROMPTS, Prompt};
pub use config::GameConfig;
pub use pool::{Draw, FINISHED_TEXT, PromptPool};
pub use roster::{MAX_PLAYERS, MIN_PLAYERS, Player, Players, Roster, SetupError};
pub use screen::{NavEvent, Navigator, Screen, ScreenKind};
pub use session::GameSession;
pub use turn::TurnCycle;
