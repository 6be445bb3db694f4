//! Convenience re-exports for frontends.
//!
//! ```ignore
//! use cheers_rs::prelude::*;
//! ```

pub use crate::catalog::{Catalog, CatalogError, Prompt};
pub use crate::config::GameConfig;
pub use crate::pool::{Draw, FINISHED_TEXT, PromptPool};
pub use crate::roster::{MAX_PLAYERS, MIN_PLAYERS, Player, Players, Roster, SetupError};
pub use crate::screen::{NavEvent, Navigator, Screen, ScreenKind};
pub use crate::session::GameSession;
pub use crate::ui::tracing::{LogBuffer, UiTracingLayer};
pub use crate::ui::{LogLevel, LogLine};
