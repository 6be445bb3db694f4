//! Game configuration.
//!
//! # Examples
//!
//! ```ignore
//! let config = GameConfig::default()
//!     .with_prompts_file("party-pack.txt")
//!     .with_seed(7)
//!     .with_players(["Alice", "Bob"]);
//! let catalog = config.load_catalog()?;
//! let nav = Navigator::from_config(&config, catalog);
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, CatalogError};

/// Settings shared by every frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Custom prompt file. `None` uses the built-in catalog.
    pub prompts_file: Option<PathBuf>,
    /// Seed for reproducible draw order. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Names to prefill on the setup screen.
    pub players: Vec<String>,
}

impl GameConfig {
    pub fn with_prompts_file(mut self, path: impl AsRef<Path>) -> Self {
        self.prompts_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Load the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.prompts_file {
            Some(path) => {
                let catalog = Catalog::from_path(path)?;
                tracing::info!(
                    path = %path.display(),
                    prompts = catalog.len(),
                    "loaded custom prompt catalog"
                );
                Ok(catalog)
            }
            None => Ok(Catalog::default()),
        }
    }
}
