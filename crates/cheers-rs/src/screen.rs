//! Screen selection: home, player setup, gameplay.
//!
//! [`Screen`] is a plain tagged selector; each variant owns the state of the
//! screen it stands for. [`Navigator`] switches between screens in response
//! to explicit [`NavEvent`]s and holds nothing but what it needs to start a
//! fresh session. Leaving a screen drops its state.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::roster::{Roster, SetupError};
use crate::session::GameSession;

/// The screen currently shown, with its state.
pub enum Screen {
    Home,
    PlayerSetup(Roster),
    Gameplay(GameSession),
}

/// Variant tag of a [`Screen`], without its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    PlayerSetup,
    Gameplay,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Home => ScreenKind::Home,
            Self::PlayerSetup(_) => ScreenKind::PlayerSetup,
            Self::Gameplay(_) => ScreenKind::Gameplay,
        }
    }
}

/// User actions that move between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Home → player setup.
    Start,
    /// Player setup → gameplay, if enough players are named.
    Play,
    /// Any screen → home.
    Home,
}

pub struct Navigator {
    screen: Screen,
    catalog: Catalog,
    seed: Option<u64>,
    prefill: Vec<String>,
    sessions_started: u64,
}

impl Navigator {
    /// Start on the home screen.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            screen: Screen::Home,
            catalog,
            seed: None,
            prefill: Vec::new(),
            sessions_started: 0,
        }
    }

    /// Build from a [`GameConfig`]. With prefilled players the navigator
    /// opens straight on the setup screen.
    pub fn from_config(config: &GameConfig, catalog: Catalog) -> Self {
        let mut nav = Self::new(catalog);
        nav.seed = config.seed;
        nav.prefill = config.players.clone();
        if !nav.prefill.is_empty() {
            nav.screen = Screen::PlayerSetup(Roster::with_names(nav.prefill.clone()));
        }
        nav
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a navigation event. Events that do not apply to the current
    /// screen are ignored; `Play` with too few named players is rejected
    /// and leaves the setup screen untouched.
    pub fn handle(&mut self, event: NavEvent) -> Result<ScreenKind, SetupError> {
        match (event, &self.screen) {
            (NavEvent::Home, _) => {
                self.screen = Screen::Home;
            }
            (NavEvent::Start, Screen::Home) => {
                self.screen = Screen::PlayerSetup(Roster::with_names(self.prefill.clone()));
            }
            (NavEvent::Play, Screen::PlayerSetup(roster)) => {
                let players = roster.players().inspect_err(|e| {
                    tracing::warn!(error = %e, "cannot start game");
                })?;
                let seed = self
                    .seed
                    .map(|seed| seed.wrapping_add(self.sessions_started));
                self.sessions_started += 1;
                self.screen =
                    Screen::Gameplay(GameSession::start(players, self.catalog.clone(), seed));
            }
            (event, screen) => {
                tracing::debug!(?event, screen = ?screen.kind(), "navigation event ignored");
            }
        }
        Ok(self.kind())
    }
}
