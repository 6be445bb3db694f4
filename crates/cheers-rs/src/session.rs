//! A single gameplay session: players taking turns over one prompt pool.
//!
//! The session owns every piece of mutable game state. It is created when
//! the players press "play" and dropped when they leave for the home
//! screen; nothing carries over between sessions.

use rand::Rng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::pool::{Draw, PromptPool};
use crate::roster::{Player, Players};
use crate::turn::TurnCycle;

pub struct GameSession<R = StdRng> {
    players: Players,
    pool: PromptPool<R>,
    turn: TurnCycle,
    current: Draw,
    advances: u32,
}

impl GameSession<StdRng> {
    /// Start a session with an entropy-seeded pool, or a seeded one when
    /// `seed` is given.
    pub fn start(players: Players, catalog: Catalog, seed: Option<u64>) -> Self {
        let pool = match seed {
            Some(seed) => PromptPool::seeded(catalog, seed),
            None => PromptPool::new(catalog),
        };
        Self::with_pool(players, pool)
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session over `pool`. The first prompt is drawn immediately
    /// for the player in seat 0.
    pub fn with_pool(players: Players, mut pool: PromptPool<R>) -> Self {
        let turn = TurnCycle::new(players.len());
        let current = pool.draw();
        tracing::info!(
            players = players.len(),
            prompts = pool.len(),
            "game session started"
        );
        Self {
            players,
            pool,
            turn,
            current,
            advances: 0,
        }
    }

    /// "Next mate": draw a fresh prompt and pass the turn on.
    pub fn advance(&mut self) -> &Draw {
        let was_finished = self.current.is_finished();
        self.current = self.pool.draw();
        self.turn.advance();
        self.advances += 1;
        if self.current.is_finished() && !was_finished {
            tracing::info!(turns = self.advances, "prompt pool exhausted");
        }
        &self.current
    }

    pub fn current_draw(&self) -> &Draw {
        &self.current
    }

    pub fn current_player(&self) -> &Player {
        // The turn cycle is sized to the player list, which is never empty.
        &self.players.as_slice()[self.turn.current()]
    }

    pub fn current_seat(&self) -> usize {
        self.turn.current()
    }

    /// Number of times the turn has been passed.
    pub fn advances(&self) -> u32 {
        self.advances
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_finished()
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn pool(&self) -> &PromptPool<R> {
        &self.pool
    }
}
