//! No-repeat random prompt selection.
//!
//! A [`PromptPool`] hands out every prompt of its [`Catalog`] exactly once,
//! in uniformly random order, then answers [`Draw::Finished`] forever.
//!
//! The pool keeps the indices of not-yet-served prompts in a vector and
//! removes a uniformly chosen slot with `swap_remove`, so each draw is O(1)
//! regardless of catalog size.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, Prompt};

/// Text shown once every prompt has been served.
pub const FINISHED_TEXT: &str = "Game Finished!";

/// Result of drawing from a [`PromptPool`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Draw {
    Prompt(Prompt),
    /// The pool is exhausted.
    Finished,
}

impl Draw {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match self {
            Self::Prompt(p) => Some(p),
            Self::Finished => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Prompt(p) => p.as_str(),
            Self::Finished => FINISHED_TEXT,
        }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Draws prompts from a catalog without repeats.
pub struct PromptPool<R = StdRng> {
    catalog: Catalog,
    /// Catalog indices not yet served. Order is irrelevant.
    remaining: Vec<usize>,
    /// Catalog indices in the order they were served.
    served: Vec<usize>,
    rng: R,
}

impl PromptPool<StdRng> {
    /// Pool with an entropy-seeded RNG.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Pool whose draw order is fully determined by `seed`.
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PromptPool<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        let remaining = (0..catalog.len()).collect();
        Self {
            served: Vec::with_capacity(catalog.len()),
            catalog,
            remaining,
            rng,
        }
    }

    /// Serve one not-yet-served prompt, or [`Draw::Finished`] when none
    /// remain. A finished pool is never mutated.
    pub fn draw(&mut self) -> Draw {
        if self.remaining.is_empty() {
            return Draw::Finished;
        }
        let slot = self.rng.random_range(0..self.remaining.len());
        let index = self.remaining.swap_remove(slot);
        self.served.push(index);
        match self.catalog.get(index) {
            Some(prompt) => {
                tracing::debug!(
                    prompt = prompt.as_str(),
                    remaining = self.remaining.len(),
                    "drew prompt"
                );
                Draw::Prompt(prompt.clone())
            }
            // Indices come from 0..catalog.len() and the catalog is immutable.
            None => Draw::Finished,
        }
    }

    /// Number of prompts in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn served(&self) -> usize {
        self.served.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn is_served(&self, prompt: &Prompt) -> bool {
        self.served_prompts().any(|p| p == prompt)
    }

    /// Served prompts in draw order.
    pub fn served_prompts(&self) -> impl Iterator<Item = &Prompt> + '_ {
        self.served.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
