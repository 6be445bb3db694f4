//! Player setup: the editable list of name slots and the validated
//! [`Players`] it produces.

use std::fmt;

use thiserror::Error;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most name slots the setup form offers.
pub const MAX_PLAYERS: usize = 10;

/// Rejected setup action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("at least {MIN_PLAYERS} named players are required (have {named})")]
    NotEnoughPlayers { named: usize },
    #[error("no more than {MAX_PLAYERS} players can join")]
    TooManyPlayers,
    #[error("the roster needs at least {MIN_PLAYERS} slots")]
    TooFewSlots,
    #[error("no player slot {index} (roster has {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

// ── Player ────────────────────────────────────────────────────────────

/// A named player and their seat in turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub seat: usize,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Validated players: at least [`MIN_PLAYERS`], every name non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players(Vec<Player>);

impl Players {
    /// Validate a list of names. Names are trimmed and blanks dropped.
    pub fn from_names<I, S>(names: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .enumerate()
            .map(|(seat, name)| Player { name, seat })
            .collect();
        if players.len() < MIN_PLAYERS {
            return Err(SetupError::NotEnoughPlayers {
                named: players.len(),
            });
        }
        if players.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers);
        }
        Ok(Self(players))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: construction requires at least two players.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.0.get(seat)
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Players {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Roster ────────────────────────────────────────────────────────────

/// The setup form: between [`MIN_PLAYERS`] and [`MAX_PLAYERS`] name slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    slots: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Two empty slots.
    pub fn new() -> Self {
        Self {
            slots: vec![String::new(); MIN_PLAYERS],
        }
    }

    /// Roster prefilled with `names`, padded to [`MIN_PLAYERS`] slots and
    /// truncated to [`MAX_PLAYERS`].
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots: Vec<String> = names.into_iter().take(MAX_PLAYERS).map(Into::into).collect();
        if slots.len() < MIN_PLAYERS {
            slots.resize(MIN_PLAYERS, String::new());
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a roster keeps at least two slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn can_add(&self) -> bool {
        self.slots.len() < MAX_PLAYERS
    }

    pub fn can_remove(&self) -> bool {
        self.slots.len() > MIN_PLAYERS
    }

    /// Append an empty slot. Returns the new slot's index.
    pub fn add_slot(&mut self) -> Result<usize, SetupError> {
        if !self.can_add() {
            return Err(SetupError::TooManyPlayers);
        }
        self.slots.push(String::new());
        Ok(self.slots.len() - 1)
    }

    /// Remove slot `index`, returning the name it held.
    pub fn remove_slot(&mut self, index: usize) -> Result<String, SetupError> {
        self.check_index(index)?;
        if !self.can_remove() {
            return Err(SetupError::TooFewSlots);
        }
        Ok(self.slots.remove(index))
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), SetupError> {
        self.check_index(index)?;
        self.slots[index] = name.into();
        Ok(())
    }

    /// Mutable access for in-place editing (typing into a slot).
    pub fn name_mut(&mut self, index: usize) -> Option<&mut String> {
        self.slots.get_mut(index)
    }

    /// Number of slots holding a non-blank name.
    pub fn named_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.trim().is_empty()).count()
    }

    /// Whether a game can start from this roster.
    pub fn is_ready(&self) -> bool {
        self.named_count() >= MIN_PLAYERS
    }

    /// Validated players, blank slots dropped.
    pub fn players(&self) -> Result<Players, SetupError> {
        Players::from_names(&self.slots)
    }

    fn check_index(&self, index: usize) -> Result<(), SetupError> {
        if index >= self.slots.len() {
            return Err(SetupError::SlotOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}
