//! Cyclic turn order over a fixed number of players.

/// Index of the active player, advancing by one modulo the player count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnCycle {
    current: usize,
    count: usize,
}

impl TurnCycle {
    /// Start at seat 0. A `count` of zero is treated as one.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Move to the next seat and return it.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_players_wrap_around() {
        let mut turn = TurnCycle::new(3);
        let mut seen = vec![turn.current()];
        for _ in 0..3 {
            seen.push(turn.advance());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn returns_to_start_after_count_advances() {
        for players in 2..=10 {
            let mut turn = TurnCycle::new(players);
            for _ in 0..players {
                turn.advance();
            }
            assert_eq!(turn.current(), 0, "players = {players}");
        }
    }

    #[test]
    fn zero_count_does_not_panic() {
        let mut turn = TurnCycle::new(0);
        assert_eq!(turn.advance(), 0);
    }
}
