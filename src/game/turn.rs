use super::player::Player;

/// Number of accepted moves so far. Whose turn it is follows from its parity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnCounter(u32);

impl TurnCounter {
    pub fn new() -> Self {
        TurnCounter(0)
    }

    pub fn count(self) -> u32 {
        self.0
    }

    pub fn current_player(self) -> Player {
        Player::from_turn(self.0)
    }

    /// Record one accepted move
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_x() {
        let turns = TurnCounter::new();
        assert_eq!(turns.count(), 0);
        assert_eq!(turns.current_player(), Player::X);
    }

    #[test]
    fn test_advance_alternates_players() {
        let mut turns = TurnCounter::new();
        turns.advance();
        assert_eq!(turns.current_player(), Player::O);
        turns.advance();
        assert_eq!(turns.current_player(), Player::X);
        assert_eq!(turns.count(), 2);
        turns.reset();
        assert_eq!(turns, TurnCounter::default());
    }
}
