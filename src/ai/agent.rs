use crate::game::{Board, Move, MoveValidator};

/// Anything that can pick a move without human input.
pub trait Agent {
    /// Pick a move the validator accepts on this board.
    /// Returns `None` only when no legal move exists.
    fn select_move(&mut self, board: &Board, validator: &MoveValidator) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
