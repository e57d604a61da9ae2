use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::agent::Agent;
use crate::game::{Board, Move, MoveValidator, Placement};

/// How [`RandomAgent`] finds a legal move. Both are uniform over legal moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SamplingStrategy {
    /// Collect every legal move, then pick one.
    #[default]
    Enumerate,
    /// Draw random candidates until one is legal, giving up after
    /// `max_attempts` and enumerating instead.
    Reject { max_attempts: usize },
}

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
    strategy: SamplingStrategy,
}

impl RandomAgent {
    pub fn new(strategy: SamplingStrategy) -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            strategy,
        }
    }

    /// Deterministic agent for tests and reproducible sessions
    pub fn with_seed(strategy: SamplingStrategy, seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            strategy,
        }
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    fn enumerate(&mut self, board: &Board, validator: &MoveValidator) -> Option<Move> {
        let moves = validator.legal_moves(board);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn reject(
        &mut self,
        board: &Board,
        validator: &MoveValidator,
        max_attempts: usize,
    ) -> Option<Move> {
        for attempt in 1..=max_attempts {
            let candidate = self.candidate(board, validator.placement());
            if validator.is_legal(board, candidate) {
                debug!(attempt, ?candidate, "rejection sampling accepted");
                return Some(candidate);
            }
        }
        warn!(max_attempts, "rejection sampling gave up, enumerating legal moves");
        self.enumerate(board, validator)
    }

    /// A uniformly random move shape for the board, legal or not
    fn candidate(&mut self, board: &Board, placement: Placement) -> Move {
        match placement {
            Placement::Drop => Move::Drop {
                column: self.rng.random_range(1..=board.cols()),
            },
            Placement::Free => Move::Place {
                row: self.rng.random_range(0..board.rows()),
                col: self.rng.random_range(0..board.cols()),
            },
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(SamplingStrategy::default())
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, validator: &MoveValidator) -> Option<Move> {
        match self.strategy {
            SamplingStrategy::Enumerate => self.enumerate(board, validator),
            SamplingStrategy::Reject { max_attempts } => {
                self.reject(board, validator, max_attempts)
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
