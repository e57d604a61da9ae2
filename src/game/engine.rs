use tracing::{debug, info};

use super::board::Board;
use super::player::Player;
use super::rules::{GameRules, Placement};
use super::turn::TurnCounter;
use super::validator::{Move, MoveValidator};
use super::win::{WinDetector, WinningLine};
use crate::error::{MoveError, RulesError};

/// Where a game session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Won(Player),
    Drawn,
}

/// Result summary handed to front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl From<GameStatus> for GameOutcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::AwaitingMove(_) => GameOutcome::Ongoing,
            GameStatus::Won(player) => GameOutcome::Win(player),
            GameStatus::Drawn => GameOutcome::Draw,
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub outcome: GameOutcome,
}

/// Owns one game session: board, turn counter, and status.
///
/// Every change goes through [`apply_move`](Self::apply_move) or
/// [`reset`](Self::reset); front-ends only read.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: GameRules,
    board: Board,
    turns: TurnCounter,
    validator: MoveValidator,
    detector: WinDetector,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl RuleEngine {
    /// Build an engine for a custom board, failing fast on inconsistent rules.
    pub fn custom(
        rows: usize,
        cols: usize,
        run_length: usize,
        placement: Placement,
    ) -> Result<Self, RulesError> {
        GameRules::new(rows, cols, run_length, placement).map(Self::new)
    }

    pub fn connect_four() -> Self {
        Self::new(GameRules::connect_four())
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(GameRules::tic_tac_toe())
    }

    pub fn new(rules: GameRules) -> Self {
        RuleEngine {
            rules,
            board: Board::new(rules.rows(), rules.cols()),
            turns: TurnCounter::new(),
            validator: MoveValidator::new(rules.placement()),
            detector: WinDetector::new(rules.run_length()),
            status: GameStatus::AwaitingMove(Player::X),
            winning_line: None,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Board {
        self.board.snapshot()
    }

    pub fn validator(&self) -> &MoveValidator {
        &self.validator
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> GameOutcome {
        self.status.into()
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, GameStatus::AwaitingMove(_))
    }

    pub fn current_player(&self) -> Player {
        self.turns.current_player()
    }

    pub fn turn_count(&self) -> u32 {
        self.turns.count()
    }

    /// The completed run, once the game is won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Get list of legal moves; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.validator.legal_moves(&self.board)
    }

    /// Validate and play a move for the current player.
    ///
    /// A rejected move leaves the board, the turn counter, and the status
    /// untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let GameStatus::AwaitingMove(player) = self.status else {
            return Err(MoveError::GameOver);
        };

        let (row, col) = self.validator.resolve(&self.board, mv)?;
        self.board.place(row, col, player.to_cell())?;
        self.turns.advance();
        debug!(?player, row, col, turn = self.turns.count(), "move accepted");

        // Win check first: a move that fills the board and completes a run wins
        self.status = if let Some(line) = self.detector.wins_through(&self.board, row, col) {
            self.winning_line = Some(line);
            info!(?player, turns = self.turns.count(), "game won");
            GameStatus::Won(player)
        } else if self.board.is_full() {
            info!(turns = self.turns.count(), "game drawn");
            GameStatus::Drawn
        } else {
            GameStatus::AwaitingMove(self.turns.current_player())
        };

        Ok(MoveReport {
            player,
            row,
            col,
            outcome: self.outcome(),
        })
    }

    /// Start a new game with the same rules
    pub fn reset(&mut self) {
        self.board.reset();
        self.turns.reset();
        self.status = GameStatus::AwaitingMove(Player::X);
        self.winning_line = None;
    }
}
