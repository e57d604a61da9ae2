use crate::error::RulesError;

/// How a move picks its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Choose a column; the piece falls to the lowest empty cell.
    Drop,
    /// Choose any empty cell.
    Free,
}

/// The two built-in games.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    ConnectFour,
    TicTacToe,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::ConnectFour => "Connect Four",
            GameKind::TicTacToe => "Tic-Tac-Toe",
        }
    }
}

/// Board dimensions, winning run length, and placement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameRules {
    rows: usize,
    cols: usize,
    run_length: usize,
    placement: Placement,
}

impl GameRules {
    /// Custom rules. Fails when the board is empty or the run can never fit.
    pub fn new(
        rows: usize,
        cols: usize,
        run_length: usize,
        placement: Placement,
    ) -> Result<Self, RulesError> {
        if rows == 0 || cols == 0 {
            return Err(RulesError::EmptyBoard { rows, cols });
        }
        if run_length == 0 {
            return Err(RulesError::ZeroRunLength);
        }
        if run_length > rows && run_length > cols {
            return Err(RulesError::RunLengthTooLong {
                run_length,
                rows,
                cols,
            });
        }
        Ok(GameRules {
            rows,
            cols,
            run_length,
            placement,
        })
    }

    /// 6 rows, 7 columns, four in a row, gravity drop
    pub const fn connect_four() -> Self {
        GameRules {
            rows: 6,
            cols: 7,
            run_length: 4,
            placement: Placement::Drop,
        }
    }

    /// 3x3, three in a row, free placement
    pub const fn tic_tac_toe() -> Self {
        GameRules {
            rows: 3,
            cols: 3,
            run_length: 3,
            placement: Placement::Free,
        }
    }

    pub fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::ConnectFour => Self::connect_four(),
            GameKind::TicTacToe => Self::tic_tac_toe(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Number of moves that fill the board
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}
