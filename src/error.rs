use std::path::PathBuf;

/// Reasons a move is rejected. None of these consume a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {column} is not between 1 and {cols}")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("this game does not accept that kind of move")]
    WrongMoveKind,

    #[error("the game is already over")]
    GameOver,
}

/// Inconsistent board/rule configuration, reported when an engine is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("run length must be at least 1")]
    ZeroRunLength,

    #[error("run length {run_length} does not fit on a {rows}x{cols} board")]
    RunLengthTooLong {
        run_length: usize,
        rows: usize,
        cols: usize,
    },
}

/// Raw text that cannot be turned into a move at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no move entered")]
    Empty,

    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("expected a two-character cell like 3a, got '{0}'")]
    WrongLength(String),

    #[error("'{0}' is not a row on this board")]
    BadRow(char),

    #[error("'{0}' is not a column on this board")]
    BadColumn(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid game rules: {0}")]
    Rules(#[from] RulesError),
}
