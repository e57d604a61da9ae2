//! Rule engines for gravity-drop (Connect Four) and free-placement
//! (Tic-Tac-Toe) grid games: board, players, move validation, win
//! detection, turn tracking, and the session state machine.

mod board;
mod engine;
mod player;
mod rules;
mod turn;
mod validator;
mod win;

pub use board::{Board, Cell};
pub use engine::{GameOutcome, GameStatus, MoveReport, RuleEngine};
pub use player::Player;
pub use rules::{GameKind, GameRules, Placement};
pub use turn::TurnCounter;
pub use validator::{Move, MoveValidator};
pub use win::{Axis, WinDetector, WinningLine};
