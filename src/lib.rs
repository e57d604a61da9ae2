//! # Grid Games
//!
//! Connect Four and Tic-Tac-Toe on a shared rule engine, with a random
//! computer opponent, a line-oriented console, and a terminal UI built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, rules, move validation, win detection, engine
//! - [`ai`]: Agent trait and the uniform random computer player
//! - [`input`]: Parsing typed moves (`4`, `3a`) and formatting them back
//! - [`console`]: Text console front-end
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
