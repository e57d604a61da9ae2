//! Terminal UI: play either game with the keyboard, optionally against the
//! computer.

mod app;
mod game_view;

pub use app::App;
