//! Computer opponents. The only one shipped picks uniformly among legal moves.

mod agent;
mod random;

pub use agent::Agent;
pub use random::{RandomAgent, SamplingStrategy};
