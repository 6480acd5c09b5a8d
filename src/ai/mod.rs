//! Computer players. Only uniform random column selection is provided.

mod agent;
mod random;

pub use agent::Agent;
pub use random::{play_random, RandomAgent};
