//! Computer opponents: the `Strategy` trait, its two difficulty levels and
//! the factory that picks one for a new game.

mod echo;
mod strategy;
mod threat;

pub use echo::EchoStrategy;
pub use strategy::{new_strategy, Difficulty, Strategy, MAX_DIFFICULTY};
pub use threat::ThreatScanner;
