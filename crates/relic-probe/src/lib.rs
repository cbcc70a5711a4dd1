pub mod archive;
pub mod collector;
pub mod dns;
pub mod https;
pub mod spam;

pub use collector::{ProbeConfig, SignalCollector};
pub use spam::{DefaultSpamHeuristic, SpamHeuristic};
