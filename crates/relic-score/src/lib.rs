pub mod classify;
pub mod report;
pub mod scoring;

pub use classify::{classify, strategy_for};
pub use report::assemble;
pub use scoring::compute_score;
