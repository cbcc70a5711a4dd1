pub mod domain;
pub mod error;
pub mod types;

pub use domain::normalize_domain;
pub use error::{RelicError, RelicResult};
pub use types::{RawSignals, Report, RiskTier};
