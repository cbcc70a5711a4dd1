use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized bundle of probe outcomes for one domain. Every field is
/// always populated: a failed probe degrades its field to false / 0,
/// never to an absent value, so scoring needs no null handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSignals {
    pub domain: String,
    pub dns_resolves: bool,
    pub https_supported: bool,
    /// HTTP status of the HTTPS probe; 0 means no response was obtained.
    pub http_status: u16,
    /// Distinct archived snapshot timestamps, excluding the CDX header row.
    pub archive_snapshots: u32,
    pub is_spam_like: bool,
    pub domain_length: usize,
    pub tld: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub signals: RawSignals,
    pub score: u8,
    pub risk: RiskTier,
    pub strategy: String,
    pub analyzed_at: DateTime<Utc>,
}
