use std::time::Duration;

use relic_core::{domain, normalize_domain, RawSignals, RelicResult};
use tracing::info;

use crate::spam::{DefaultSpamHeuristic, SpamHeuristic};
use crate::{archive, dns, https};

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub dns_timeout: Duration,
    pub https_timeout: Duration,
    pub archive_timeout: Duration,
    pub doh_url: String,
    pub cdx_url: String,
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(3),
            https_timeout: Duration::from_secs(4),
            archive_timeout: Duration::from_secs(5),
            doh_url: "https://dns.google/resolve".to_string(),
            cdx_url: "https://web.archive.org/cdx/search/cdx".to_string(),
            user_agent: "Mozilla/5.0 (compatible; RelicBot/0.1)".to_string(),
        }
    }
}

/// Runs the three network probes concurrently against one domain and folds
/// the outcomes, plus the local spam heuristic, into a `RawSignals`.
pub struct SignalCollector {
    client: reqwest::Client,
    config: ProbeConfig,
    heuristic: Box<dyn SpamHeuristic>,
}

impl SignalCollector {
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_heuristic(config, Box::new(DefaultSpamHeuristic::new()))
    }

    pub fn with_heuristic(config: ProbeConfig, heuristic: Box<dyn SpamHeuristic>) -> Self {
        // Redirects stay unfollowed so 301/302 reach the scorer as-is.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            config,
            heuristic,
        }
    }

    /// Validate and normalize the input, then let all three probes settle.
    /// A probe that fails or times out contributes its worst-case default;
    /// only invalid input makes this return an error.
    pub async fn collect(&self, raw_domain: &str) -> RelicResult<RawSignals> {
        let domain = normalize_domain(raw_domain)?;

        let (dns_answer, https_outcome, snapshots) = tokio::join!(
            dns::probe_dns(&self.client, &self.config, &domain),
            https::probe_https(&self.client, &self.config, &domain),
            archive::probe_archive(&self.client, &self.config, &domain),
        );

        // A live HTTPS endpoint implies the name resolves even when the
        // resolver query itself failed.
        let dns_resolves = dns_answer || https_outcome.supported;
        let is_spam_like = self.heuristic.is_spam_like(&domain);

        info!(
            domain = %domain,
            dns = dns_resolves,
            https = https_outcome.supported,
            status = https_outcome.status,
            snapshots,
            spam = is_spam_like,
            "signals collected"
        );

        Ok(RawSignals {
            domain_length: domain.len(),
            tld: domain::tld_of(&domain),
            domain,
            dns_resolves,
            https_supported: https_outcome.supported,
            http_status: https_outcome.status,
            archive_snapshots: snapshots,
            is_spam_like,
        })
    }
}
