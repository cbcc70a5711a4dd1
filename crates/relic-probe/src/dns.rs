use relic_core::RelicResult;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::debug;

use crate::collector::ProbeConfig;

#[derive(Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer")]
    answer: Option<Vec<DohAnswer>>,
}

#[derive(Deserialize)]
struct DohAnswer {
    #[allow(dead_code)]
    data: Option<String>,
}

/// Ask a DNS-over-HTTPS resolver whether the domain has any records.
/// Any failure (timeout, transport, malformed payload) degrades to false.
pub async fn probe_dns(client: &reqwest::Client, config: &ProbeConfig, domain: &str) -> bool {
    match timeout(config.dns_timeout, query_resolver(client, config, domain)).await {
        Ok(Ok(resolves)) => resolves,
        Ok(Err(e)) => {
            debug!(domain, error = %e, "dns probe failed");
            false
        }
        Err(_) => {
            debug!(domain, "dns probe timed out");
            false
        }
    }
}

async fn query_resolver(
    client: &reqwest::Client,
    config: &ProbeConfig,
    domain: &str,
) -> RelicResult<bool> {
    let resp = client
        .get(&config.doh_url)
        .query(&[("name", domain)])
        .header(reqwest::header::ACCEPT, "application/dns-json")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Ok(false);
    }

    let body: DohResponse = resp.json().await?;
    Ok(body.answer.map(|a| !a.is_empty()).unwrap_or(false))
}
