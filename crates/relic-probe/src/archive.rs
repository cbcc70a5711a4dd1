use std::collections::HashSet;

use relic_core::RelicResult;
use tokio::time::timeout;
use tracing::debug;

use crate::collector::ProbeConfig;

/// Count distinct archived snapshots of the domain via the Wayback CDX
/// index. Failure, timeout, or a garbled payload all degrade to 0.
pub async fn probe_archive(client: &reqwest::Client, config: &ProbeConfig, domain: &str) -> u32 {
    match timeout(config.archive_timeout, query_cdx(client, config, domain)).await {
        Ok(Ok(count)) => count,
        Ok(Err(e)) => {
            debug!(domain, error = %e, "archive probe failed");
            0
        }
        Err(_) => {
            debug!(domain, "archive probe timed out");
            0
        }
    }
}

async fn query_cdx(
    client: &reqwest::Client,
    config: &ProbeConfig,
    domain: &str,
) -> RelicResult<u32> {
    let resp = client
        .get(&config.cdx_url)
        .query(&[
            ("url", domain),
            ("output", "json"),
            ("fl", "timestamp"),
            ("collapse", "digest"),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Ok(0);
    }

    let body = resp.text().await?;
    Ok(parse_cdx_payload(&body))
}

/// The CDX json format is an array of rows where the first row is a column
/// header ("timestamp"), not a snapshot. Rows after it carry one timestamp
/// each; duplicates are collapsed.
pub(crate) fn parse_cdx_payload(body: &str) -> u32 {
    let rows: Vec<Vec<String>> = match serde_json::from_str(body) {
        Ok(rows) => rows,
        Err(_) => return 0,
    };

    let mut seen = HashSet::new();
    for row in rows.iter().skip(1) {
        if let Some(ts) = row.first() {
            if !ts.is_empty() {
                seen.insert(ts.as_str());
            }
        }
    }
    seen.len() as u32
}
