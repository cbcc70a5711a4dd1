use relic_core::RelicResult;
use tokio::time::timeout;
use tracing::debug;

use crate::collector::ProbeConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsOutcome {
    pub supported: bool,
    /// Status of the response, 0 when no response was obtained.
    pub status: u16,
}

/// HEAD `https://{domain}` without following redirects; some origins reject
/// HEAD outright, so 405/501 retries once as GET. A response with any status
/// counts as HTTPS support; connection-level failure yields `(false, 0)`.
pub async fn probe_https(
    client: &reqwest::Client,
    config: &ProbeConfig,
    domain: &str,
) -> HttpsOutcome {
    match timeout(config.https_timeout, request(client, domain)).await {
        Ok(Ok(status)) => HttpsOutcome {
            supported: true,
            status,
        },
        Ok(Err(e)) => {
            debug!(domain, error = %e, "https probe failed");
            HttpsOutcome::default()
        }
        Err(_) => {
            debug!(domain, "https probe timed out");
            HttpsOutcome::default()
        }
    }
}

async fn request(client: &reqwest::Client, domain: &str) -> RelicResult<u16> {
    let url = format!("https://{domain}");
    let resp = client.head(&url).send().await?;
    let status = resp.status().as_u16();

    if status == 405 || status == 501 {
        let resp = client.get(&url).send().await?;
        return Ok(resp.status().as_u16());
    }

    Ok(status)
}
