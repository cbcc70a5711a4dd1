use std::time::Duration;

use relic_core::{RelicError, RelicResult};
use relic_probe::{DefaultSpamHeuristic, ProbeConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct RelicConfig {
    pub api: Option<ApiConfig>,
    pub probes: Option<ProbesConfig>,
    pub spam: Option<SpamConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_api_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize)]
pub struct ProbesConfig {
    #[serde(default = "default_dns_timeout_ms")]
    pub dns_timeout_ms: u64,
    #[serde(default = "default_https_timeout_ms")]
    pub https_timeout_ms: u64,
    #[serde(default = "default_archive_timeout_ms")]
    pub archive_timeout_ms: u64,
    #[serde(default = "default_doh_url")]
    pub doh_url: String,
    #[serde(default = "default_cdx_url")]
    pub cdx_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct SpamConfig {
    #[serde(default)]
    pub extra_tlds: Vec<String>,
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_api_port() -> u16 {
    3000
}
fn default_api_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_dns_timeout_ms() -> u64 {
    3000
}
fn default_https_timeout_ms() -> u64 {
    4000
}
fn default_archive_timeout_ms() -> u64 {
    5000
}
fn default_doh_url() -> String {
    "https://dns.google/resolve".to_string()
}
fn default_cdx_url() -> String {
    "https://web.archive.org/cdx/search/cdx".to_string()
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RelicBot/0.1)".to_string()
}

impl RelicConfig {
    pub fn from_file(path: &str) -> RelicResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| RelicError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn probe_config(&self) -> ProbeConfig {
        match &self.probes {
            Some(p) => ProbeConfig {
                dns_timeout: Duration::from_millis(p.dns_timeout_ms),
                https_timeout: Duration::from_millis(p.https_timeout_ms),
                archive_timeout: Duration::from_millis(p.archive_timeout_ms),
                doh_url: p.doh_url.clone(),
                cdx_url: p.cdx_url.clone(),
                user_agent: p.user_agent.clone(),
            },
            None => ProbeConfig::default(),
        }
    }

    pub fn heuristic(&self) -> DefaultSpamHeuristic {
        match &self.spam {
            Some(s) => DefaultSpamHeuristic::with_extra(&s.extra_tlds, &s.extra_keywords),
            None => DefaultSpamHeuristic::new(),
        }
    }

    pub fn api_bind(&self) -> String {
        self.api
            .as_ref()
            .map(|a| a.bind.clone())
            .unwrap_or_else(default_api_bind)
    }

    pub fn api_port(&self) -> u16 {
        self.api.as_ref().map(|a| a.port).unwrap_or_else(default_api_port)
    }
}
