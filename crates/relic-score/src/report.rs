use chrono::Utc;
use relic_core::{RawSignals, Report};

use crate::{classify, compute_score, strategy_for};

/// Build the final report from collected signals. Cannot fail: every
/// `RawSignals` is fully populated, and score/classify are total.
pub fn assemble(signals: RawSignals) -> Report {
    let score = compute_score(&signals);
    let risk = classify(score);

    Report {
        score,
        risk,
        strategy: strategy_for(risk).to_string(),
        analyzed_at: Utc::now(),
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_core::RiskTier;

    fn dead_signals() -> RawSignals {
        RawSignals {
            domain: "example.com".to_string(),
            dns_resolves: false,
            https_supported: false,
            http_status: 0,
            archive_snapshots: 0,
            is_spam_like: false,
            domain_length: 11,
            tld: "com".to_string(),
        }
    }

    fn strong_signals() -> RawSignals {
        RawSignals {
            domain: "brand.com".to_string(),
            dns_resolves: true,
            https_supported: true,
            http_status: 200,
            archive_snapshots: 60,
            is_spam_like: false,
            domain_length: 9,
            tld: "com".to_string(),
        }
    }

    #[test]
    fn dead_domain_is_high_risk_full_rebuild() {
        let report = assemble(dead_signals());
        assert!(report.score < 40);
        assert_eq!(report.risk, RiskTier::High);
        assert_eq!(report.strategy, "Full content & SEO rebuild");
    }

    #[test]
    fn strong_domain_is_low_risk_light_touch() {
        let report = assemble(strong_signals());
        assert!(report.score >= 80);
        assert_eq!(report.risk, RiskTier::Low);
        assert_eq!(report.strategy, "Authority content rebuild");
    }

    #[test]
    fn spam_never_improves_score_or_tier() {
        let clean = assemble(strong_signals());
        let spam = assemble(RawSignals {
            is_spam_like: true,
            ..strong_signals()
        });
        assert!(spam.score < clean.score);
        assert!(spam.risk >= clean.risk);
    }

    #[test]
    fn degraded_archive_probe_still_produces_a_report() {
        // Archive timeout surfaces as snapshots=0 while the other probes
        // succeeded; the report must still assemble with a lower score.
        let degraded = assemble(RawSignals {
            archive_snapshots: 0,
            ..strong_signals()
        });
        let full = assemble(strong_signals());
        assert!(degraded.score < full.score);
        assert_eq!(degraded.strategy, strategy_for(degraded.risk));
    }

    #[test]
    fn assembly_is_repeatable() {
        let a = assemble(strong_signals());
        let b = assemble(strong_signals());
        assert_eq!(a.score, b.score);
        assert_eq!(a.risk, b.risk);
        assert_eq!(a.strategy, b.strategy);
    }

    #[test]
    fn report_serializes_with_flattened_signals() {
        let value = serde_json::to_value(assemble(strong_signals())).unwrap();
        assert_eq!(value["domain"], "brand.com");
        assert_eq!(value["risk"], "Low");
        assert!(value["score"].as_u64().unwrap() >= 80);
        assert!(value.get("analyzed_at").is_some());
    }
}
