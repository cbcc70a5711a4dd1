use relic_core::RiskTier;

/// Map a score to its rebuild-risk tier. Thresholds are contiguous over
/// [0, 100]; boundary values belong to the better tier (80 is Low, 40 is
/// Medium).
pub fn classify(score: u8) -> RiskTier {
    match score {
        80..=u8::MAX => RiskTier::Low,
        40..=79 => RiskTier::Medium,
        _ => RiskTier::High,
    }
}

pub fn strategy_for(risk: RiskTier) -> &'static str {
    match risk {
        RiskTier::Low => "Authority content rebuild",
        RiskTier::Medium => "Partial content & SEO refresh",
        RiskTier::High => "Full content & SEO rebuild",
    }
}
