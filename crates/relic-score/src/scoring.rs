use relic_core::RawSignals;

/// Additive SEO rebuild score over the collected signals, clamped to
/// [0, 100]. Each signal contributes independently; a missing DNS answer
/// forfeits its bonus but is not a hard floor, so archive history and
/// brandability still count for an offline domain.
pub fn compute_score(signals: &RawSignals) -> u8 {
    let mut score: i32 = 0;

    // Archive history, with diminishing weight per tier.
    score += match signals.archive_snapshots {
        n if n >= 50 => 25,
        n if n >= 20 => 15,
        n if n >= 5 => 5,
        _ => 0,
    };

    if signals.dns_resolves {
        score += 20;
    }
    if signals.https_supported {
        score += 15;
    }

    // 200 beats redirects beats anything else.
    score += match signals.http_status {
        200 => 15,
        301 => 10,
        302 => 5,
        _ => 0,
    };

    // Shorter names are more brandable.
    score += match signals.domain_length {
        0..=12 => 10,
        13..=18 => 5,
        _ => 0,
    };

    if signals.is_spam_like {
        score -= 20;
    }

    score.clamp(0, 100) as u8
}
