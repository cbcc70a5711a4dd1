use regex::Regex;

/// Local spam check over the domain string alone. Implementations must be
/// pure and total: no I/O, no failure mode, same input same answer. The
/// rule set is deliberately swappable since no single canonical definition
/// of "spammy domain" exists.
pub trait SpamHeuristic: Send + Sync {
    fn is_spam_like(&self, domain: &str) -> bool;
}

const SPAM_TLDS: &[&str] = &["tk", "ml", "ga", "cf", "gq", "top", "click", "loan"];

const SPAM_KEYWORDS: &[&str] = &[
    "casino", "viagra", "pills", "porn", "xxx", "payday", "replica", "betting",
];

const DIGIT_RUN: &str = "[0-9]{6,}";

/// Default rule set: spam-associated TLDs, low-value keywords in the name,
/// or a long digit run anywhere in the domain.
pub struct DefaultSpamHeuristic {
    digit_run: Regex,
    tlds: Vec<String>,
    keywords: Vec<String>,
}

impl DefaultSpamHeuristic {
    pub fn new() -> Self {
        Self::with_extra(&[], &[])
    }

    pub fn with_extra(extra_tlds: &[String], extra_keywords: &[String]) -> Self {
        let mut tlds: Vec<String> = SPAM_TLDS.iter().map(|t| t.to_string()).collect();
        tlds.extend(extra_tlds.iter().map(|t| t.to_lowercase()));

        let mut keywords: Vec<String> = SPAM_KEYWORDS.iter().map(|k| k.to_string()).collect();
        keywords.extend(extra_keywords.iter().map(|k| k.to_lowercase()));

        Self {
            digit_run: Regex::new(DIGIT_RUN).expect("static pattern"),
            tlds,
            keywords,
        }
    }
}

impl Default for DefaultSpamHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl SpamHeuristic for DefaultSpamHeuristic {
    fn is_spam_like(&self, domain: &str) -> bool {
        let tld = relic_core::domain::tld_of(domain);
        if self.tlds.contains(&tld) {
            return true;
        }
        if self.keywords.iter().any(|k| domain.contains(k.as_str())) {
            return true;
        }
        self.digit_run.is_match(domain)
    }
}
