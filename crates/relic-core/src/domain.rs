use crate::error::{RelicError, RelicResult};

/// Normalize user input into a bare lowercase domain name: strips an
/// optional scheme, any path/query suffix, a trailing dot, and rejects
/// anything that does not look like a hostname.
pub fn normalize_domain(input: &str) -> RelicResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RelicError::InvalidDomain("empty input".into()));
    }

    let host = if trimmed.contains("://") {
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| RelicError::InvalidDomain(format!("{trimmed}: {e}")))?;
        parsed
            .host_str()
            .ok_or_else(|| RelicError::InvalidDomain(format!("{trimmed}: no host")))?
            .to_string()
    } else {
        trimmed
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .to_string()
    };
    let host = host.trim_end_matches('.').to_lowercase();

    if host.is_empty() {
        return Err(RelicError::InvalidDomain(input.into()));
    }
    if !host.contains('.') {
        return Err(RelicError::InvalidDomain(format!("{host}: missing TLD")));
    }
    if host.split('.').any(|label| label.is_empty()) {
        return Err(RelicError::InvalidDomain(format!("{host}: empty label")));
    }
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(RelicError::InvalidDomain(format!(
            "{host}: unexpected character"
        )));
    }

    Ok(host)
}

/// Last label of an already-normalized domain.
pub fn tld_of(domain: &str) -> String {
    domain.rsplit('.').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(
            normalize_domain("https://Example.COM/some/path?q=1").unwrap(),
            "example.com"
        );
        assert_eq!(normalize_domain("http://foo.bar.net").unwrap(), "foo.bar.net");
    }

    #[test]
    fn strips_trailing_dot_and_whitespace() {
        assert_eq!(normalize_domain("  example.org.  ").unwrap(), "example.org");
    }

    #[test]
    fn rejects_empty_and_bare_labels() {
        assert!(normalize_domain("").is_err());
        assert!(normalize_domain("   ").is_err());
        assert!(normalize_domain("localhost").is_err());
        assert!(normalize_domain("https://").is_err());
        assert!(normalize_domain("foo..bar").is_err());
    }

    #[test]
    fn rejects_garbage_characters() {
        assert!(normalize_domain("exa mple.com").is_err());
        assert!(normalize_domain("exam_ple.com").is_err());
    }

    #[test]
    fn tld_extraction() {
        assert_eq!(tld_of("example.co.uk"), "uk");
        assert_eq!(tld_of("example.com"), "com");
    }
}
