//! Organizational policy short-circuit (§6). Evaluated before the full
//! pipeline runs; a `Blocked`/`Allowed` result takes precedence over the
//! computed verdict.

use crate::tld::TldTable;
use crate::types::{NormalizedUrl, Policy, PolicyDecision};

pub fn evaluate(policy: &Policy, normalized: &NormalizedUrl, tld_table: &TldTable) -> Option<PolicyDecision> {
    if policy.allowed_hosts.iter().any(|pattern| matches_glob(pattern, &normalized.host)) {
        return Some(PolicyDecision::Allowed);
    }

    if policy.blocked_hosts.iter().any(|pattern| matches_glob(pattern, &normalized.host)) {
        return Some(PolicyDecision::Blocked);
    }

    if !policy.blocked_tlds.is_empty() {
        let suffix = tld_table.suffix(&normalized.host);
        if policy.blocked_tlds.contains(&suffix) {
            return Some(PolicyDecision::Blocked);
        }
    }

    if policy.require_https && !normalized.has_https() {
        return Some(PolicyDecision::Blocked);
    }

    if policy.block_shorteners && crate::features::is_shortener(&normalized.host) {
        return Some(PolicyDecision::Blocked);
    }

    None
}

/// Supports exact host match and a single leading `*.` wildcard, the only
/// two glob shapes the spec's `allowed_hosts`/`blocked_hosts` sets need.
fn matches_glob(pattern: &str, host: &str) -> bool {
    match pattern.strip_prefix("*.") {
        Some(suffix) => host == suffix || host.ends_with(&format!(".{suffix}")),
        None => host == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use std::collections::BTreeSet;

    fn table() -> TldTable {
        TldTable::new().unwrap()
    }

    #[test]
    fn allowed_host_wins_even_if_also_blocked_by_tld() {
        let mut policy = Policy::default();
        policy.allowed_hosts.push("example.tk".to_string());
        policy.blocked_tlds = BTreeSet::from(["tk".to_string()]);
        let n = normalize("https://example.tk/");
        assert_eq!(evaluate(&policy, &n, &table()), Some(PolicyDecision::Allowed));
    }

    #[test]
    fn blocked_tld_short_circuits() {
        let mut policy = Policy::default();
        policy.blocked_tlds = BTreeSet::from(["tk".to_string()]);
        let n = normalize("https://example.tk/");
        assert_eq!(evaluate(&policy, &n, &table()), Some(PolicyDecision::Blocked));
    }

    #[test]
    fn wildcard_blocked_host_matches_subdomains() {
        let mut policy = Policy::default();
        policy.blocked_hosts.push("*.evil.example".to_string());
        let n = normalize("https://a.evil.example/");
        assert_eq!(evaluate(&policy, &n, &table()), Some(PolicyDecision::Blocked));
    }

    #[test]
    fn require_https_blocks_plain_http() {
        let mut policy = Policy::default();
        policy.require_https = true;
        let n = normalize("http://example.com/");
        assert_eq!(evaluate(&policy, &n, &table()), Some(PolicyDecision::Blocked));
    }

    #[test]
    fn no_policy_rules_match_returns_none() {
        let policy = Policy::default();
        let n = normalize("https://example.com/");
        assert_eq!(evaluate(&policy, &n, &table()), None);
    }
}
