//! TLD scorer (§4.5): registrable-domain and subdomain-count resolution via
//! a bundled Public Suffix List, plus a separate risk-tier table.
//!
//! The teacher's `garuda/engine/features.rs` resolves the public suffix
//! with `publicsuffix::List::fetch()` — a network call, which the spec's
//! "no network access" non-goal rules out entirely. This keeps the same
//! crate and the same `Psl` trait but loads the list once from a bundled
//! snippet via `include_str!` instead.

mod data;

use std::str::FromStr;

use publicsuffix::{List, Psl};

use crate::error::ConfigError;

const PSL_SNIPPET: &str = include_str!("tld/psl_snippet.txt");

pub struct TldTable {
    list: List,
}

impl TldTable {
    pub fn new() -> Result<Self, ConfigError> {
        let list = List::from_str(PSL_SNIPPET)
            .map_err(|e| ConfigError::InvalidPsl(e.to_string()))?;
        Ok(Self { list })
    }

    /// The resolved effective TLD (public suffix) for `host`, e.g.
    /// `"co.uk"` for `"www.example.co.uk"`. Falls back to the last label
    /// when the PSL has no match, so the risk-tier lookup always has
    /// something to classify.
    pub fn suffix(&self, host: &str) -> String {
        self.list
            .suffix(host.as_bytes())
            .map(|s| String::from_utf8_lossy(s.as_bytes()).into_owned())
            .unwrap_or_else(|| host.rsplit('.').next().unwrap_or("").to_string())
    }

    /// Risk tier 0..=3, used both as feature #13 and to derive the TLD
    /// component score.
    pub fn risk_tier(&self, host: &str) -> u8 {
        data::classify(&self.suffix(host))
    }

    /// The TLD component score contributed by this host's suffix, one of
    /// `{0, 3, 7, 25}`.
    pub fn score(&self, host: &str) -> u8 {
        data::tier_to_score(self.risk_tier(host))
    }

    /// Same mapping as `score`, but from an already-resolved tier — lets a
    /// caller that already called `risk_tier` (the orchestrator does, to
    /// build `HeuristicContext`) avoid a second suffix lookup for the same
    /// host.
    pub fn score_for_tier(&self, tier: u8) -> u8 {
        data::tier_to_score(tier)
    }

    /// The registrable domain (eTLD+1), e.g. `"example.co.uk"`.
    pub fn registrable_domain(&self, host: &str) -> String {
        self.list
            .domain(host.as_bytes())
            .map(|d| String::from_utf8_lossy(d.as_bytes()).into_owned())
            .unwrap_or_else(|| host.to_string())
    }

    /// Labels in `host` that sit below the registrable domain.
    pub fn num_subdomains(&self, host: &str) -> u32 {
        if host.is_empty() {
            return 0;
        }
        let registrable = self.registrable_domain(host);
        if host == registrable || registrable.is_empty() {
            return 0;
        }
        match host.strip_suffix(registrable.as_str()) {
            Some(prefix) => {
                let prefix = prefix.trim_end_matches('.');
                if prefix.is_empty() {
                    0
                } else {
                    prefix.split('.').count() as u32
                }
            }
            None => 0,
        }
    }
}
