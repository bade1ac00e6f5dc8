//! Brand-impersonation detector (§4.4): fuzzy-matches host labels and the
//! first path segment against a curated brand database.

mod data;

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::types::{BrandEntry, NormalizedUrl, Signal, SignalId};

pub struct BrandDetector {
    /// Bucketed by the first byte of the brand keyword, per §9's guidance
    /// ("bucket index by first letter + length ± 2") — keeps the typosquat
    /// scan from touching all ~500 entries on every candidate label.
    buckets: HashMap<u8, Vec<&'static BrandEntry>>,
    all: &'static [BrandEntry],
}

struct Candidate {
    brand: &'static BrandEntry,
    keyword: &'static str,
    score: u8,
    match_kind: &'static str,
    distance: usize,
}

impl BrandDetector {
    /// Builds the bucket index once over the embedded table, after
    /// validating the invariants §3 requires of every `Brand` entry: unique
    /// names, non-empty suffix sets. A violation here is a build-time data
    /// bug in `brand::data::BRANDS`, not a per-URL failure — the same shape
    /// of check as `TldTable::new` and `Ensemble::new`.
    pub fn new() -> Result<Self, ConfigError> {
        let mut seen_names = std::collections::HashSet::new();
        for brand in data::BRANDS {
            if !seen_names.insert(brand.name) {
                return Err(ConfigError::InvalidBrandTable(format!("duplicate brand name {:?}", brand.name)));
            }
            if brand.suffixes.is_empty() {
                return Err(ConfigError::InvalidBrandTable(format!("brand {:?} has no legitimate suffixes", brand.name)));
            }
        }

        let mut buckets: HashMap<u8, Vec<&'static BrandEntry>> = HashMap::new();
        for brand in data::BRANDS {
            for keyword in brand.keywords {
                if let Some(first) = keyword.as_bytes().first() {
                    buckets.entry(*first).or_default().push(brand);
                }
            }
        }
        Ok(Self { buckets, all: data::BRANDS })
    }

    /// Runs the full algorithm from §4.4 and returns the single best signal
    /// (either `BRAND_LEGITIMATE` or the best-scoring impersonation
    /// candidate), plus the raw brand component score.
    pub fn detect(&self, normalized: &NormalizedUrl, tld_tier: u8) -> (u8, Signal) {
        if let Some(brand) = self.find_legitimate(&normalized.host) {
            return (
                0,
                Signal::fired(
                    SignalId::BrandLegitimate,
                    0,
                    "host matches a known-legitimate brand domain",
                    vec![brand.name.to_string()],
                ),
            );
        }

        let labels: Vec<&str> = normalized.host.split('.').collect();
        let first_path_segment = normalized.path.split('/').find(|s| !s.is_empty());

        let mut candidates: Vec<Candidate> = Vec::new();
        for label in labels.iter().chain(first_path_segment.iter()) {
            self.collect_candidates(label, &mut candidates);
            // Compound labels like "paypa1-secure" hide a brand keyword
            // behind a hyphenated suffix; match on the hyphen-split tokens
            // too, not just the label as a whole.
            if label.contains('-') {
                for token in label.split('-') {
                    self.collect_candidates(token, &mut candidates);
                }
            }
        }

        let Some(best) = self.pick_best(candidates) else {
            return (
                0,
                Signal::silent(SignalId::BrandKeywordNonBrandHost, 20, "host does not resemble any known brand"),
            );
        };

        // Reaching here already means `find_legitimate` found no match for
        // this host, so the BRAND_IN_SUBDOMAIN modifier always applies to a
        // candidate (§4.4 step 3: "host suffix not in legitimate set").
        let mut score = best.score.saturating_add(10);
        if tld_tier >= 2 {
            score = score.saturating_add(10);
        }
        if best.brand.high_value {
            score = score.saturating_add(5);
        }
        let score = score.min(100);

        let id = match best.match_kind {
            "exact" => SignalId::BrandKeywordNonBrandHost,
            "substitution" => SignalId::BrandSubstitution,
            _ => SignalId::BrandTyposquat,
        };

        let signal = Signal::fired(
            id,
            20,
            "host or path resembles a known brand but does not match its legitimate domain",
            vec![
                best.brand.name.to_string(),
                best.match_kind.to_string(),
                best.distance.to_string(),
            ],
        );

        (score, signal)
    }

    fn find_legitimate(&self, host: &str) -> Option<&'static BrandEntry> {
        self.all.iter().find(|b| {
            b.suffixes
                .iter()
                .any(|suffix| host == *suffix || host.ends_with(&format!(".{suffix}")))
        })
    }

    fn collect_candidates(&self, label: &str, out: &mut Vec<Candidate>) {
        if label.len() < 3 {
            return;
        }
        let lower = label.to_ascii_lowercase();
        let Some(first) = lower.as_bytes().first() else { return };
        let Some(bucket) = self.buckets.get(first) else { return };

        for brand in bucket {
            for keyword in brand.keywords {
                if (keyword.len() as i32 - lower.len() as i32).abs() > 6 {
                    continue;
                }
                if lower == *keyword {
                    out.push(Candidate { brand, keyword, score: 30, match_kind: "exact", distance: 0 });
                    continue;
                }
                let max_dist = (keyword.len() / 6).max(1);
                let dist = strsim::damerau_levenshtein(&lower, keyword);
                if dist <= max_dist {
                    out.push(Candidate { brand, keyword, score: 35, match_kind: "typosquat", distance: dist });
                    continue;
                }
                if matches_substitution(&lower, keyword) {
                    out.push(Candidate { brand, keyword, score: 35, match_kind: "substitution", distance: dist });
                }
            }
        }
    }

    fn pick_best(&self, mut candidates: Vec<Candidate>) -> Option<Candidate> {
        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(b.keyword.len().cmp(&a.keyword.len()))
                .then(a.brand.name.cmp(b.brand.name))
        });
        candidates.into_iter().next()
    }
}

/// Digit/letter and `rn`→`m` substitution folding, per §4.4's substitution
/// list. Folding both sides the same way turns the substitution check into
/// a plain equality test.
fn matches_substitution(label: &str, keyword: &str) -> bool {
    fold(label) == fold(keyword)
}

fn fold(s: &str) -> String {
    s.replace("rn", "m")
        .chars()
        .map(|c| match c {
            '1' | 'l' => 'l',
            '0' | 'o' => 'o',
            '5' | 's' => 's',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn legitimate_host_scores_zero() {
        let detector = BrandDetector::new().unwrap();
        let n = normalize("https://www.paypal.com/signin");
        let (score, signal) = detector.detect(&n, 0);
        assert_eq!(score, 0);
        assert_eq!(signal.id, SignalId::BrandLegitimate);
    }

    #[test]
    fn typosquat_host_is_flagged() {
        let detector = BrandDetector::new().unwrap();
        let n = normalize("https://paypa1-secure.tk/login");
        let (score, signal) = detector.detect(&n, 3);
        assert!(score > 0);
        assert!(matches!(
            signal.id,
            SignalId::BrandTyposquat | SignalId::BrandSubstitution | SignalId::BrandKeywordNonBrandHost
        ));
    }

    #[test]
    fn unrelated_host_has_no_candidates() {
        let detector = BrandDetector::new().unwrap();
        let n = normalize("https://my-personal-blog.example/");
        let (score, _signal) = detector.detect(&n, 1);
        assert_eq!(score, 0);
    }

    #[test]
    fn substitution_folding_matches_letter_number_swaps() {
        assert!(matches_substitution("paypa1", "paypal"));
        assert!(matches_substitution("goog1e", "google"));
    }
}
