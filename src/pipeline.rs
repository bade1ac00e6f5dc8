//! Orchestrator: assembles the `Assessment` by running the fixed 7-stage
//! pipeline in sequence. Grounded on the shape of the teacher's
//! `ThreatEngine::score` in `engine.rs` — one struct holding the
//! process-lifetime static tables, one method doing the sequential
//! stage calls — but synchronous throughout, with no cache/queue/log
//! side effects: this orchestrator never suspends or performs I/O.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::brand::BrandDetector;
use crate::error::ConfigError;
use crate::features;
use crate::ml::Ensemble;
use crate::normalize::normalize;
use crate::payload;
use crate::policy;
use crate::tld::TldTable;
use crate::types::{Assessment, ComponentScores, Policy, PolicyDecision, Signal, SignalId, Verdict};
use crate::verdict;

pub struct Pipeline {
    tld_table: TldTable,
    brand_detector: BrandDetector,
    ensemble: Ensemble,
}

impl Pipeline {
    /// Builds the process-lifetime immutable tables once. The only
    /// fallible step in the whole crate: a corrupt bundled PSL snippet or
    /// an inconsistent `ml::weights` header.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            tld_table: TldTable::new()?,
            brand_detector: BrandDetector::new()?,
            ensemble: Ensemble::new()?,
        })
    }

    pub fn analyze(&self, raw_url: &str) -> Assessment {
        self.analyze_inner(raw_url, None)
    }

    pub fn analyze_with_policy(&self, raw_url: &str, policy: &Policy) -> Assessment {
        self.analyze_inner(raw_url, Some(policy))
    }

    fn analyze_inner(&self, raw_url: &str, policy: Option<&Policy>) -> Assessment {
        let start = Instant::now();

        if let Some(kind) = payload::detect(raw_url) {
            debug!(stage = "payload", kind, "recognized non-URL payload");
            return unknown_assessment(raw_url, SignalId::PayloadType, kind);
        }

        debug!(stage = "normalize", "normalizing input");
        let normalized = normalize(raw_url);
        if normalized.is_malformed() {
            return Assessment {
                url: raw_url.to_string(),
                final_score: 0,
                verdict: Verdict::Unknown,
                confidence: 0,
                components: ComponentScores { heuristic: 0, ml: 0, brand: 0, tld: 0 },
                signals: vec![Signal::fired(SignalId::Malformed, 0, "the input could not be parsed as a URL", vec![])],
                obfuscations: normalized.obfuscations,
            };
        }

        if let Some(policy) = policy {
            debug!(stage = "policy", "evaluating organizational policy");
            if let Some(decision) = policy::evaluate(policy, &normalized, &self.tld_table) {
                return policy_assessment(raw_url, decision, normalized.obfuscations.clone());
            }
        }

        debug!(stage = "features", "extracting feature vector");
        let features = features::extract(&normalized, &self.tld_table);

        debug!(stage = "brand", "matching against brand database");
        let tld_tier = self.tld_table.risk_tier(&normalized.host);
        let tld_score = self.tld_table.score_for_tier(tld_tier);
        let (brand_score, brand_signal) = self.brand_detector.detect(&normalized, tld_tier);

        debug!(stage = "heuristics", "evaluating rule set");
        let ctx = crate::heuristics::HeuristicContext {
            brand_keyword_in_non_brand_host: brand_signal.triggered && brand_signal.id != SignalId::BrandLegitimate,
            tld_risk_tier: tld_tier,
            tld_score,
        };
        let (heuristic_score, heuristic_signals) = crate::heuristics::evaluate(&normalized, &features, &ctx);

        debug!(stage = "ml", "scoring ensemble");
        let ml_score = self.ensemble.score(&features);

        let components = ComponentScores {
            heuristic: heuristic_score,
            ml: ml_score,
            brand: brand_score,
            tld: tld_score,
        };

        let mut triggered_signals: Vec<Signal> = heuristic_signals.into_iter().filter(|s| s.triggered).collect();
        if brand_signal.triggered {
            triggered_signals.push(brand_signal);
        }

        let result = verdict::determine(components, &triggered_signals);

        info!(
            verdict = ?result.verdict,
            score = result.final_score,
            elapsed_us = start.elapsed().as_micros() as u64,
            "analyze complete"
        );

        Assessment {
            url: raw_url.to_string(),
            final_score: result.final_score,
            verdict: result.verdict,
            confidence: result.confidence,
            components,
            signals: triggered_signals,
            obfuscations: normalized.obfuscations,
        }
    }
}

fn unknown_assessment(raw_url: &str, id: SignalId, evidence: &str) -> Assessment {
    Assessment {
        url: raw_url.to_string(),
        final_score: 0,
        verdict: Verdict::Unknown,
        confidence: 0,
        components: ComponentScores { heuristic: 0, ml: 0, brand: 0, tld: 0 },
        signals: vec![Signal::fired(id, 0, "recognized non-URL payload", vec![evidence.to_string()])],
        obfuscations: BTreeSet::new(),
    }
}

fn policy_assessment(raw_url: &str, decision: PolicyDecision, obfuscations: BTreeSet<crate::types::Obfuscation>) -> Assessment {
    let (verdict, score, id) = match decision {
        PolicyDecision::Blocked => (Verdict::Malicious, 100, SignalId::PolicyBlocked),
        PolicyDecision::Allowed => (Verdict::Safe, 0, SignalId::PolicyAllowed),
    };
    Assessment {
        url: raw_url.to_string(),
        final_score: score,
        verdict,
        confidence: 4,
        components: ComponentScores { heuristic: 0, ml: 0, brand: 0, tld: 0 },
        signals: vec![Signal::fired(id, 0, "organizational policy short-circuited this result", vec![])],
        obfuscations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benign_url_is_safe() {
        let pipeline = Pipeline::new().unwrap();
        let assessment = pipeline.analyze("https://google.com");
        assert_eq!(assessment.verdict, Verdict::Safe);
        assert_eq!(assessment.components.brand, 0);
    }

    #[test]
    fn homograph_host_is_malicious_via_critical_override() {
        let pipeline = Pipeline::new().unwrap();
        let assessment = pipeline.analyze("https://g\u{043E}\u{043E}gle.com");
        assert_eq!(assessment.verdict, Verdict::Malicious);
        assert!(assessment.signals.iter().any(|s| s.id == SignalId::Homograph));
    }

    #[test]
    fn non_url_payload_is_unknown() {
        let pipeline = Pipeline::new().unwrap();
        let assessment = pipeline.analyze("WIFI:S:Home;T:WPA;P:secret;;");
        assert_eq!(assessment.verdict, Verdict::Unknown);
    }

    #[test]
    fn malformed_input_is_unknown_with_zero_score() {
        let pipeline = Pipeline::new().unwrap();
        let assessment = pipeline.analyze("not a url at all");
        assert_eq!(assessment.verdict, Verdict::Unknown);
        assert_eq!(assessment.final_score, 0);
        assert_eq!(assessment.confidence, 0);
    }

    #[test]
    fn policy_block_short_circuits_pipeline() {
        let pipeline = Pipeline::new().unwrap();
        let mut policy = Policy::default();
        policy.blocked_hosts.push("example.com".to_string());
        let assessment = pipeline.analyze_with_policy("https://example.com/", &policy);
        assert_eq!(assessment.verdict, Verdict::Malicious);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let pipeline = Pipeline::new().unwrap();
        let a = pipeline.analyze("https://paypa1-secure.tk/login");
        let b = pipeline.analyze("https://paypa1-secure.tk/login");
        assert_eq!(a.final_score, b.final_score);
        assert_eq!(a.verdict, b.verdict);
    }
}
