//! ML ensemble (§4.6): three deterministic sub-models voting on a
//! phishing probability, combined by a fixed weighted average. Nothing
//! here trains at runtime — every parameter is a compiled-in constant in
//! `ml::weights`.

pub mod weights;

use crate::error::ConfigError;
use crate::features::Features;

pub struct Ensemble;

impl Ensemble {
    /// Validates the embedded weights header against the shapes of the
    /// constant arrays. A mismatch here means the crate was built with
    /// inconsistent `ml::weights` constants — a build-time bug, never a
    /// per-URL failure, so it is only ever reachable from `Pipeline::new`.
    pub fn new() -> Result<Self, ConfigError> {
        let header = &weights::HEADER;
        if header.feature_count != crate::features::FEATURE_COUNT
            || header.weight_count != weights::LINEAR_WEIGHTS.len()
            || header.weight_count != weights::FEATURE_MEANS.len()
            || header.weight_count != weights::FEATURE_STDS.len()
        {
            return Err(ConfigError::InvalidWeights(format!(
                "model {} declares {} weights but arrays carry {}",
                header.model_id,
                header.weight_count,
                weights::LINEAR_WEIGHTS.len()
            )));
        }
        Ok(Self)
    }

    /// Returns the ensemble's ML component score, 0..=100.
    pub fn score(&self, features: &Features) -> u8 {
        let standardized = standardize(features);

        let linear_prob = linear_logistic(&standardized);
        let boosted_prob = boosted_stumps(&standardized);
        let rule_prob = rule_model(features);

        let prob = 0.40 * linear_prob + 0.35 * boosted_prob + 0.25 * rule_prob;
        (prob.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

impl Default for Ensemble {
    fn default() -> Self {
        // The embedded constants are internally consistent by construction;
        // this is only a convenience for call sites that don't need to
        // observe the (practically unreachable) validation error.
        Self::new().expect("embedded ml::weights constants are self-consistent")
    }
}

fn standardize(features: &Features) -> [f64; crate::features::FEATURE_COUNT] {
    let raw = features.to_vector();
    let mut out = [0.0; crate::features::FEATURE_COUNT];
    for i in 0..raw.len() {
        let std = weights::FEATURE_STDS[i];
        out[i] = if std.abs() < f64::EPSILON {
            0.0
        } else {
            (raw[i] - weights::FEATURE_MEANS[i]) / std
        };
    }
    out
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn linear_logistic(standardized: &[f64; crate::features::FEATURE_COUNT]) -> f64 {
    let dot: f64 = standardized
        .iter()
        .zip(weights::LINEAR_WEIGHTS.iter())
        .map(|(x, w)| x * w)
        .sum();
    sigmoid(dot + weights::LINEAR_BIAS)
}

fn boosted_stumps(standardized: &[f64; crate::features::FEATURE_COUNT]) -> f64 {
    let logit: f64 = weights::STUMPS
        .iter()
        .map(|stump| {
            let x = standardized[stump.feature_index];
            if x > stump.threshold {
                stump.right
            } else {
                stump.left
            }
        })
        .sum();
    sigmoid(logit)
}

/// Short decision list: high-confidence combinations get a near-certain
/// probability without needing the full ensemble to agree.
fn rule_model(features: &Features) -> f64 {
    if features.has_ip_host && features.path_has_credential_kw {
        return 0.95;
    }
    if features.tld_risk_tier == 3 && features.path_has_credential_kw {
        return 0.9;
    }
    if features.shortener_flag {
        return 0.55;
    }
    if !features.has_https && features.path_has_credential_kw {
        return 0.6;
    }
    if features.num_obfuscations >= 2 {
        return 0.85;
    }
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::tld::TldTable;

    #[test]
    fn header_validates_against_constant_arrays() {
        assert!(Ensemble::new().is_ok());
    }

    #[test]
    fn benign_url_scores_low() {
        let table = TldTable::new().unwrap();
        let ensemble = Ensemble::new().unwrap();
        let n = normalize("https://example.com/");
        let features = crate::features::extract(&n, &table);
        assert!(ensemble.score(&features) < 40);
    }

    #[test]
    fn ip_host_with_credential_path_scores_high() {
        let table = TldTable::new().unwrap();
        let ensemble = Ensemble::new().unwrap();
        let n = normalize("http://192.168.1.1/login");
        let features = crate::features::extract(&n, &table);
        assert!(ensemble.score(&features) > 60);
    }

    #[test]
    fn score_is_always_bounded() {
        let table = TldTable::new().unwrap();
        let ensemble = Ensemble::new().unwrap();
        for raw in ["https://a.com", "not a url", "http://0xC0A80101/"] {
            let n = normalize(raw);
            let features = crate::features::extract(&n, &table);
            let score = ensemble.score(&features);
            assert!(score <= 100);
        }
    }
}
