//! Embedded ML ensemble parameters (§4.6). These are ordinary compiled-in
//! constants — there is no training path in this crate; if the weights
//! ever need to change, a new build ships a new binary.

use crate::features::FEATURE_COUNT;

/// Identifies which trained snapshot these constants came from, plus basic
/// shape metadata so `Ensemble::new` can catch an accidental drift between
/// the arrays below without a full training pipeline to re-derive them.
pub struct WeightsHeader {
    pub model_id: &'static str,
    pub feature_count: usize,
    pub weight_count: usize,
    pub version: u32,
}

pub const HEADER: WeightsHeader = WeightsHeader {
    model_id: "phishguard-ensemble",
    feature_count: FEATURE_COUNT,
    weight_count: FEATURE_COUNT,
    version: 1,
};

/// Per-feature mean, used to standardize the feature vector before scoring.
pub const FEATURE_MEANS: [f64; FEATURE_COUNT] = [
    40.0, // url_length
    18.0, // host_length
    2.0,  // path_depth
    1.0,  // num_subdomains
    0.7,  // has_https
    0.05, // has_ip_host
    1.0,  // num_digits_host
    0.5,  // num_hyphens_host
    3.0,  // entropy_host
    0.02, // has_at_symbol
    0.1,  // path_has_credential_kw
    0.05, // query_has_credential_param
    0.5,  // tld_risk_tier
    0.2,  // num_obfuscations
    0.02, // shortener_flag
];

/// Per-feature standard deviation, paired with `FEATURE_MEANS`.
pub const FEATURE_STDS: [f64; FEATURE_COUNT] = [
    25.0, 8.0, 1.5, 1.0, 0.45, 0.22, 2.0, 1.0, 0.6, 0.14, 0.3, 0.22, 0.8, 0.5, 0.14,
];

/// `LinearLogistic` sub-model: sigma(w . standardized_x + b).
pub const LINEAR_WEIGHTS: [f64; FEATURE_COUNT] = [
    0.15, 0.10, 0.05, 0.25, -0.60, 0.90, 0.30, 0.20, 0.40, 0.80, 0.35, 0.30, 0.70, 0.90, 0.50,
];
pub const LINEAR_BIAS: f64 = -1.2;

/// A single decision stump in the `BoostedStumps` sub-model: evaluates
/// `standardized_x[feature_index] > threshold` and contributes `right` or
/// `left` to the running logit.
pub struct Stump {
    pub feature_index: usize,
    pub threshold: f64,
    pub left: f64,
    pub right: f64,
}

/// K = 50 stumps, cycling feature index with varied thresholds and leaf
/// weights. Passed through sigma to form the `BoostedStumps` probability.
pub const STUMPS: [Stump; 50] = [
    Stump { feature_index: 0, threshold: 0.5, left: -0.02, right: 0.06 },
    Stump { feature_index: 1, threshold: 0.3, left: -0.02, right: 0.05 },
    Stump { feature_index: 2, threshold: 0.8, left: -0.01, right: 0.04 },
    Stump { feature_index: 3, threshold: 1.0, left: -0.02, right: 0.08 },
    Stump { feature_index: 4, threshold: 0.0, left: 0.10, right: -0.12 },
    Stump { feature_index: 5, threshold: 0.0, left: -0.05, right: 0.22 },
    Stump { feature_index: 6, threshold: 0.7, left: -0.02, right: 0.07 },
    Stump { feature_index: 7, threshold: 0.9, left: -0.02, right: 0.06 },
    Stump { feature_index: 8, threshold: 1.2, left: -0.03, right: 0.09 },
    Stump { feature_index: 9, threshold: 0.0, left: -0.04, right: 0.20 },
    Stump { feature_index: 10, threshold: 0.0, left: -0.03, right: 0.09 },
    Stump { feature_index: 11, threshold: 0.0, left: -0.03, right: 0.08 },
    Stump { feature_index: 12, threshold: 0.8, left: -0.02, right: 0.14 },
    Stump { feature_index: 13, threshold: 0.5, left: -0.03, right: 0.18 },
    Stump { feature_index: 14, threshold: 0.0, left: -0.02, right: 0.12 },
    Stump { feature_index: 0, threshold: 1.5, left: -0.01, right: 0.05 },
    Stump { feature_index: 1, threshold: 1.0, left: -0.01, right: 0.04 },
    Stump { feature_index: 2, threshold: 1.6, left: -0.01, right: 0.03 },
    Stump { feature_index: 3, threshold: 2.0, left: -0.01, right: 0.07 },
    Stump { feature_index: 5, threshold: 0.5, left: -0.03, right: 0.18 },
    Stump { feature_index: 6, threshold: 1.4, left: -0.01, right: 0.05 },
    Stump { feature_index: 7, threshold: 1.8, left: -0.01, right: 0.05 },
    Stump { feature_index: 8, threshold: 2.0, left: -0.02, right: 0.08 },
    Stump { feature_index: 9, threshold: 0.5, left: -0.03, right: 0.16 },
    Stump { feature_index: 10, threshold: 0.5, left: -0.02, right: 0.07 },
    Stump { feature_index: 11, threshold: 0.5, left: -0.02, right: 0.06 },
    Stump { feature_index: 12, threshold: 1.6, left: -0.02, right: 0.12 },
    Stump { feature_index: 13, threshold: 1.0, left: -0.02, right: 0.15 },
    Stump { feature_index: 14, threshold: 0.5, left: -0.02, right: 0.10 },
    Stump { feature_index: 0, threshold: 2.2, left: -0.01, right: 0.04 },
    Stump { feature_index: 1, threshold: 1.8, left: -0.01, right: 0.03 },
    Stump { feature_index: 2, threshold: 2.4, left: -0.01, right: 0.03 },
    Stump { feature_index: 3, threshold: 3.0, left: -0.01, right: 0.06 },
    Stump { feature_index: 4, threshold: 1.0, left: 0.05, right: -0.08 },
    Stump { feature_index: 6, threshold: 2.0, left: -0.01, right: 0.04 },
    Stump { feature_index: 7, threshold: 2.5, left: -0.01, right: 0.04 },
    Stump { feature_index: 8, threshold: 2.8, left: -0.01, right: 0.06 },
    Stump { feature_index: 9, threshold: 1.0, left: -0.02, right: 0.12 },
    Stump { feature_index: 10, threshold: 1.0, left: -0.01, right: 0.05 },
    Stump { feature_index: 11, threshold: 1.0, left: -0.01, right: 0.05 },
    Stump { feature_index: 12, threshold: 2.4, left: -0.01, right: 0.10 },
    Stump { feature_index: 13, threshold: 1.5, left: -0.01, right: 0.12 },
    Stump { feature_index: 14, threshold: 1.0, left: -0.01, right: 0.08 },
    Stump { feature_index: 0, threshold: 3.0, left: -0.01, right: 0.03 },
    Stump { feature_index: 3, threshold: 4.0, left: -0.01, right: 0.05 },
    Stump { feature_index: 5, threshold: 1.0, left: -0.02, right: 0.14 },
    Stump { feature_index: 8, threshold: 3.5, left: -0.01, right: 0.05 },
    Stump { feature_index: 9, threshold: 1.5, left: -0.01, right: 0.09 },
    Stump { feature_index: 12, threshold: 3.0, left: -0.01, right: 0.08 },
    Stump { feature_index: 13, threshold: 2.0, left: -0.01, right: 0.10 },
    Stump { feature_index: 14, threshold: 1.5, left: -0.01, right: 0.06 },
];
