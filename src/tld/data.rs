//! Risk-tier table (§4.5), independent of the bundled Public Suffix List —
//! the PSL resolves *which* suffix a host has; this table says how
//! dangerous that suffix is. Longest-suffix match wins.

/// Tier 0: safe. `.com`/`.org`/`.gov` plus ccTLDs of OECD member states.
pub const TIER_0: &[&str] = &[
    "com", "org", "gov", "edu", "mil",
    "uk", "co.uk", "org.uk", "ac.uk", "gov.uk",
    "au", "com.au", "net.au", "org.au", "gov.au", "edu.au",
    "nz", "co.nz", "net.nz", "org.nz",
    "ca", "de", "fr", "us", "ie", "nl", "se", "no", "dk", "fi",
    "es", "it", "ch", "at", "be", "pt", "gr", "mx", "kr", "co.kr", "or.kr",
    "jp", "co.jp", "ne.jp", "or.jp", "ac.jp",
    "il", "co.il", "org.il",
];

/// Tier 2: elevated-risk gTLDs, exactly as named in §4.5.
pub const TIER_2: &[&str] = &["xyz", "top", "online", "site"];

/// Tier 3: high-risk gTLDs, exactly as named in §4.5.
pub const TIER_3: &[&str] = &["tk", "ml", "ga", "cf", "gq", "zip", "mov"];

/// Maps a tier index to the risk score contributed to the TLD component.
pub fn tier_to_score(tier: u8) -> u8 {
    match tier {
        0 => 0,
        1 => 3,
        2 => 7,
        3 => 25,
        _ => 3,
    }
}

pub fn classify(suffix: &str) -> u8 {
    if TIER_3.iter().any(|s| *s == suffix) {
        3
    } else if TIER_2.iter().any(|s| *s == suffix) {
        2
    } else if TIER_0.iter().any(|s| *s == suffix) {
        0
    } else {
        1
    }
}
