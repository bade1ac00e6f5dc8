//! Shared value types for the analysis pipeline.
//!
//! Everything here is a plain immutable value: no interior mutability, no
//! `Rc`/`Arc`. A `Url`/`NormalizedUrl`/`Assessment` produced once never
//! changes underneath a caller.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// The raw parts of a URL as split by a strict RFC 3986 subset grammar.
///
/// Parsing is total: a string that does not fit the grammar still yields a
/// `Url` (with `host` empty and the rest best-effort), never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub raw: String,
    pub scheme: String,
    pub userinfo: Option<String>,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Url {
    pub fn malformed(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            scheme: String::new(),
            userinfo: None,
            host: String::new(),
            port: None,
            path: String::new(),
            query: None,
            fragment: None,
        }
    }
}

/// A kind of adversarial obfuscation detected while normalizing a URL.
///
/// Declaration order doubles as the `BTreeSet` iteration order, so
/// `Assessment` serialization is stable across runs without needing a
/// separate sort step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Obfuscation {
    Malformed,
    MixedScripts,
    Punycode,
    RtlOverride,
    ZeroWidth,
    DoubleEncoding,
    DecimalIp,
    HexIp,
    OctalIp,
    AtSymbol,
}

/// A canonicalized URL plus the set of obfuscations observed while getting
/// there. `normalize(normalize(x).raw)` must equal `normalize(x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub raw: String,
    pub scheme: String,
    pub userinfo: Option<String>,
    /// Lowercased ASCII host (Punycode-encoded if the input was an IDN).
    pub host: String,
    /// The host as originally presented, before ASCII/Punycode conversion.
    pub host_unicode: String,
    pub port: Option<u16>,
    /// Percent-decoded once; case-preserving.
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub obfuscations: BTreeSet<Obfuscation>,
    /// True iff the host is a single decimal integer (e.g. `3232235777`),
    /// as distinct from dotted-decimal IPv4 (`192.168.1.1`) — both are
    /// `DECIMAL_IP` per §4.1 step 8, but §4.3's `OBFUSCATED_IP` rule must
    /// fire only on the integer form, not on a plain dotted IPv4 literal.
    /// Not part of `obfuscations`: it's an internal hint for that one rule,
    /// not a member of the closed `Obfuscation` set in §3.
    pub integer_ip_host: bool,
}

impl NormalizedUrl {
    pub fn is_malformed(&self) -> bool {
        self.obfuscations.contains(&Obfuscation::Malformed)
    }

    pub fn has_https(&self) -> bool {
        self.scheme == "https"
    }

    pub fn has_ip_host(&self) -> bool {
        self.obfuscations.contains(&Obfuscation::DecimalIp)
            || self.obfuscations.contains(&Obfuscation::HexIp)
            || self.obfuscations.contains(&Obfuscation::OctalIp)
    }
}

/// Stable, translatable signal identifiers. The rule table in the heuristics
/// engine and the critical-override set in the verdict determiner both key
/// off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalId {
    HttpNoTls,
    IpHost,
    ObfuscatedIp,
    AtInAuthority,
    ExcessiveSubdomains,
    LongUrl,
    HighEntropyHost,
    CredentialPath,
    CredentialQuery,
    UrlShortener,
    Homograph,
    PunycodeHost,
    RtlOverride,
    ZeroWidth,
    DoubleEncoding,
    DoubleExtension,
    RiskyExtension,
    EmbeddedUrlParam,
    Base64Payload,
    TrackingParams,
    NonStandardPort,
    ManyHyphens,
    BrandKeywordNonBrandHost,
    RedirectKeywordPath,
    SuspiciousTld,
    // Non-heuristic signals
    Malformed,
    PayloadType,
    BrandLegitimate,
    BrandTyposquat,
    BrandSubstitution,
    PolicyBlocked,
    PolicyAllowed,
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serde's SCREAMING_SNAKE_CASE rename gives us the stable string key;
        // reuse it instead of maintaining a second name table.
        let json = serde_json::to_string(self).unwrap_or_default();
        write!(f, "{}", json.trim_matches('"'))
    }
}

/// One evaluated rule/check: its constant weight, whether it fired, and the
/// evidence a UI could show the user.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub id: SignalId,
    pub weight: u8,
    pub triggered: bool,
    pub explanation: &'static str,
    pub evidence: Vec<String>,
}

impl Signal {
    pub fn fired(id: SignalId, weight: u8, explanation: &'static str, evidence: Vec<String>) -> Self {
        Self { id, weight, triggered: true, explanation, evidence }
    }

    pub fn silent(id: SignalId, weight: u8, explanation: &'static str) -> Self {
        Self { id, weight, triggered: false, explanation, evidence: Vec::new() }
    }
}

/// One of the four components the verdict determiner votes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Heuristic,
    Ml,
    Brand,
    Tld,
}

/// The four component scores, each clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentScores {
    pub heuristic: u8,
    pub ml: u8,
    pub brand: u8,
    pub tld: u8,
}

impl ComponentScores {
    pub fn get(&self, kind: ComponentKind) -> u8 {
        match kind {
            ComponentKind::Heuristic => self.heuristic,
            ComponentKind::Ml => self.ml,
            ComponentKind::Brand => self.brand,
            ComponentKind::Tld => self.tld,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Suspicious,
    Malicious,
    Unknown,
}

/// The final, immutable record returned by `analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub url: String,
    pub final_score: u8,
    pub verdict: Verdict,
    /// 0..=4: number of components agreeing with the final verdict, +1 if a
    /// critical override fired, capped at 4.
    pub confidence: u8,
    pub components: ComponentScores,
    pub signals: Vec<Signal>,
    pub obfuscations: BTreeSet<Obfuscation>,
}

/// A curated brand database entry (§4.4). Loaded once into an immutable,
/// bucket-indexed table by the pipeline.
#[derive(Debug, Clone)]
pub struct BrandEntry {
    pub name: &'static str,
    pub suffixes: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub high_value: bool,
}

/// Organizational policy, evaluated before the full pipeline runs (§6).
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub blocked_tlds: BTreeSet<String>,
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
    #[serde(default)]
    pub blocked_hosts: Vec<String>,
    #[serde(default)]
    pub require_https: bool,
    #[serde(default)]
    pub block_shorteners: bool,
}

/// The short-circuit outcome of evaluating a `Policy` against a URL, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Blocked,
    Allowed,
}
