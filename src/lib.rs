//! Offline URL phishing risk analyzer.
//!
//! The public surface is deliberately small: build a [`Pipeline`] once
//! (it owns the process-lifetime static tables — brand database, bundled
//! Public Suffix List, ML weights) and call [`Pipeline::analyze`] per URL.
//! Everything downstream of that call is a pure function; there is no
//! shared mutable state, no I/O, and no async runtime anywhere in this
//! crate.
//!
//! ```no_run
//! let pipeline = phishguard::Pipeline::new().expect("embedded tables are valid");
//! let assessment = pipeline.analyze("https://example.com/login");
//! println!("{:?}: {}", assessment.verdict, assessment.final_score);
//! ```

pub mod brand;
pub mod confusables;
pub mod config;
pub mod error;
pub mod features;
pub mod heuristics;
pub mod ml;
pub mod normalize;
pub mod payload;
pub mod pipeline;
pub mod policy;
pub mod tld;
pub mod types;
pub mod verdict;

pub use error::ConfigError;
pub use pipeline::Pipeline;
pub use types::{
    Assessment, BrandEntry, ComponentKind, ComponentScores, NormalizedUrl, Obfuscation, Policy,
    PolicyDecision, Signal, SignalId, Url, Verdict,
};
