//! Ambient error type. This is deliberately narrow: `analyze` itself never
//! fails (§7 — malformed/non-URL input is a `Verdict`, not an `Err`); the
//! only fallible operation in the whole crate is constructing the
//! process-lifetime static tables in `Pipeline::new`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("bundled public suffix list failed to parse: {0}")]
    InvalidPsl(String),

    #[error("embedded ML model weights failed validation: {0}")]
    InvalidWeights(String),

    #[error("brand table failed validation: {0}")]
    InvalidBrandTable(String),
}
