//! Policy loading for the CLI binary (§6). This is the crate's only
//! filesystem surface, and it lives entirely here, not in the library's
//! `analyze` path — `phishguard::Pipeline::analyze` never touches a file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Policy;

pub fn load_policy(path: &Path) -> Result<Policy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading policy file {}", path.display()))?;
    parse_policy(&content)
}

fn parse_policy(content: &str) -> Result<Policy> {
    let policy: Policy = serde_json::from_str(content).context("parsing policy JSON")?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_policy_document() {
        let policy = parse_policy(
            r#"{"blocked_tlds": ["tk"], "require_https": true, "block_shorteners": true}"#,
        )
        .unwrap();
        assert!(policy.require_https);
        assert!(policy.block_shorteners);
        assert!(policy.blocked_tlds.contains("tk"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_policy("{not json").is_err());
    }

    #[test]
    fn defaults_are_permissive_when_fields_are_omitted() {
        let policy = parse_policy("{}").unwrap();
        assert!(!policy.require_https);
        assert!(policy.allowed_hosts.is_empty());
    }
}
