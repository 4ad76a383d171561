use crate::model::ImportEdge;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an import violation.
///
/// Identity fields:
/// - rule_id
/// - code
/// - source_file
/// - resolved_import
/// - attributed zone/rule name (if any)
pub fn fingerprint_for_edge(
    rule_id: &str,
    code: &str,
    edge: &ImportEdge,
    rule_name: Option<&str>,
) -> String {
    let mut parts = vec![
        rule_id,
        code,
        edge.source_file.as_str(),
        edge.resolved_import.as_str(),
    ];
    if let Some(name) = rule_name {
        parts.push(name);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
