use crate::fingerprint::fingerprint_for_edge;
use crate::model::{ImportEdge, PolicyModel};
use crate::policy::EffectiveConfig;
use serde_json::json;
use zoneguard_types::{ids, Violation};

pub fn run(
    edge: &ImportEdge,
    model: &PolicyModel,
    cfg: &EffectiveConfig,
    out: &mut Vec<Violation>,
) {
    let Some(policy) = cfg.rule_policy(ids::RULE_DIRECTORY_PRIVATE) else {
        return;
    };

    // Patterns match the basename only, never the directory part.
    let name = edge.resolved_import.file_name();
    let Some(pattern) = model
        .private_file_patterns
        .iter()
        .find(|re| re.is_match(name))
    else {
        return;
    };

    // The importer must live at or below the directory holding the private
    // file.
    let private_dir = edge.resolved_import.parent();
    if private_dir.is_ancestor_or_self(&edge.source_file) {
        return;
    }

    let fingerprint =
        fingerprint_for_edge(ids::RULE_DIRECTORY_PRIVATE, ids::CODE_PRIVATE_FILE, edge, None);
    out.push(Violation {
        severity: policy.severity,
        rule_id: ids::RULE_DIRECTORY_PRIVATE.to_string(),
        code: ids::CODE_PRIVATE_FILE.to_string(),
        message: format!(
            "'{}' is private to its directory and may only be imported from within '{}'",
            edge.import_specifier, private_dir
        ),
        source_file: edge.source_file.clone(),
        import_specifier: edge.import_specifier.clone(),
        resolved_import: edge.resolved_import.clone(),
        rule_name: None,
        location: edge.location(),
        help: Some(
            "Move the importer into the private file's subtree, or re-export the needed surface \
             from a non-private module."
                .to_string(),
        ),
        fingerprint: Some(fingerprint),
        data: json!({
            "pattern": pattern.as_str(),
            "private_dir": private_dir.as_str(),
        }),
    });
}
