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
    let Some(policy) = cfg.rule_policy(ids::RULE_RESTRICTED_PATH) else {
        return;
    };

    // A default-deny over one root with explicit source-side exceptions,
    // orthogonal to zone membership. Each entry is attributed individually.
    for entry in &model.restricted_paths {
        if !entry.root.is_ancestor_or_self(&edge.resolved_import) {
            continue;
        }
        if entry
            .allow_from
            .iter()
            .any(|w| w.is_ancestor_or_self(&edge.source_file))
        {
            continue;
        }

        let fingerprint = fingerprint_for_edge(
            ids::RULE_RESTRICTED_PATH,
            ids::CODE_OUTSIDE_WHITELIST,
            edge,
            Some(entry.root.as_str()),
        );
        out.push(Violation {
            severity: policy.severity,
            rule_id: ids::RULE_RESTRICTED_PATH.to_string(),
            code: ids::CODE_OUTSIDE_WHITELIST.to_string(),
            message: format!(
                "import from restricted path '{}' is only allowed from whitelisted locations",
                entry.root
            ),
            source_file: edge.source_file.clone(),
            import_specifier: edge.import_specifier.clone(),
            resolved_import: edge.resolved_import.clone(),
            rule_name: Some(entry.root.as_str().to_string()),
            location: edge.location(),
            help: Some(
                "Move the importer under a whitelisted root, or extend the entry's `allow_from`."
                    .to_string(),
            ),
            fingerprint: Some(fingerprint),
            data: json!({
                "restricted_root": entry.root.as_str(),
                "allow_from": entry.allow_from.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            }),
        });
    }
}
