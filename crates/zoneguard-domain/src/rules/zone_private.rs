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
    let Some(policy) = cfg.rule_policy(ids::RULE_ZONE_PRIVATE) else {
        return;
    };

    let name = edge.resolved_import.file_name();

    // At most one violation per rule entry per edge, even when the resolved
    // path falls under several of the entry's src roots. Distinct entries
    // still report independently.
    for rule in &model.zone_private_rules {
        if !rule.covers(&edge.resolved_import) {
            continue;
        }
        if !rule.patterns.iter().any(|re| re.is_match(name)) {
            continue;
        }
        if rule.covers(&edge.source_file) {
            continue;
        }

        let fingerprint = fingerprint_for_edge(
            ids::RULE_ZONE_PRIVATE,
            ids::CODE_ZONE_PRIVATE_FILE,
            edge,
            Some(&rule.name),
        );
        out.push(Violation {
            severity: policy.severity,
            rule_id: ids::RULE_ZONE_PRIVATE.to_string(),
            code: ids::CODE_ZONE_PRIVATE_FILE.to_string(),
            message: format!(
                "import of '{}' reaches outside the source roots of '{}'",
                edge.resolved_import, rule.name
            ),
            source_file: edge.source_file.clone(),
            import_specifier: edge.import_specifier.clone(),
            resolved_import: edge.resolved_import.clone(),
            rule_name: Some(rule.name.clone()),
            location: edge.location(),
            help: Some(
                "Import the file from within the rule's `src` roots, or expose it through the \
                 module's public surface."
                    .to_string(),
            ),
            fingerprint: Some(fingerprint),
            data: json!({
                "rule": rule.name,
                "src": rule.src.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            }),
        });
    }
}
