use crate::fingerprint::fingerprint_for_edge;
use crate::model::{ImportEdge, PolicyModel};
use crate::policy::EffectiveConfig;
use crate::zones::zones_containing;
use serde_json::json;
use zoneguard_types::{ids, Violation};

pub fn run(
    edge: &ImportEdge,
    model: &PolicyModel,
    cfg: &EffectiveConfig,
    out: &mut Vec<Violation>,
) {
    let Some(policy) = cfg.rule_policy(ids::RULE_CROSS_ZONE) else {
        return;
    };

    // Every zone containing the source file is checked independently: an
    // import can breach several zones' policies at once, one violation each.
    for zone in zones_containing(&edge.source_file, &model.zones) {
        if zone.allows(&edge.resolved_import) {
            continue;
        }

        let fingerprint =
            fingerprint_for_edge(ids::RULE_CROSS_ZONE, ids::CODE_ZONE_BOUNDARY, edge, Some(&zone.name));
        out.push(Violation {
            severity: policy.severity,
            rule_id: ids::RULE_CROSS_ZONE.to_string(),
            code: ids::CODE_ZONE_BOUNDARY.to_string(),
            message: format!(
                "import of '{}' is outside the roots allowed for zone '{}'",
                edge.resolved_import, zone.name
            ),
            source_file: edge.source_file.clone(),
            import_specifier: edge.import_specifier.clone(),
            resolved_import: edge.resolved_import.clone(),
            rule_name: Some(zone.name.clone()),
            location: edge.location(),
            help: Some(
                "Import from one of the zone's `uses` roots, or add the target root to `uses`."
                    .to_string(),
            ),
            fingerprint: Some(fingerprint),
            data: json!({
                "zone": zone.name,
                "allowed_roots": zone
                    .uses
                    .iter()
                    .chain(zone.paths.iter())
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>(),
            }),
        });
    }
}
