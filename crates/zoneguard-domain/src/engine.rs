use crate::model::{ImportEdge, PolicyModel};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::rules;
use zoneguard_types::{Severity, Verdict, Violation, ZoneguardData};

/// Evaluate a single edge. Pure: same inputs, same output, no shared state.
///
/// Violations appear in the fixed rule order (cross-zone, restricted path,
/// directory private, zone private), then policy entry order within a rule.
pub fn evaluate_edge(
    edge: &ImportEdge,
    model: &PolicyModel,
    cfg: &EffectiveConfig,
) -> Vec<Violation> {
    let mut out = Vec::new();
    rules::run_all(edge, model, cfg, &mut out);
    out
}

/// Evaluate a full edge stream and aggregate the result.
///
/// The violation list preserves edge discovery order, then per-edge rule
/// order; there is no sorting and no deduplication. Truncation to
/// `max_findings` happens after the full list is assembled.
pub fn evaluate(edges: &[ImportEdge], model: &PolicyModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut violations: Vec<Violation> = Vec::new();

    for edge in edges {
        rules::run_all(edge, model, cfg, &mut violations);
    }

    let total = violations.len() as u32;

    let mut emitted = violations;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "violations truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_violations(&emitted);

    let data = ZoneguardData {
        edges_scanned: edges.len() as u32,
        zones_configured: model.zones.len() as u32,
        violations_total: total,
        violations_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        violations: emitted,
        data,
        counts,
    }
}

fn compute_verdict(violations: &[Violation], fail_on: FailOn) -> Verdict {
    let has_error = violations.iter().any(|v| v.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = violations.iter().any(|v| v.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
