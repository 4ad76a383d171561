//! The `check` use case: evaluate the edge stream and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use time::OffsetDateTime;
use zoneguard_domain::model::ImportEdge;
use zoneguard_settings::{Overrides, ResolvedPolicy};
use zoneguard_types::{
    SourcePath, ToolMeta, Verdict, ZoneguardReport, SCHEMA_REPORT_V1,
};

use crate::edges::parse_edges_json;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Base directory configured path patterns resolve against. Must be
    /// absolute.
    pub base_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Edge stream document contents.
    pub edges_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ZoneguardReport,
    /// The resolved policy used.
    pub resolved: ResolvedPolicy,
}

/// Run the check use case: parse config, resolve policy, parse edges,
/// evaluate, wrap the report envelope.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        zoneguard_settings::ZoneguardConfigV1::default()
    } else {
        zoneguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let base = SourcePath::new(input.base_path.as_str());
    let resolved = zoneguard_settings::resolve_config(cfg, &base, input.overrides.clone())
        .context("resolve config")?;

    let edge_file = parse_edges_json(input.edges_text).context("parse edges")?;
    let edges = build_edges(&edge_file.edges)?;

    let domain_report =
        zoneguard_domain::evaluate(&edges, &resolved.model, &resolved.effective);
    let zoneguard_domain::report::DomainReport {
        verdict,
        violations,
        data,
        counts: _,
    } = domain_report;

    let finished_at = OffsetDateTime::now_utc();

    let report = ZoneguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "zoneguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        violations,
        data,
    };

    Ok(CheckOutput { report, resolved })
}

fn build_edges(records: &[crate::edges::EdgeRecord]) -> anyhow::Result<Vec<ImportEdge>> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let source_file = SourcePath::new(&rec.source_file);
            if !source_file.is_absolute() {
                anyhow::bail!(
                    "edge {i}: source_file must be an absolute path, got: {}",
                    rec.source_file
                );
            }
            Ok(ImportEdge::resolve(
                source_file,
                &rec.import,
                rec.line,
                rec.col,
            ))
        })
        .collect()
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
