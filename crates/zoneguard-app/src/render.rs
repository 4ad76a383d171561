//! Render use cases: markdown and GitHub annotations from in-memory reports.

use anyhow::Context;
use zoneguard_render::{
    RenderableData, RenderableReport, RenderableSeverity, RenderableVerdictStatus,
    RenderableViolation,
};
use zoneguard_types::{Severity, Verdict, ZoneguardReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    zoneguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    zoneguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn serialize_report(report: &ZoneguardReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn parse_report_json(input: &str) -> anyhow::Result<ZoneguardReport> {
    serde_json::from_str(input).context("parse report json")
}

/// Project a report into the render layer's surface-agnostic shape.
pub fn to_renderable(report: &ZoneguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        violations: report
            .violations
            .iter()
            .map(|v| RenderableViolation {
                severity: match v.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                rule_id: Some(v.rule_id.clone()),
                code: v.code.clone(),
                message: v.message.clone(),
                source_file: v.source_file.as_str().to_string(),
                line: v.location.and_then(|l| l.line),
                col: v.location.and_then(|l| l.col),
                help: v.help.clone(),
            })
            .collect(),
        data: RenderableData {
            violations_emitted: report.data.violations_emitted,
            violations_total: report.data.violations_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}
