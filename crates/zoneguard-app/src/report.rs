//! Fallback reports for runtime failures.

use time::OffsetDateTime;
use zoneguard_types::{
    ids, Severity, SourcePath, ToolMeta, Verdict, Violation, ZoneguardData, ZoneguardReport,
    SCHEMA_REPORT_V1,
};

/// A report describing a tool failure (bad config, unreadable input).
///
/// Written best-effort so CI consumers still get a structured artifact when
/// the run never reached evaluation.
pub fn runtime_error_report(message: &str) -> ZoneguardReport {
    let now = OffsetDateTime::now_utc();

    ZoneguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "zoneguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        violations: vec![Violation {
            severity: Severity::Error,
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            source_file: SourcePath::default(),
            import_specifier: String::new(),
            resolved_import: SourcePath::default(),
            rule_name: None,
            location: None,
            help: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: ZoneguardData {
            edges_scanned: 0,
            zones_configured: 0,
            violations_total: 1,
            violations_emitted: 1,
            truncated_reason: None,
        },
    }
}
