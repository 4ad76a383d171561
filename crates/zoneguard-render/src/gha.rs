use crate::{RenderableReport, RenderableSeverity};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for v in &report.violations {
        let level = match v.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = format!("file={}", v.source_file);
        if let Some(line) = v.line {
            meta.push_str(&format!(",line={}", line));
        }
        if let Some(col) = v.col {
            meta.push_str(&format!(",col={}", col));
        }

        let rule_id = v.rule_id.as_deref().unwrap_or("zoneguard");
        let message = format!("[{}:{}] {}", rule_id, v.code, v.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        out.push(format!("::{} {}::{}", level, meta, message));
    }

    out
}
