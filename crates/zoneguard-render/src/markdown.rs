use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Zoneguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Violations: {} (emitted) / {} (total)\n\n",
        verdict, report.data.violations_emitted, report.data.violations_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");

    for v in &report.violations {
        let sev = match v.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        match v.line {
            Some(line) => out.push_str(&format!(
                "- [{}] `{}` / `{}` — {} (`{}`:{} )\n",
                sev,
                v.rule_id.as_deref().unwrap_or(""),
                v.code,
                v.message,
                v.source_file,
                line
            )),
            None => out.push_str(&format!(
                "- [{}] `{}` / `{}` — {} (`{}`)\n",
                sev,
                v.rule_id.as_deref().unwrap_or(""),
                v.code,
                v.message,
                v.source_file
            )),
        }

        if let Some(help) = &v.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
