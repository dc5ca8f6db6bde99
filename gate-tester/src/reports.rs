use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::checks::{CheckResult, CheckStatus};

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    api_base: &'a str,
    passed: bool,
    checks: &'a [CheckResult],
}

pub fn generate_json_report<W: Write>(
    writer: &mut W,
    api_base: &str,
    results: &[CheckResult],
) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        api_base,
        passed: results.iter().all(CheckResult::passed),
        checks: results,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_console_report<W: Write>(
    writer: &mut W,
    results: &[CheckResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Probe Results".bright_cyan().bold())?;
    writeln!(writer, "{}", "================".cyan())?;

    let count = |status: CheckStatus| results.iter().filter(|r| r.status == status).count();
    writeln!(writer, "Passed: {}", count(CheckStatus::Passed).to_string().green())?;
    writeln!(writer, "Failed: {}", count(CheckStatus::Failed).to_string().red())?;
    writeln!(
        writer,
        "Skipped: {}",
        count(CheckStatus::Skipped).to_string().yellow()
    )?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for result in results {
        let status = match result.status {
            CheckStatus::Passed => "✅ PASS".green(),
            CheckStatus::Failed => "❌ FAIL".red(),
            CheckStatus::Skipped => "⏭️  SKIP".yellow(),
        };
        writeln!(writer, "{status} {}", result.name.bold())?;
        writeln!(writer, "   {} ({:?})", result.detail, result.duration)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CheckResult> {
        vec![
            CheckResult {
                name: "device".into(),
                status: CheckStatus::Passed,
                detail: "device online".into(),
                duration: Duration::from_millis(12),
            },
            CheckResult {
                name: "open".into(),
                status: CheckStatus::Skipped,
                detail: "missing --pin".into(),
                duration: Duration::ZERO,
            },
        ]
    }

    #[test]
    fn json_report_lists_checks() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, "https://gate.test", &sample()).expect("report");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value["api_base"], "https://gate.test");
        assert_eq!(value["passed"], true);
        assert_eq!(value["checks"][0]["status"], "passed");
        assert_eq!(value["checks"][0]["duration"], 12);
        assert_eq!(value["checks"][1]["status"], "skipped");
    }

    #[test]
    fn console_report_summarises() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &sample(), Duration::from_millis(20)).expect("report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Passed: 1"), "{text}");
        assert!(text.contains("Skipped: 1"), "{text}");
        assert!(text.contains("missing --pin"), "{text}");
    }
}
