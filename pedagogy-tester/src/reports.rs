use anyhow::Result;
use colored::Colorize;
use pedagogy_core::Strategy;
use serde::Serialize;
use std::io::Write;

use crate::check::{CheckSummary, Severity};

/// Everything one invocation produced; absent sections were not requested.
#[derive(Debug, Default, Serialize)]
pub struct Report<'a> {
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<CheckSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<&'a Strategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<String>>,
}

pub fn generate_json_report(out: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_console_report(out: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    writeln!(out, "{} {}", "📚 Catalog:".bright_cyan().bold(), report.catalog)?;

    if let Some(check) = &report.check {
        writeln!(out)?;
        writeln!(out, "{}", "🔎 Catalog Check".bright_yellow().bold())?;
        writeln!(out, "{}", "-".repeat(30).yellow())?;
        writeln!(out, "Strategies: {}", check.strategies)?;
        writeln!(out, "Errors: {}", check.errors.to_string().red())?;
        writeln!(out, "Warnings: {}", check.warnings.to_string().yellow())?;
        for finding in &check.findings {
            let tag = match finding.severity {
                Severity::Error => "❌ ERROR".red(),
                Severity::Warning => "⚠️  WARN".yellow(),
            };
            writeln!(
                out,
                "{tag} [{}] {}: {}",
                finding.index,
                display_id(&finding.id).bold(),
                finding.message
            )?;
        }
        let verdict = if check.passed() {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{verdict}")?;
    }

    if let Some(matches) = &report.matches {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!("🎯 {} matching strategies", matches.len())
                .bright_blue()
                .bold()
        )?;
        for s in matches {
            writeln!(out, "  {:24} {:12} {}", s.id, s.phase, s.title)?;
        }
    }

    if let Some(phases) = &report.phases {
        writeln!(out)?;
        writeln!(out, "{}", "Phases:".bold())?;
        for phase in phases {
            writeln!(out, "  {phase}")?;
        }
    }
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &Report<'_>) -> Result<()> {
    writeln!(out, "# Strategy Catalog Report")?;
    writeln!(out)?;
    writeln!(out, "Catalog: `{}`", report.catalog)?;

    if let Some(check) = &report.check {
        writeln!(out)?;
        writeln!(out, "## Check")?;
        writeln!(out)?;
        writeln!(
            out,
            "- Strategies: {}\n- Errors: {}\n- Warnings: {}",
            check.strategies, check.errors, check.warnings
        )?;
        if !check.findings.is_empty() {
            writeln!(out)?;
            writeln!(out, "| # | Id | Severity | Finding |")?;
            writeln!(out, "|---|----|----------|---------|")?;
            for f in &check.findings {
                let severity = match f.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                writeln!(
                    out,
                    "| {} | {} | {severity} | {} |",
                    f.index,
                    display_id(&f.id),
                    f.message
                )?;
            }
        }
    }

    if let Some(matches) = &report.matches {
        writeln!(out)?;
        writeln!(out, "## Matches ({})", matches.len())?;
        writeln!(out)?;
        if matches.is_empty() {
            writeln!(out, "_No strategies match._")?;
        }
        for s in matches {
            writeln!(out, "- **{}** (`{}`, {})", s.title, s.id, s.phase)?;
        }
    }

    if let Some(phases) = &report.phases {
        writeln!(out)?;
        writeln!(out, "## Phases")?;
        writeln!(out)?;
        for phase in phases {
            writeln!(out, "- {phase}")?;
        }
    }
    Ok(())
}

fn display_id(id: &str) -> &str {
    if id.is_empty() { "<empty>" } else { id }
}
