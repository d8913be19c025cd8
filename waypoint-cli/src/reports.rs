use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use waypoint_core::CatalogIssue;

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub data: String,
    pub points: usize,
    pub destinations: usize,
    pub issues: &'a [CatalogIssue],
}

impl CheckReport<'_> {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

const fn issue_label(issue: &CatalogIssue) -> &'static str {
    match issue {
        CatalogIssue::UnknownDestination { .. } => "destination",
        CatalogIssue::UnknownOffer { .. } => "offer",
        CatalogIssue::EndsBeforeStart { .. } => "dates",
        CatalogIssue::DuplicatePointId { .. } => "duplicate",
    }
}

pub fn generate_console_report(out: &mut dyn Write, report: &CheckReport<'_>) -> Result<()> {
    writeln!(out, "{}", "🧭 Trip Data Check".bright_cyan().bold())?;
    writeln!(out, "{}", "==================".cyan())?;
    writeln!(out, "Data: {}", report.data)?;
    writeln!(out, "Points: {}", report.points)?;
    writeln!(out, "Destinations: {}", report.destinations)?;
    writeln!(out)?;

    if report.passed() {
        writeln!(out, "{} no issues found", "✅ PASS".green())?;
        return Ok(());
    }

    writeln!(out, "{} {} issue(s)", "❌ FAIL".red(), report.issues.len())?;
    for issue in report.issues {
        writeln!(out, "   • [{}] {issue}", issue_label(issue).yellow())?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &CheckReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
