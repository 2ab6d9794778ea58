//! Performance summary rendering.
//!
//! This module renders an aggregated performance mapping as plain text,
//! Markdown or JSON. Rendering is kept apart from aggregation so the caller
//! decides where the output goes.

use crate::cli::OutputFormat;
use crate::models::{AggregatedPerformance, GroupPerformance, Technology};
use crate::performance::ScoreWarning;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A rendered-ready performance report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The response file the report was computed from.
    pub source: String,
    /// Per-technology performance.
    pub technologies: AggregatedPerformance,
    /// Scores that could not be converted and counted as zero.
    pub warnings: Vec<ScoreWarning>,
    /// Include pass/fail status when rendering.
    #[serde(skip)]
    pub show_status: bool,
}

impl PerformanceReport {
    pub fn new(source: impl Into<String>, technologies: AggregatedPerformance) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            technologies,
            warnings: Vec::new(),
            show_status: true,
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(generate_text_report(self)),
            OutputFormat::Markdown => Ok(generate_markdown_report(self)),
            OutputFormat::Json => generate_json_report(self),
        }
    }
}

fn status_label(group: &GroupPerformance) -> &'static str {
    if group.passed() {
        "PASS"
    } else {
        "BELOW THRESHOLD"
    }
}

/// Generate a plain text summary, one line per technology.
pub fn generate_text_report(report: &PerformanceReport) -> String {
    if report.technologies.is_empty() {
        return "No responses found.\n".to_string();
    }

    let mut output = String::new();

    for (technology, group) in &report.technologies {
        output.push_str(&format!(
            "{:<10} questions: {:>3} | knowledge: {:>5.2} / {:<5.2} | practice: {:>5.2} / {:<5.2}",
            technology.to_string(),
            group.total_questions,
            group.current_knowledge,
            group.min_knowledge,
            group.current_practice,
            group.min_practice,
        ));
        if report.show_status {
            output.push_str(&format!(" | {}", status_label(group)));
        }
        output.push('\n');
    }

    for warning in &report.warnings {
        output.push_str(&format!("warning: {}\n", warning));
    }

    output
}

/// Generate a Markdown summary.
pub fn generate_markdown_report(report: &PerformanceReport) -> String {
    let mut output = String::new();

    output.push_str("# Interview Performance\n\n");
    output.push_str(&format!("- **Responses:** `{}`\n", report.source));
    output.push_str(&format!(
        "- **Generated:** {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "- **Technologies:** {}\n\n",
        report.technologies.len()
    ));

    output.push_str(&generate_summary_table(report));

    if !report.warnings.is_empty() {
        output.push_str("## Warnings\n\n");
        for warning in &report.warnings {
            output.push_str(&format!("- {}\n", warning));
        }
        output.push('\n');
    }

    output.push_str("---\n\n");
    output.push_str("*Knowledge threshold: 50% of questions. Practice threshold: 30% of questions.*\n");

    output
}

/// Generate the per-technology table.
fn generate_summary_table(report: &PerformanceReport) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");

    if report.technologies.is_empty() {
        section.push_str("No responses found.\n\n");
        return section;
    }

    if report.show_status {
        section.push_str("| Technology | Questions | Knowledge | Min Knowledge | Practice | Min Practice | Status |\n");
        section.push_str("|:---|:---:|:---:|:---:|:---:|:---:|:---:|\n");
    } else {
        section.push_str("| Technology | Questions | Knowledge | Min Knowledge | Practice | Min Practice |\n");
        section.push_str("|:---|:---:|:---:|:---:|:---:|:---:|\n");
    }

    for (technology, group) in &report.technologies {
        section.push_str(&generate_table_row(*technology, group, report.show_status));
    }
    section.push('\n');

    section
}

fn generate_table_row(technology: Technology, group: &GroupPerformance, show_status: bool) -> String {
    let mut row = format!(
        "| {} | {} | {} | {} | {} | {} |",
        technology,
        group.total_questions,
        group.current_knowledge,
        group.min_knowledge,
        group.current_practice,
        group.min_practice
    );
    if show_status {
        row.push_str(&format!(" {} |", status_label(group)));
    }
    row.push('\n');
    row
}

/// Generate a JSON report.
pub fn generate_json_report(report: &PerformanceReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
