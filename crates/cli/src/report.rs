//! Console results and saved text reports.
//!
//! Reports are free-form text for people to read; nothing parses them back.

use crate::text::{DISCLAIMER, RED_FLAG_CONSOLE, RED_FLAG_REPORT};
use crate::{ShellError, ShellResult};
use chrono::{DateTime, TimeZone};
use rogo_core::{Assessment, KnowledgeBase, Ranking, SymptomAnswers};
use std::path::{Path, PathBuf};

/// Report file written when no other path is given.
pub const DEFAULT_REPORT_FILENAME: &str = "diagnosis_report.txt";

fn push_ranking(lines: &mut Vec<String>, ranking: &Ranking<'_>) {
    for entry in ranking.iter() {
        lines.push(format!(
            "• {}: approx. {:.1}% (severity: {})",
            entry.name, entry.percentage, entry.severity
        ));
        lines.push(format!("  Advice: {}", entry.advice));
    }
}

/// The results block printed after a check.
pub fn format_results(assessment: &Assessment<'_>) -> String {
    let mut lines = vec!["===== Results =====".to_string()];
    push_ranking(&mut lines, &assessment.ranking);

    if assessment.urgent() {
        lines.push(String::new());
        lines.push(RED_FLAG_CONSOLE.to_string());
        for rule in &assessment.red_flags {
            lines.push(format!("   - {rule}"));
        }
    }

    lines.join("\n")
}

/// Render the full text report: every answer, the shortlist, red flags and the disclaimer.
pub fn format_report<Tz>(
    kb: &KnowledgeBase,
    answers: &SymptomAnswers,
    assessment: &Assessment<'_>,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut lines = vec![
        "Rogonirnoy — Symptom Checker Results".to_string(),
        format!("Time: {}", generated_at.format("%Y-%m-%d %H:%M")),
        String::new(),
        "Answers:".to_string(),
    ];

    for entry in kb.catalog() {
        let reply = if answers.is_present(entry.id) { "Yes" } else { "No" };
        lines.push(format!("- {}: {reply}", entry.question));
    }

    lines.push(String::new());
    lines.push("Top possible findings:".to_string());
    push_ranking(&mut lines, &assessment.ranking);

    if assessment.urgent() {
        lines.push(String::new());
        lines.push(RED_FLAG_REPORT.to_string());
        for rule in &assessment.red_flags {
            lines.push(format!("   - {rule}"));
        }
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

/// Write a report as UTF-8, replacing any existing file. Returns the path written.
pub fn save_report(path: &Path, text: &str) -> ShellResult<PathBuf> {
    std::fs::write(path, text).map_err(|source| ShellError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved report");
    Ok(path.to_path_buf())
}
