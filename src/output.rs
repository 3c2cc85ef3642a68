//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: the primary line for
//! every case is its semantic identity — positional index, case number,
//! title, reference count — with the asset directory shown as secondary
//! context via an indented `Source:` line.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Cases
//! 001 #1 Neon City (2 references)
//!     Source: images/1/
//! 002 #2 Paper Crane
//!     Source: images/2/
//!
//! Generated index.html (2 cases, 5 assets copied)
//! ```
//!
//! ## Check
//!
//! ```text
//! Cases
//! 001 #1 Neon City (2 references)
//!     Source: images/1/
//!
//! Problems
//!     duplicate case_no 2
//!     case 2: missing images/2/result.png
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::{BuildReport, CaseSummary, CheckReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for one case: positional index, case number, title, and the
/// reference count when non-zero.
fn case_header(index: usize, case: &CaseSummary) -> String {
    let refs = match case.reference_count {
        0 => String::new(),
        1 => " (1 reference)".to_string(),
        n => format!(" ({n} references)"),
    };
    format!("{} #{} {}{}", format_index(index), case.case_no, case.title, refs)
}

fn case_lines(cases: &[CaseSummary], images_dir: &str) -> Vec<String> {
    let mut lines = vec!["Cases".to_string()];
    for (idx, case) in cases.iter().enumerate() {
        lines.push(case_header(idx + 1, case));
        lines.push(format!("    Source: {}/{}/", images_dir, case.case_no));
    }
    lines
}

/// Format the report of a successful build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.cases.is_empty() {
        lines.push("No cases in manifest".to_string());
    } else {
        lines.extend(case_lines(&report.cases, &report.images_dir));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated index.html ({} {}, {} assets copied)",
        report.cases.len(),
        plural(report.cases.len(), "case", "cases"),
        report.copied_assets,
    ));
    lines
}

/// Format the report of a `check` run.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.cases.is_empty() {
        lines.push("No cases in manifest".to_string());
    } else {
        lines.extend(case_lines(&report.cases, &report.images_dir));
    }

    let problems = report.lints.len() + report.missing.len();
    lines.push(String::new());
    if problems == 0 {
        lines.push("No problems found".to_string());
    } else {
        lines.push("Problems".to_string());
        for lint in &report.lints {
            lines.push(format!("    {lint}"));
        }
        for missing in &report.missing {
            lines.push(format!("    {missing}"));
        }
    }
    lines
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{line}");
    }
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}

// ============================================================================
// Tests
// ============================================================================
