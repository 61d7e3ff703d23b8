use serde::Serialize;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Machine-readable output, stable regardless of verbosity and color flags.
///
/// Clean files appear with an empty `violations` array so consumers see the
/// full set of checked files.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    files_with_violations: usize,
    violations: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    violations: Vec<ViolationEntry>,
}

#[derive(Serialize)]
struct ViolationEntry {
    line: Option<usize>,
    rule: String,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let files = report
            .files()
            .map(|(path, violations)| FileEntry {
                path: path.to_string(),
                violations: violations
                    .iter()
                    .map(|v| ViolationEntry {
                        line: v.line,
                        rule: v.rule.to_string(),
                        message: v.message.clone(),
                    })
                    .collect(),
            })
            .collect();

        let output = JsonOutput {
            summary: Summary {
                files_checked: report.files_checked(),
                files_with_violations: report.files_with_violations(),
                violations: report.total_violations(),
            },
            files,
        };

        let mut rendered = serde_json::to_string_pretty(&output)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
