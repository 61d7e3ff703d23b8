use std::fmt::Write;

use crate::error::Result;
use crate::report::{Report, Violation};

use super::{ColorMode, OutputFormatter, ansi};

/// Renders the report in grep style, one finding per line.
///
/// Violation lines look like `src/main.c:10: trailing-whitespace: ...` so
/// editors and CI log scanners can jump to the offending line. File-level
/// findings omit the line number.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, path: &str, violation: &Violation, output: &mut String) {
        let rule = self.colorize(violation.rule, ansi::RED);
        match violation.line {
            Some(line) => {
                writeln!(output, "{path}:{line}: {rule}: {}", violation.message).ok();
            }
            None => {
                writeln!(output, "{path}: {rule}: {}", violation.message).ok();
            }
        }
    }

    fn format_summary(&self, report: &Report) -> String {
        let checked = report.files_checked();
        if report.is_clean() {
            let clean = self.colorize("no violations found", ansi::GREEN);
            format!("Summary: {checked} files checked, {clean}")
        } else {
            let count = self.colorize(&report.total_violations().to_string(), ansi::RED);
            format!(
                "Summary: {checked} files checked, {count} violations in {} files",
                report.files_with_violations()
            )
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for (path, violations) in report.files() {
            if violations.is_empty() {
                if self.verbose >= 1 {
                    writeln!(output, "{} {path}", self.colorize("✓", ansi::GREEN)).ok();
                }
                continue;
            }
            for violation in violations {
                self.format_violation(path, violation, &mut output);
            }
        }

        if !output.is_empty() {
            writeln!(output).ok();
        }
        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
