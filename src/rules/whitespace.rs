//! Whitespace hygiene rules.

use super::Rule;
use crate::report::Violation;
use crate::source::SourceFile;

/// Flags lines that end with spaces or tabs.
pub struct TrailingWhitespace;

impl Rule for TrailingWhitespace {
    fn id(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn description(&self) -> &'static str {
        "Line ends with spaces or tabs"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.lines()
            .filter(|line| line.text.ends_with([' ', '\t']))
            .map(|line| Violation::at_line(self.id(), line.number, "trailing whitespace"))
            .collect()
    }
}

/// Flags lines containing a tab anywhere; indentation must use spaces.
pub struct TabCharacter;

impl Rule for TabCharacter {
    fn id(&self) -> &'static str {
        "tab-character"
    }

    fn description(&self) -> &'static str {
        "Line contains a tab character"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.lines()
            .filter(|line| line.text.contains('\t'))
            .map(|line| Violation::at_line(self.id(), line.number, "tab character"))
            .collect()
    }
}

/// Flags non-empty files whose content does not end with `\n`.
pub struct FinalNewline;

impl Rule for FinalNewline {
    fn id(&self) -> &'static str {
        "missing-final-newline"
    }

    fn description(&self) -> &'static str {
        "Non-empty file does not end with a newline"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        if file.is_empty() || file.ends_with_newline() {
            return Vec::new();
        }
        vec![Violation::file_level(self.id(), "missing final newline")]
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
