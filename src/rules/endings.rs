//! Line terminator consistency rule.

use serde::{Deserialize, Serialize};

use super::Rule;
use crate::report::Violation;
use crate::source::{LineEnding, SourceFile};

/// Canonical terminator policy from `[rules] line_ending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingStyle {
    #[default]
    Lf,
    Crlf,
    /// The file's first terminator sets the expectation; any deviation means
    /// mixed endings.
    Auto,
}

/// Flags the first line whose terminator deviates from the canonical style.
///
/// One violation per file: a file saved with the wrong ending style would
/// otherwise flood the report, and the first line pinpoints where mixing
/// starts. A lone `\r` never satisfies `lf` or `crlf`. The final line's
/// missing terminator belongs to the final-newline rule, not this one.
pub struct LineEndingStyle {
    style: EndingStyle,
}

impl LineEndingStyle {
    #[must_use]
    pub const fn new(style: EndingStyle) -> Self {
        Self { style }
    }
}

impl Rule for LineEndingStyle {
    fn id(&self) -> &'static str {
        "line-ending-style"
    }

    fn description(&self) -> &'static str {
        "Line terminator deviates from the configured style"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut expected = match self.style {
            EndingStyle::Lf => Some(LineEnding::Lf),
            EndingStyle::Crlf => Some(LineEnding::CrLf),
            EndingStyle::Auto => None,
        };

        for line in file.lines() {
            if line.ending == LineEnding::Unterminated {
                continue;
            }
            match expected {
                None => expected = Some(line.ending),
                Some(exp) if line.ending != exp => {
                    let message = if self.style == EndingStyle::Auto {
                        format!(
                            "mixed line endings: expected {}, found {}",
                            label(exp),
                            label(line.ending)
                        )
                    } else {
                        format!(
                            "expected {} line endings, found {}",
                            label(exp),
                            label(line.ending)
                        )
                    };
                    return vec![Violation::at_line(self.id(), line.number, message)];
                }
                Some(_) => {}
            }
        }
        Vec::new()
    }
}

const fn label(ending: LineEnding) -> &'static str {
    match ending {
        LineEnding::Lf => "LF",
        LineEnding::CrLf => "CRLF",
        LineEnding::Cr => "CR",
        LineEnding::Unterminated => "none",
    }
}

#[cfg(test)]
#[path = "endings_tests.rs"]
mod tests;
