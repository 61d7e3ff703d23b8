//! Line length rule.

use super::Rule;
use crate::report::Violation;
use crate::source::SourceFile;

/// Flags lines longer than the configured maximum.
///
/// Length is counted in Unicode scalars, terminator excluded, so a `é` is one
/// character regardless of its UTF-8 width.
pub struct LineTooLong {
    max: usize,
}

impl LineTooLong {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for LineTooLong {
    fn id(&self) -> &'static str {
        "line-too-long"
    }

    fn description(&self) -> &'static str {
        "Line exceeds the maximum character length"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.lines()
            .filter_map(|line| {
                let len = line.text.chars().count();
                (len > self.max).then(|| {
                    Violation::at_line(
                        self.id(),
                        line.number,
                        format!("line is {len} characters (limit {})", self.max),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
