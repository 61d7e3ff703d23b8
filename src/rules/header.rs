//! Required file header rule.

use regex::Regex;

use super::Rule;
use crate::config::HeaderConfig;
use crate::report::Violation;
use crate::source::SourceFile;
use crate::{Result, StyleGuardError};

/// Requires a configured pattern to match within the first lines of a file.
///
/// Without a configured pattern the rule stays registered (so the catalog and
/// `disabled` validation are stable) but never fires. Empty files are exempt.
#[derive(Debug)]
pub struct HeaderRule {
    pattern: Option<Regex>,
    max_lines: usize,
}

impl HeaderRule {
    pub fn from_config(config: &HeaderConfig) -> Result<Self> {
        let pattern = config
            .pattern
            .as_ref()
            .map(|p| {
                Regex::new(p).map_err(|e| StyleGuardError::InvalidHeaderPattern {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .transpose()?;

        Ok(Self {
            pattern,
            max_lines: config.max_lines,
        })
    }
}

impl Rule for HeaderRule {
    fn id(&self) -> &'static str {
        "missing-header"
    }

    fn description(&self) -> &'static str {
        "File is missing the required header"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        if file.is_empty() {
            return Vec::new();
        }

        let found = file
            .lines()
            .take(self.max_lines)
            .any(|line| pattern.is_match(line.text));
        if found {
            return Vec::new();
        }

        vec![Violation::file_level(
            self.id(),
            format!(
                "required header not found in the first {} lines",
                self.max_lines
            ),
        )]
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
