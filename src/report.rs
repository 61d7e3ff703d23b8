//! Violation types and the path-sorted report aggregate.

use indexmap::IndexMap;

/// A single style finding in one file.
///
/// The owning file path lives on the enclosing [`FileReport`] so violations
/// stay cheap to produce in bulk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Stable rule identifier, e.g. `trailing-whitespace`.
    pub rule: &'static str,
    /// 1-based line number; `None` for file-level findings.
    pub line: Option<usize>,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn at_line(rule: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            line: Some(line),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn file_level(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            line: None,
            message: message.into(),
        }
    }
}

/// Result of checking one file: normalized display path plus findings in
/// rule-emission order. Clean files carry an empty list.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: String, violations: Vec<Violation>) -> Self {
        Self { path, violations }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Path-sorted aggregation of every checked file.
///
/// Built by sorting per-file results before insertion, so iteration order is
/// deterministic no matter how the parallel check interleaved.
#[derive(Debug, Default)]
pub struct Report {
    files: IndexMap<String, Vec<Violation>>,
}

impl Report {
    #[must_use]
    pub fn from_file_reports(mut reports: Vec<FileReport>) -> Self {
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        let mut files = IndexMap::with_capacity(reports.len());
        for report in reports {
            files
                .entry(report.path)
                .or_insert_with(Vec::new)
                .extend(report.violations);
        }
        Self { files }
    }

    /// Iterates files in path order, clean ones included.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.files.iter().map(|(p, v)| (p.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn files_with_violations(&self) -> usize {
        self.files.values().filter(|v| !v.is_empty()).count()
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// A clean report maps to exit status 0.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total_violations() == 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
