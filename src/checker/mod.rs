use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::output::ScanProgress;
use crate::report::{FileReport, Violation};
use crate::rules::{INVALID_ENCODING, RuleSet, UNREADABLE};
use crate::source::SourceFile;

/// Cooperative stop signal shared with the parallel workers.
///
/// Once set, files that have not started checking yet are skipped; files
/// already in flight finish normally.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Applies the active rules to each collected file.
///
/// Paths are relative to `base` for matching and display; reads resolve
/// against `base` so the checker works regardless of the process working
/// directory.
pub struct FileChecker<'a> {
    rules: &'a RuleSet,
    base: PathBuf,
}

impl<'a> FileChecker<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet, base: PathBuf) -> Self {
        Self { rules, base }
    }

    /// Check one file and report everything found in it.
    ///
    /// Read and decode problems become findings rather than errors: a file
    /// that cannot be read yields a single `unreadable` finding, and a file
    /// that is not valid UTF-8 yields a single `invalid-encoding` finding
    /// with no line rules applied on top.
    #[must_use]
    pub fn check_file(&self, path: &Path) -> FileReport {
        let display = path.display().to_string();

        let bytes = match std::fs::read(self.base.join(path)) {
            Ok(bytes) => bytes,
            Err(e) => {
                let violation =
                    Violation::file_level(UNREADABLE, format!("cannot read file: {e}"));
                return FileReport::new(display, vec![violation]);
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                let offset = e.utf8_error().valid_up_to();
                let violation = Violation::file_level(
                    INVALID_ENCODING,
                    format!("file is not valid UTF-8 (invalid byte at offset {offset})"),
                );
                return FileReport::new(display, vec![violation]);
            }
        };

        let source = SourceFile::new(path.to_path_buf(), content);
        let violations = self
            .rules
            .active()
            .flat_map(|rule| rule.check(&source))
            .collect();

        FileReport::new(display, violations)
    }

    /// Check every file in parallel, one report per file actually checked.
    ///
    /// The flag is consulted before each file starts; the caller finishes the
    /// progress bar once the returned reports are in hand.
    #[must_use]
    pub fn check_files(
        &self,
        paths: &[PathBuf],
        progress: &ScanProgress,
        cancel: &CancelFlag,
    ) -> Vec<FileReport> {
        paths
            .par_iter()
            .filter_map(|path| {
                if cancel.is_cancelled() {
                    return None;
                }
                let report = self.check_file(path);
                progress.inc();
                Some(report)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
