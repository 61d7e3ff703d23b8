mod filter;

pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StyleGuardError};
use crate::path_utils::{normalize_for_matching, normalize_relative};

/// Trait for producing the set of files to check.
pub trait FileScanner {
    /// Produce the deterministic, sorted list of candidate files.
    ///
    /// # Errors
    /// Returns an error when a single-file target is missing or not a regular
    /// file, or when the working environment cannot be inspected.
    fn collect(&self) -> Result<Vec<PathBuf>>;
}

/// What to walk and what to prune, fixed once per invocation.
///
/// `base` anchors matching and display: paths under it are relativized before
/// exclusion prefixes apply and before they appear in the report.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    base: PathBuf,
    roots: Vec<PathBuf>,
    exclude_prefixes: Vec<PathBuf>,
    gitignore: bool,
    target: Option<PathBuf>,
}

impl ScanOptions {
    /// Tree mode over `roots`, pruning subtrees under `exclude_prefixes`.
    ///
    /// Prefixes are normalized once here. A prefix that normalizes to empty
    /// (like `.`) would match every path and is dropped.
    #[must_use]
    pub fn tree(
        base: PathBuf,
        roots: Vec<PathBuf>,
        exclude_prefixes: &[PathBuf],
        gitignore: bool,
    ) -> Self {
        let exclude_prefixes = exclude_prefixes
            .iter()
            .map(|p| normalize_for_matching(p))
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        Self {
            base,
            roots,
            exclude_prefixes,
            gitignore,
            target: None,
        }
    }

    /// Single-file mode: exactly `target`; exclusions and file filters do not
    /// apply.
    #[must_use]
    pub const fn single_file(base: PathBuf, target: PathBuf) -> Self {
        Self {
            base,
            roots: Vec::new(),
            exclude_prefixes: Vec::new(),
            gitignore: false,
            target: Some(target),
        }
    }
}

/// Walks the configured roots and yields the files to check.
pub struct PathCollector<F: FileFilter> {
    filter: F,
    options: ScanOptions,
}

impl<F: FileFilter> PathCollector<F> {
    #[must_use]
    pub const fn new(filter: F, options: ScanOptions) -> Self {
        Self { filter, options }
    }

    fn collect_target(&self, target: &Path) -> Result<Vec<PathBuf>> {
        if !target.exists() {
            return Err(StyleGuardError::Config(format!(
                "path not found: {}",
                target.display()
            )));
        }
        if !target.is_file() {
            return Err(StyleGuardError::Config(format!(
                "not a regular file: {}",
                target.display()
            )));
        }
        Ok(vec![normalize_relative(target, &self.options.base)])
    }

    fn scan_root(&self, root: &Path) -> Vec<PathBuf> {
        if self.options.gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        }
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                !is_prefix_excluded(e.path(), &self.options.base, &self.options.exclude_prefixes)
            })
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| normalize_relative(e.path(), &self.options.base))
            .filter(|p| self.filter.should_include(p))
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(true)
            // The invoking user's global gitignore must not change scan
            // results between machines.
            .git_global(false)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false);

        let base = self.options.base.clone();
        let prefixes = self.options.exclude_prefixes.clone();
        builder.filter_entry(move |e| !is_prefix_excluded(e.path(), &base, &prefixes));

        builder
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(|e| normalize_relative(e.path(), &self.options.base))
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for PathCollector<F> {
    fn collect(&self) -> Result<Vec<PathBuf>> {
        if let Some(target) = &self.options.target {
            return self.collect_target(target);
        }

        let mut files = Vec::new();
        for root in &self.options.roots {
            // Roots that cannot be walked contribute nothing; walk errors on
            // individual entries are skipped the same way.
            files.extend(self.scan_root(root));
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

/// Whether the path, seen from `base`, falls under any exclusion prefix.
///
/// Matching is component-wise, so `src/vendor` excludes `src/vendor/a.c` but
/// not `src/vendors/a.c`. Applied during traversal, before any file is
/// opened.
fn is_prefix_excluded(path: &Path, base: &Path, prefixes: &[PathBuf]) -> bool {
    if prefixes.is_empty() {
        return false;
    }
    let normalized = normalize_relative(path, base);
    prefixes.iter().any(|prefix| normalized.starts_with(prefix))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
