use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

fn write_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn collect_tree_with<F: FileFilter>(
    dir: &TempDir,
    roots: &[&str],
    prefixes: &[&str],
    gitignore: bool,
    filter: F,
) -> Vec<PathBuf> {
    let roots = roots.iter().map(|r| dir.path().join(r)).collect();
    let prefixes: Vec<PathBuf> = prefixes.iter().map(PathBuf::from).collect();
    let options = ScanOptions::tree(dir.path().to_path_buf(), roots, &prefixes, gitignore);
    PathCollector::new(filter, options).collect().unwrap()
}

fn collect_tree(dir: &TempDir, roots: &[&str], prefixes: &[&str]) -> Vec<PathBuf> {
    collect_tree_with(dir, roots, prefixes, false, AcceptAllFilter)
}

fn collect_single(dir: &TempDir, target: &str) -> Result<Vec<PathBuf>> {
    let options = ScanOptions::single_file(dir.path().to_path_buf(), dir.path().join(target));
    PathCollector::new(AcceptAllFilter, options).collect()
}

#[test]
fn collects_files_under_roots() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/main.c", "int main() {}\n");
    write_file(&dir, "src/lib/util.c", "void util() {}\n");

    let files = collect_tree(&dir, &["src"], &[]);

    assert_eq!(
        files,
        vec![PathBuf::from("src/lib/util.c"), PathBuf::from("src/main.c")]
    );
}

#[test]
fn results_are_sorted_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "zebra.c", "\n");
    write_file(&dir, "alpha.c", "\n");
    write_file(&dir, "src/mid.c", "\n");

    // Overlapping roots must not duplicate src/mid.c.
    let files = collect_tree(&dir, &[".", "src"], &[]);

    assert_eq!(
        files,
        vec![
            PathBuf::from("alpha.c"),
            PathBuf::from("src/mid.c"),
            PathBuf::from("zebra.c"),
        ]
    );
}

#[test]
fn excluded_prefix_prunes_whole_subtree() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/main.c", "\n");
    write_file(&dir, "src/vendor/deep/third.c", "\n");

    let files = collect_tree(&dir, &["."], &["src/vendor"]);

    assert_eq!(files, vec![PathBuf::from("src/main.c")]);
}

#[test]
fn prefix_matches_whole_path_components() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/vendor/a.c", "\n");
    write_file(&dir, "src/vendors/b.c", "\n");

    let files = collect_tree(&dir, &["."], &["src/vendor"]);

    assert_eq!(files, vec![PathBuf::from("src/vendors/b.c")]);
}

#[test]
fn prefix_with_leading_dot_slash_is_normalized() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/vendor/a.c", "\n");
    write_file(&dir, "src/main.c", "\n");

    let files = collect_tree(&dir, &["."], &["./src/vendor"]);

    assert_eq!(files, vec![PathBuf::from("src/main.c")]);
}

#[test]
fn missing_root_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "present.c", "\n");

    let files = collect_tree(&dir, &["absent", "."], &[]);

    assert_eq!(files, vec![PathBuf::from("present.c")]);
}

#[test]
fn filter_limits_collected_files() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "keep.rs", "\n");
    write_file(&dir, "skip.txt", "\n");

    let filter = SourceFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let files = collect_tree_with(&dir, &["."], &[], false, filter);

    assert_eq!(files, vec![PathBuf::from("keep.rs")]);
}

#[test]
fn single_file_returns_exactly_the_target() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/vendor/bad.c", "\n");

    // A path that tree mode would exclude is still accepted here.
    let files = collect_single(&dir, "src/vendor/bad.c").unwrap();

    assert_eq!(files, vec![PathBuf::from("src/vendor/bad.c")]);
}

#[test]
fn single_file_missing_target_is_a_config_error() {
    let dir = TempDir::new().unwrap();

    let err = collect_single(&dir, "absent.c").unwrap_err();

    assert!(matches!(err, StyleGuardError::Config(_)));
    assert!(err.to_string().contains("path not found"));
}

#[test]
fn single_file_directory_target_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("subdir")).unwrap();

    let err = collect_single(&dir, "subdir").unwrap_err();

    assert!(matches!(err, StyleGuardError::Config(_)));
    assert!(err.to_string().contains("not a regular file"));
}

#[test]
fn gitignore_rules_apply_when_enabled() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, ".gitignore", "ignored.c\n");
    write_file(&dir, "ignored.c", "\n");
    write_file(&dir, "kept.c", "\n");

    let filter = SourceFilter::new(vec!["c".to_string()], &[]).unwrap();
    let files = collect_tree_with(&dir, &["."], &[], true, filter);

    assert_eq!(files, vec![PathBuf::from("kept.c")]);
}

#[test]
fn gitignore_rules_are_skipped_when_disabled() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, ".gitignore", "ignored.c\n");
    write_file(&dir, "ignored.c", "\n");
    write_file(&dir, "kept.c", "\n");

    let filter = SourceFilter::new(vec!["c".to_string()], &[]).unwrap();
    let files = collect_tree_with(&dir, &["."], &[], false, filter);

    assert_eq!(files, vec![PathBuf::from("ignored.c"), PathBuf::from("kept.c")]);
}

#[test]
fn hidden_directories_are_scanned() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, ".hidden/secret.c", "\n");

    let filter = SourceFilter::new(vec!["c".to_string()], &[]).unwrap();
    let files = collect_tree_with(&dir, &["."], &[], true, filter);

    assert_eq!(files, vec![PathBuf::from(".hidden/secret.c")]);
}

#[test]
fn exclusion_applies_across_roots() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "src/main.c", "\n");
    write_file(&dir, "lib/vendor/a.c", "\n");
    write_file(&dir, "lib/b.c", "\n");

    let files = collect_tree(&dir, &["src", "lib"], &["lib/vendor"]);

    assert_eq!(
        files,
        vec![PathBuf::from("lib/b.c"), PathBuf::from("src/main.c")]
    );
}
