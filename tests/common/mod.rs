#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes, for content that is not valid UTF-8.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic style-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Basic config: scan everything under the fixture root, no gitignore.
pub const BASIC_CONFIG: &str = r#"
[scan]
roots = ["."]
exclude = []
extensions = ["c", "h"]
gitignore = false

[rules]
max_line_length = 100
"#;

/// Config scoping the scan to src/ with a vendored subtree excluded.
pub const VENDOR_EXCLUDE_CONFIG: &str = r#"
[scan]
roots = ["src"]
exclude = ["src/vendor"]
extensions = ["c", "h"]
gitignore = false

[rules]
max_line_length = 100
"#;

/// Config requiring a copyright header in the first 5 lines.
pub const HEADER_CONFIG: &str = r#"
[scan]
roots = ["."]
exclude = []
extensions = ["c", "h"]
gitignore = false

[rules]
max_line_length = 100

[rules.header]
pattern = 'Copyright \(c\) \d{4}'
max_lines = 5
"#;

/// Config with the whitespace rules disabled.
pub const DISABLED_RULES_CONFIG: &str = r#"
[scan]
roots = ["."]
exclude = []
extensions = ["c", "h"]
gitignore = false

[rules]
max_line_length = 100
disabled = ["trailing-whitespace", "missing-final-newline"]
"#;

/// Config enforcing CRLF line endings.
pub const CRLF_CONFIG: &str = r#"
[scan]
roots = ["."]
exclude = []
extensions = ["c", "h"]
gitignore = false

[rules]
line_ending = "crlf"
"#;
