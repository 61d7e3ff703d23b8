use serde::{Deserialize, Serialize};

use crate::rules::EndingStyle;

/// Top-level configuration: file discovery under `[scan]`, rule knobs under
/// `[rules]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// Scan configuration: which files the tree walk considers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Root directories for tree mode. Missing roots contribute nothing.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,

    /// Path-segment prefixes pruned from traversal before any file is opened.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Supplemental glob excludes applied per file, e.g. `**/*.generated.rs`.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Extensions admitted to checking. Empty admits every extension.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Respect the tree's .gitignore rules (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            exclude: default_exclude(),
            exclude_patterns: Vec::new(),
            extensions: default_extensions(),
            gitignore: true,
        }
    }
}

/// Rule configuration consumed by the rule catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Maximum characters per line, terminator excluded.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Canonical line terminator: `lf`, `crlf`, or `auto`.
    #[serde(default)]
    pub line_ending: EndingStyle,

    /// Rule ids to switch off, validated against the catalog.
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Required file header settings.
    #[serde(default)]
    pub header: HeaderConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            line_ending: EndingStyle::default(),
            disabled: Vec::new(),
            header: HeaderConfig::default(),
        }
    }
}

/// `[rules.header]`: the header rule is inert while `pattern` is unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Regex that must match within the first `max_lines` lines.
    #[serde(default)]
    pub pattern: Option<String>,

    /// How many leading lines the header may occupy.
    #[serde(default = "default_header_max_lines")]
    pub max_lines: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            max_lines: default_header_max_lines(),
        }
    }
}

impl Config {
    /// Semantic checks applied after CLI overrides, before any scanning.
    pub fn validate(&self) -> crate::Result<()> {
        if self.rules.max_line_length == 0 {
            return Err(crate::StyleGuardError::Config(
                "rules.max_line_length must be at least 1".to_string(),
            ));
        }
        if self.rules.header.max_lines == 0 {
            return Err(crate::StyleGuardError::Config(
                "rules.header.max_lines must be at least 1".to_string(),
            ));
        }
        if self.scan.roots.is_empty() {
            return Err(crate::StyleGuardError::Config(
                "scan.roots must not be empty".to_string(),
            ));
        }
        for pattern in &self.scan.exclude_patterns {
            globset::Glob::new(pattern).map_err(|e| crate::StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}

fn default_roots() -> Vec<String> {
    vec![".".to_string()]
}

fn default_exclude() -> Vec<String> {
    [
        "target",
        "build",
        "dist",
        "tmp",
        "vendor",
        "node_modules",
        "third_party",
        ".git",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_extensions() -> Vec<String> {
    [
        "rs", "c", "h", "cc", "cpp", "hpp", "py", "go", "js", "ts", "java", "rb", "sh", "toml",
        "yml", "yaml",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

const fn default_true() -> bool {
    true
}

const fn default_max_line_length() -> usize {
    100
}

const fn default_header_max_lines() -> usize {
    10
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
