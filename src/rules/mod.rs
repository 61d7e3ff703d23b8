//! The style rule catalog.
//!
//! Rules are stateless checks over a [`SourceFile`]; the [`RuleSet`] fixes
//! their order at construction and nothing can register rules afterwards.
//! Two finding kinds ([`INVALID_ENCODING`], [`UNREADABLE`]) are emitted by the
//! checker before rules run and are therefore not part of the catalog proper.

mod endings;
mod header;
mod line_length;
mod whitespace;

use std::collections::HashSet;

use crate::config::RulesConfig;
use crate::report::Violation;
use crate::source::SourceFile;
use crate::{Result, StyleGuardError};

pub use endings::{EndingStyle, LineEndingStyle};
pub use header::HeaderRule;
pub use line_length::LineTooLong;
pub use whitespace::{FinalNewline, TabCharacter, TrailingWhitespace};

/// Finding id for content that is not valid UTF-8. Emitted by the checker;
/// always active.
pub const INVALID_ENCODING: &str = "invalid-encoding";

/// Finding id for a file that could not be read. Emitted by the checker;
/// always active.
pub const UNREADABLE: &str = "unreadable";

/// One independent style check.
///
/// Implementations must be total (no panics), side-effect-free, and
/// independent of each other; their order only affects report ordering.
pub trait Rule: Send + Sync {
    /// Stable kebab-case identifier used in reports and `disabled`.
    fn id(&self) -> &'static str;

    /// One-line description for `--list-rules`.
    fn description(&self) -> &'static str;

    /// Returns every finding for `file`, empty when compliant.
    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}

/// Catalog entry for introspection.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// The ordered rule catalog with its disabled set.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
    disabled: HashSet<String>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl RuleSet {
    /// Builds the full catalog from the rule configuration.
    ///
    /// Fails when `disabled` names an unknown rule or the header pattern does
    /// not compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(TrailingWhitespace),
            Box::new(TabCharacter),
            Box::new(LineTooLong::new(config.max_line_length)),
            Box::new(HeaderRule::from_config(&config.header)?),
            Box::new(FinalNewline),
            Box::new(LineEndingStyle::new(config.line_ending)),
        ];

        let known: HashSet<&str> = rules.iter().map(|r| r.id()).collect();
        let mut disabled = HashSet::new();
        for id in &config.disabled {
            if id == INVALID_ENCODING || id == UNREADABLE {
                return Err(StyleGuardError::Config(format!(
                    "rule '{id}' is always active and cannot be disabled"
                )));
            }
            if !known.contains(id.as_str()) {
                return Err(StyleGuardError::Config(format!(
                    "unknown rule '{id}' in rules.disabled"
                )));
            }
            disabled.insert(id.clone());
        }

        Ok(Self { rules, disabled })
    }

    /// Iterates the rules that will actually run, in catalog order.
    pub fn active(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .filter(|r| !self.disabled.contains(r.id()))
            .map(AsRef::as_ref)
    }

    /// Catalog metadata in registration order, disabled rules included.
    #[must_use]
    pub fn infos(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id(),
                description: r.description(),
                enabled: !self.disabled.contains(r.id()),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
