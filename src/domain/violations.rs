//! Core domain models for directory-naming violations and run results
//!
//! Architecture: Rich Domain Models - Violations are entities with behavior, not just data
//! - A violation knows its rule, the offending directory, and how to display itself
//! - RunReport acts as an aggregate root managing the violations collected in one run
//! - The report alone decides pass/fail; callers map that to a process exit code

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The fixed set of naming rules enforced on directory names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NamingRule {
    /// The name contains at least one ASCII uppercase letter (A-Z)
    UppercaseLetters,
    /// The name contains at least one literal space character (U+0020)
    SpaceCharacters,
}

impl NamingRule {
    /// Stable identifier used in reports and machine output
    pub fn id(self) -> &'static str {
        match self {
            Self::UppercaseLetters => "uppercase-letters",
            Self::SpaceCharacters => "space-characters",
        }
    }

    /// Human-readable description of what the rule forbids
    pub fn description(self) -> &'static str {
        match self {
            Self::UppercaseLetters => {
                "directory names must be all-lowercase (no ASCII uppercase letters)"
            }
            Self::SpaceCharacters => "directory names must not contain space characters",
        }
    }

    /// Every rule in the fixed set, in reporting order
    pub fn all() -> &'static [NamingRule] {
        &[Self::UppercaseLetters, Self::SpaceCharacters]
    }
}

/// A naming violation detected for one candidate directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// The rule this directory's name breaks
    pub rule: NamingRule,
    /// Absolute path of the offending directory
    pub directory: PathBuf,
    /// Path relative to the resolved root, as rendered in reports
    pub relative_path: PathBuf,
    /// When this violation was detected
    pub detected_at: DateTime<Utc>,
}

impl Violation {
    /// Create a new violation
    pub fn new(rule: NamingRule, directory: PathBuf, relative_path: PathBuf) -> Self {
        Self { rule, directory, relative_path, detected_at: Utc::now() }
    }

    /// Format violation for display
    pub fn format_display(&self) -> String {
        format!("{} [{}]", self.relative_path.display(), self.rule.id())
    }
}

/// Count of violations by rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleCounts {
    pub uppercase: usize,
    pub space: usize,
}

impl RuleCounts {
    /// Total number of violations across both rules
    pub fn total(&self) -> usize {
        self.uppercase + self.space
    }

    /// Add a violation to the counts
    pub fn add(&mut self, rule: NamingRule) {
        match rule {
            NamingRule::UppercaseLetters => self.uppercase += 1,
            NamingRule::SpaceCharacters => self.space += 1,
        }
    }
}

/// Summary statistics for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of candidate directories checked
    pub directories_checked: usize,
    /// Number of violations by rule
    pub violations_by_rule: RuleCounts,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when the check was performed
    pub checked_at: DateTime<Utc>,
}

/// Complete result of one check run: every violation plus summary metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// The resolved root the check ran against
    pub root: PathBuf,
    /// All violations found, grouped by rule in reporting order
    pub violations: Vec<Violation>,
    /// Summary statistics
    pub summary: RunSummary,
}

impl RunReport {
    /// Create a new empty report for the given resolved root
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            violations: Vec::new(),
            summary: RunSummary { checked_at: Utc::now(), ..Default::default() },
        }
    }

    /// Add a violation to the report
    pub fn add_violation(&mut self, violation: Violation) {
        self.summary.violations_by_rule.add(violation.rule);
        self.violations.push(violation);
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Whether the run passed (no violations of either rule)
    pub fn passed(&self) -> bool {
        !self.has_violations()
    }

    /// Exit code for pipeline gating: 0 pass, 1 violations found.
    /// Configuration errors never reach a report; they surface as `LintError`.
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }

    /// Get violations of a specific rule
    pub fn violations_of(&self, rule: NamingRule) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }

    /// Set the number of candidate directories checked
    pub fn set_directories_checked(&mut self, count: usize) {
        self.summary.directories_checked = count;
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }

    /// Sort violations by rule and relative path for consistent output
    pub fn sort_violations(&mut self) {
        self.violations
            .sort_by(|a, b| a.rule.cmp(&b.rule).then_with(|| a.relative_path.cmp(&b.relative_path)));
    }
}

/// Error types that can occur during a check run
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Invalid configuration: missing root, root is not a directory, bad config file
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A file or directory could not be read or created
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A report could not be rendered in the requested format
    #[error("Report error: {message}")]
    Report { message: String },
}

impl LintError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report { message: message.into() }
    }

    /// Whether this error is a configuration error (maps to exit code 2)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Result type for lint operations
pub type LintResult<T> = Result<T, LintError>;
