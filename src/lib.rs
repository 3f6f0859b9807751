//! dirlint - directory-naming convention gate for build pipelines
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain logic separated from infrastructure concerns
//! - The core reports through an injected `ReportSink` and returns values; it never
//!   touches process streams or exit codes itself
//! - Data flows one-way: resolve -> walk -> classify -> report

pub mod config;
pub mod domain;
pub mod paths;
pub mod report;
pub mod rules;
pub mod walker;

// Re-export main types for convenient access
pub use domain::violations::{
    LintError, LintResult, NamingRule, RuleCounts, RunReport, RunSummary, Violation,
};

pub use config::LintConfig;

pub use paths::ExclusionSet;

pub use report::{
    ConsoleSink, FanoutSink, FileSink, MemorySink, OutputFormat, QuietSink, ReportFormatter,
    ReportSink,
};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Configured entry point for a check run.
///
/// Holds the unresolved root and the exclusion list; resolution and validation
/// happen inside [`Checker::run`] so configuration errors surface as values,
/// not process exits.
#[derive(Debug, Clone)]
pub struct Checker {
    root: PathBuf,
    excludes: Vec<PathBuf>,
}

impl Checker {
    /// Create a checker for the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), excludes: Vec::new() }
    }

    /// Add one subtree to prune, relative to the root
    pub fn exclude(mut self, relative: impl Into<PathBuf>) -> Self {
        self.excludes.push(relative.into());
        self
    }

    /// Add several subtrees to prune, relative to the root
    pub fn exclude_all<I, P>(mut self, relative: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.excludes.extend(relative.into_iter().map(Into::into));
        self
    }

    /// Run the check: resolve the root, walk the tree, classify every
    /// candidate, and emit each violation through `sink`.
    ///
    /// Violations are an expected outcome and never an `Err`; the returned
    /// report carries the pass/fail verdict. `Err` means a configuration
    /// error raised before traversal.
    pub fn run(&self, sink: &mut dyn ReportSink) -> LintResult<RunReport> {
        let start = Instant::now();

        let root = paths::resolve_root(&self.root)?;
        let exclusions = ExclusionSet::build(&root, &self.excludes);

        sink.info(&format!("checking directory names under {}", root.display()));
        tracing::debug!(
            "resolved root {} with {} exclusion(s)",
            root.display(),
            exclusions.len()
        );

        let candidates = walker::list_candidates(&root, &exclusions)?;

        let mut lint_report = RunReport::new(root.clone());
        lint_report.set_directories_checked(candidates.len());

        for dir in rules::classify_case(&candidates) {
            let relative = paths::relative_to_root(&root, &dir);
            let violation = Violation::new(NamingRule::UppercaseLetters, dir, relative);
            sink.violation(&violation);
            lint_report.add_violation(violation);
        }
        for dir in rules::classify_space(&candidates) {
            let relative = paths::relative_to_root(&root, &dir);
            let violation = Violation::new(NamingRule::SpaceCharacters, dir, relative);
            sink.violation(&violation);
            lint_report.add_violation(violation);
        }

        lint_report.set_execution_time(start.elapsed().as_millis() as u64);
        sink.info(&report::format_summary(&lint_report));

        Ok(lint_report)
    }
}

/// Convenience function: check `root` with the given exclusions in one call
pub fn run_check<P: AsRef<Path>>(
    root: P,
    excludes: &[PathBuf],
    sink: &mut dyn ReportSink,
) -> LintResult<RunReport> {
    Checker::new(root.as_ref()).exclude_all(excludes.iter().cloned()).run(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_on(root: &Path, excludes: &[&str]) -> (RunReport, MemorySink) {
        let mut sink = MemorySink::new();
        let report = Checker::new(root)
            .exclude_all(excludes.iter().map(PathBuf::from))
            .run(&mut sink)
            .unwrap();
        (report, sink)
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = MemorySink::new();

        let err = Checker::new(temp_dir.path().join("absent")).run(&mut sink).unwrap_err();

        assert!(err.is_config());
        // Failed fast: nothing was traversed or reported.
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_file_root_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();
        let mut sink = MemorySink::new();

        let err = Checker::new(&file).run(&mut sink).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_scenario_a_uppercase_violation() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("dir1/subdir1/upperCase")).unwrap();

        let (report, sink) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.summary.violations_by_rule.uppercase, 1);
        assert_eq!(report.summary.violations_by_rule.space, 0);
        assert_eq!(
            report.violations[0].relative_path,
            Path::new("dir1/subdir1/upperCase")
        );
        assert_eq!(sink.violation_paths(), vec!["dir1/subdir1/upperCase"]);
    }

    #[test]
    fn test_scenario_b_space_violation() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("dir2/subdir2/a space")).unwrap();

        let (report, _) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.summary.violations_by_rule.space, 1);
        assert_eq!(report.violations[0].rule, NamingRule::SpaceCharacters);
    }

    #[test]
    fn test_scenario_c_clean_tree_passes() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("dir5/abc")).unwrap();

        let (report, sink) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.exit_code(), 0);
        assert!(report.passed());
        assert_eq!(report.summary.directories_checked, 2);
        assert!(sink.violation_paths().is_empty());
    }

    #[test]
    fn test_scenario_d_directory_violating_both_rules() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("dir4/Case and Space")).unwrap();

        let (report, _) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.exit_code(), 1);
        let case: Vec<_> = report.violations_of(NamingRule::UppercaseLetters).collect();
        let space: Vec<_> = report.violations_of(NamingRule::SpaceCharacters).collect();
        assert_eq!(case.len(), 1);
        assert_eq!(space.len(), 1);
        assert_eq!(case[0].relative_path, space[0].relative_path);
    }

    #[test]
    fn test_scenario_e_excluded_violator_is_not_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("dir3/subdir3/ space")).unwrap();
        fs::create_dir_all(temp_dir.path().join("kept/fine")).unwrap();

        let (report, sink) = run_on(temp_dir.path(), &["dir3/subdir3"]);

        assert_eq!(report.exit_code(), 0);
        assert!(sink.violation_paths().is_empty());
        // dir3 itself is still a candidate; only the excluded subtree is pruned.
        assert_eq!(report.summary.directories_checked, 3);
    }

    #[test]
    fn test_every_violation_is_reported_not_just_the_first() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("First")).unwrap();
        fs::create_dir(temp_dir.path().join("Second")).unwrap();
        fs::create_dir(temp_dir.path().join("third space")).unwrap();

        let (report, sink) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.summary.violations_by_rule.total(), 3);
        assert_eq!(sink.violation_paths().len(), 3);
    }

    #[test]
    fn test_runs_are_idempotent_on_unchanged_tree() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Upper/a space")).unwrap();

        let (mut first, _) = run_on(temp_dir.path(), &[]);
        let (mut second, _) = run_on(temp_dir.path(), &[]);
        first.sort_violations();
        second.sort_violations();

        let rendered = |r: &RunReport| -> Vec<(NamingRule, PathBuf)> {
            r.violations.iter().map(|v| (v.rule, v.relative_path.clone())).collect()
        };
        assert_eq!(rendered(&first), rendered(&second));
    }

    #[test]
    fn test_empty_root_is_a_pass() {
        let temp_dir = TempDir::new().unwrap();

        let (report, _) = run_on(temp_dir.path(), &[]);

        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.summary.directories_checked, 0);
    }

    #[test]
    fn test_run_check_convenience_function() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Bad")).unwrap();

        let mut sink = MemorySink::new();
        let report = run_check(temp_dir.path(), &[], &mut sink).unwrap();

        assert_eq!(report.exit_code(), 1);
    }
}
