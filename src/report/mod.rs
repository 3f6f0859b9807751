//! Reporting sinks and output formats
//!
//! CDD Principle: Anti-Corruption Layer - sinks and formatters translate domain objects
//! - The core emits structured events (info, violation, fatal) through `ReportSink`;
//!   sink lifecycle is owned by the caller, so the core never touches process streams
//! - `ReportFormatter` converts a finished `RunReport` to machine formats
//! - Domain logic remains pure while supporting multiple presentation needs

use crate::domain::violations::{LintError, LintResult, RunReport, Violation};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Supported output formats for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format, streamed line-per-violator with a summary footer
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// GitHub Actions workflow annotations
    GitHub,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "github" => Some(Self::GitHub),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json", "github"]
    }
}

/// Structured event sink the core reports through during a run.
///
/// Implementations decide where events land: terminal, log file, memory.
pub trait ReportSink {
    /// Progress and summary messages
    fn info(&mut self, message: &str);
    /// One naming violation, emitted as it is classified
    fn violation(&mut self, violation: &Violation);
    /// A fatal configuration error that ends the run
    fn fatal(&mut self, message: &str);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn info(&mut self, message: &str) {
        (**self).info(message);
    }

    fn violation(&mut self, violation: &Violation) {
        (**self).violation(violation);
    }

    fn fatal(&mut self, message: &str) {
        (**self).fatal(message);
    }
}

/// Sink that writes the human report to stdout/stderr
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl ReportSink for ConsoleSink {
    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn violation(&mut self, violation: &Violation) {
        if self.use_colors {
            println!(
                "  \x1b[31m{}\x1b[0m [\x1b[2m{}\x1b[0m]",
                violation.relative_path.display(),
                violation.rule.id()
            );
        } else {
            println!("  {}", violation.format_display());
        }
    }

    fn fatal(&mut self, message: &str) {
        if self.use_colors {
            eprintln!("\x1b[31mError:\x1b[0m {message}");
        } else {
            eprintln!("Error: {message}");
        }
    }
}

/// Sink that mirrors the human report into a log file, truncated per run
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create or truncate the log file at `path`.
    ///
    /// Creation failure is fatal and surfaces before traversal.
    pub fn create(path: &Path) -> LintResult<Self> {
        let file = File::create(path)?;
        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl ReportSink for FileSink {
    fn info(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{message}");
    }

    fn violation(&mut self, violation: &Violation) {
        let _ = writeln!(self.writer, "  {}", violation.format_display());
    }

    fn fatal(&mut self, message: &str) {
        let _ = writeln!(self.writer, "Error: {message}");
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Sink that forwards every event to each wrapped sink in order
pub struct FanoutSink<'a> {
    sinks: Vec<Box<dyn ReportSink + 'a>>,
}

impl<'a> FanoutSink<'a> {
    pub fn new(sinks: Vec<Box<dyn ReportSink + 'a>>) -> Self {
        Self { sinks }
    }
}

impl ReportSink for FanoutSink<'_> {
    fn info(&mut self, message: &str) {
        for sink in &mut self.sinks {
            sink.info(message);
        }
    }

    fn violation(&mut self, violation: &Violation) {
        for sink in &mut self.sinks {
            sink.violation(violation);
        }
    }

    fn fatal(&mut self, message: &str) {
        for sink in &mut self.sinks {
            sink.fatal(message);
        }
    }
}

/// Sink that discards every event; used when a machine format owns stdout
pub struct QuietSink;

impl ReportSink for QuietSink {
    fn info(&mut self, _message: &str) {}
    fn violation(&mut self, _violation: &Violation) {}
    fn fatal(&mut self, _message: &str) {}
}

/// Event recorded by `MemorySink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Info(String),
    Violation { rule_id: &'static str, relative_path: String },
    Fatal(String),
}

/// Sink that records events in memory; for embedders and tests
#[derive(Default)]
pub struct MemorySink {
    pub events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative paths of every violation event recorded, in emission order
    pub fn violation_paths(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Violation { relative_path, .. } => Some(relative_path.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn info(&mut self, message: &str) {
        self.events.push(SinkEvent::Info(message.to_string()));
    }

    fn violation(&mut self, violation: &Violation) {
        self.events.push(SinkEvent::Violation {
            rule_id: violation.rule.id(),
            relative_path: violation.relative_path.display().to_string(),
        });
    }

    fn fatal(&mut self, message: &str) {
        self.events.push(SinkEvent::Fatal(message.to_string()));
    }
}

/// Formats a finished run report for output
pub struct ReportFormatter {
    use_colors: bool,
}

impl ReportFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format a run report in the specified format
    pub fn format_report(&self, report: &RunReport, format: OutputFormat) -> LintResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::GitHub => Ok(self.format_github(report)),
        }
    }

    /// Human-readable rendering: violations grouped by rule plus a summary footer
    fn format_human(&self, report: &RunReport) -> String {
        let mut output = String::new();

        if report.passed() {
            if self.use_colors {
                output.push_str("\x1b[32mNo naming violations found\x1b[0m\n");
            } else {
                output.push_str("No naming violations found\n");
            }
        } else {
            for rule in crate::domain::violations::NamingRule::all() {
                let violators: Vec<&Violation> = report.violations_of(*rule).collect();
                if violators.is_empty() {
                    continue;
                }

                if self.use_colors {
                    output.push_str(&format!("\x1b[31m{}\x1b[0m\n", rule.description()));
                } else {
                    output.push_str(&format!("{}\n", rule.description()));
                }
                for violation in violators {
                    output.push_str(&format!("  {}\n", violation.relative_path.display()));
                }
                output.push('\n');
            }
        }

        output.push_str(&format_summary(report));
        output
    }

    /// JSON rendering of the full report
    fn format_json(&self, report: &RunReport) -> LintResult<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| LintError::report(format!("JSON serialization failed: {e}")))
    }

    /// GitHub Actions workflow annotations, one `::error` line per violator
    fn format_github(&self, report: &RunReport) -> String {
        let mut output = String::new();

        for violation in &report.violations {
            output.push_str(&format!(
                "::error file={},title={}::{}\n",
                violation.relative_path.display(),
                violation.rule.id(),
                violation.rule.description()
            ));
        }

        output
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// One-line summary suitable for the human footer and the log artifact
pub fn format_summary(report: &RunReport) -> String {
    let counts = &report.summary.violations_by_rule;
    let seconds = (report.summary.execution_time_ms as f64) / 1000.0;

    if counts.total() == 0 {
        format!(
            "Summary: 0 violations in {} directories ({:.1}s)",
            report.summary.directories_checked, seconds
        )
    } else {
        format!(
            "Summary: {} violation{} ({} uppercase, {} space) in {} directories ({:.1}s)",
            counts.total(),
            if counts.total() == 1 { "" } else { "s" },
            counts.uppercase,
            counts.space,
            report.summary.directories_checked,
            seconds
        )
    }
}
