//! dirlint CLI - command-line interface for the directory-naming gate
//!
//! CDD Principle: Application Layer - the CLI coordinates user interactions with the core
//! - Translates flags and config files into a configured `Checker`
//! - Owns sink lifecycle, terminal output, and process exit codes
//! - Exit contract: 0 pass, 1 naming violations found, 2 configuration error

use clap::{Parser, Subcommand, ValueEnum};
use dirlint::{
    Checker, ConsoleSink, FanoutSink, FileSink, LintConfig, LintResult, NamingRule, OutputFormat,
    QuietSink, ReportFormatter, ReportSink,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// dirlint - directory-naming convention gate
#[derive(Parser)]
#[command(name = "dirlint")]
#[command(version = "0.1.0")]
#[command(about = "Enforce lowercase, space-free directory names across a tree")]
#[command(
    long_about = "dirlint walks a directory tree and flags subdirectories whose names \
contain uppercase letters or spaces. Designed as a gate step in build/release pipelines: \
it exits 0 on a clean tree, 1 when violations are found, and 2 on configuration errors."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check directory names under a root
    Check {
        /// Root directory to scan
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Subtrees to prune from traversal, relative to the root
        #[arg(short, long, num_args = 1.., action = clap::ArgAction::Append)]
        exclude: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Mirror the human report into a log file, truncated per run
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Validate a configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },

    /// List the fixed naming rules
    Rules,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
    Github,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Github => OutputFormat::GitHub,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn run_command(cli: Cli) -> LintResult<i32> {
    match cli.command {
        Commands::Check { root, exclude, format, log_file } => {
            run_lint_check(cli.config, root, exclude, format, log_file, !cli.no_color)
        }
        Commands::ValidateConfig { config_file } => {
            run_validate_config(config_file.or(cli.config))
        }
        Commands::Rules => run_list_rules(),
    }
}

/// Load the effective configuration: explicit path, else discovery, else defaults
fn load_config(explicit: Option<PathBuf>) -> LintResult<LintConfig> {
    if let Some(path) = explicit {
        return LintConfig::load_from_file(path);
    }
    match LintConfig::discover() {
        Some(path) => LintConfig::load_from_file(path),
        None => Ok(LintConfig::default()),
    }
}

fn run_lint_check(
    config_path: Option<PathBuf>,
    root: Option<PathBuf>,
    cli_excludes: Vec<PathBuf>,
    format: OutputFormatArg,
    log_file: Option<PathBuf>,
    use_colors: bool,
) -> LintResult<i32> {
    let config = load_config(config_path)?;

    // CLI flag > config file > current directory.
    let root = root.or(config.root).unwrap_or_else(|| PathBuf::from("."));

    // CLI excludes append to config excludes.
    let mut excludes = config.exclude;
    excludes.extend(cli_excludes);

    // The log sink is created before traversal so a bad path fails the run
    // as a configuration problem, not mid-walk.
    let mut console = ConsoleSink::new(use_colors);
    let mut quiet = QuietSink;
    let mut log_sink = match &log_file {
        Some(path) => Some(FileSink::create(path)?),
        None => None,
    };

    let checker = Checker::new(root).exclude_all(excludes);
    let result = {
        let mut sinks: Vec<Box<dyn ReportSink + '_>> = Vec::new();
        if format == OutputFormatArg::Human {
            sinks.push(Box::new(&mut console));
        } else {
            sinks.push(Box::new(&mut quiet));
        }
        if let Some(sink) = log_sink.as_mut() {
            sinks.push(Box::new(sink));
        }
        checker.run(&mut FanoutSink::new(sinks))
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            // The console message is owned by main's error path; the log
            // artifact still records why the run died.
            if let Some(sink) = log_sink.as_mut() {
                sink.fatal(&e.to_string());
            }
            return Err(e);
        }
    };

    if format != OutputFormatArg::Human {
        let formatter = ReportFormatter::new(use_colors);
        print!("{}", formatter.format_report(&report, format.into())?);
    }

    Ok(report.exit_code())
}

fn run_validate_config(config_path: Option<PathBuf>) -> LintResult<i32> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("dirlint.yaml"));

    println!("Validating configuration: {}", config_path.display());

    match LintConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("Configuration is valid");
            match &config.root {
                Some(root) => println!("  Root: {}", root.display()),
                None => println!("  Root: (default: current directory)"),
            }
            println!("  Excluded subtrees: {}", config.exclude.len());
            Ok(0)
        }
        Err(e) => {
            eprintln!("Configuration validation failed: {e}");
            Ok(1)
        }
    }
}

fn run_list_rules() -> LintResult<i32> {
    println!("Naming rules (fixed, not configurable):\n");

    for rule in NamingRule::all() {
        println!("  {} - {}", rule.id(), rule.description());
    }

    Ok(0)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
