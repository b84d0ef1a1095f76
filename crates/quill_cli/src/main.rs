//! Quill CLI, the command-line front end of the Quill analysis service.
//!
//! Provides `quill check` for one-shot diagnostics of files on disk and
//! `quill serve` for a long-running JSONL request loop on stdin/stdout.

#![warn(missing_docs)]

mod check;
mod delimiter;
mod protocol;
mod serve;
mod telemetry;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use quill_config::HostOptions;

/// Quill, a caching host for language-analysis engines.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill analysis service")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (info-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Compare file names case-insensitively.
    #[arg(long, global = true)]
    pub case_insensitive: bool,

    /// Directory holding the default library files. Defaults to `lib`
    /// next to the executable.
    #[arg(long, global = true)]
    pub toolchain_dir: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report diagnostics for the given files.
    Check(CheckArgs),
    /// Answer JSONL requests on stdin until it closes.
    Serve,
}

/// Arguments for the `quill check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root containing the optional `quill.toml`.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to log at info level.
    pub verbose: bool,
    /// Options shared by every project host.
    pub options: HostOptions,
}

impl GlobalArgs {
    fn from_cli(cli: &Cli) -> Self {
        let lib_dir = cli.toolchain_dir.clone().unwrap_or_else(default_toolchain_dir);
        let mut options = HostOptions::with_toolchain_lib_dir(lib_dir);
        options.case_sensitive_file_names = !cli.case_insensitive;
        Self {
            quiet: cli.quiet,
            verbose: cli.verbose,
            options,
        }
    }
}

/// `lib` next to the running executable, or `lib` relative to the working
/// directory when the executable path is unknown.
fn default_toolchain_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("lib")))
        .unwrap_or_else(|| PathBuf::from("lib"))
}

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs::from_cli(&cli);
    telemetry::init(&global);

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Serve => serve::run(global.options.clone()),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
