//! Log output for the `quill` binary.

use tracing_subscriber::EnvFilter;

use crate::GlobalArgs;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "QUILL_LOG";

/// The filter used when `QUILL_LOG` is unset or invalid.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout belongs to
/// command output and the JSONL protocol.
pub fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(global.quiet, global.verbose)));
    // A subscriber may already be installed, e.g. under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
