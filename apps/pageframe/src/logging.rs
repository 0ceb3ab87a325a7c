//! Logging setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` wins over the built-in filter when set.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used without `--verbose`.
pub const DEFAULT_FILTER: &str = "pageframe=info";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "pageframe=debug,pageframe_core=debug";

/// Build the log filter for the given verbosity.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
}

// =============================================================================
// TESTS
// =============================================================================
