//! Logging setup for the `grader` binary.
//!
//! Diagnostics go to standard error through `tracing`; standard output is
//! reserved for the JSON report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "rs_grader=debug,grader=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is an
/// error from `try_init`, which callers may ignore.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .try_init()?;

    Ok(())
}
