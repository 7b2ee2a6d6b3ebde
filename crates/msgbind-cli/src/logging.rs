//! Stderr logging for the CLI

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,msgbind_core=debug,msgbind=debug",
        _ => "debug,msgbind_core=trace,msgbind=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
