//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogFormat;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "STUDYPLAN_LOG";

/// Filter used when `STUDYPLAN_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "studyplan=debug,studyplan_core=debug"
    } else {
        "studyplan=warn,studyplan_core=warn"
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }
}
