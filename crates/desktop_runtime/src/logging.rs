//! Tracing subscriber setup for native hosts such as the `site_app` config checker.
//!
//! Browser builds skip this; their events go nowhere unless the embedding page installs a
//! subscriber.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Maps a `-v` count to the most verbose level shown.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. `RUST_LOG` directives are honored on top of `verbosity`.
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::from_default_env().add_directive(level_for_verbosity(verbosity).into());

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
