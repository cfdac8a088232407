//! Diagnostic logging.
//!
//! The passes log through the `log` facade. When `CMIN_LOG` or `RUST_LOG` is
//! set, a `tracing-subscriber` formatter picks those records up and prints them
//! to stderr, so stdout only ever carries minified source.
//!
//! ```bash
//! CMIN_LOG=debug cmin main.c > main.min.c
//! CMIN_LOG="cmin::minify=trace" cmin main.c
//! ```

use tracing_subscriber::EnvFilter;

/// Build the filter from `CMIN_LOG`, falling back to `RUST_LOG`. Returns `None`
/// when neither is set.
fn build_filter() -> Option<EnvFilter> {
    match std::env::var("CMIN_LOG") {
        Ok(val) => Some(EnvFilter::builder().parse_lossy(val)),
        Err(_) if std::env::var("RUST_LOG").is_ok() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install the global subscriber. Does nothing unless logging was requested.
pub fn init() {
    let Some(filter) = build_filter() else {
        return;
    };
    // a subscriber installed earlier (as in tests) keeps precedence
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
