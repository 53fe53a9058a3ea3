pub mod clock;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `level` sets the default for this crate; `RUST_LOG` directives still apply.
pub fn init_tracing(level: &str) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        match format!("payday_forecast={level}").parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(err) => eprintln!("ignoring invalid log level `{level}`: {err}"),
        }
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
