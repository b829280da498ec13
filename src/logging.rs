//! Tracing setup for the command-line front end

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Directive applied on top of `RUST_LOG`
pub const DEFAULT_DIRECTIVE: &str = "expensify=warn";

/// Install the global fmt subscriber, writing to stderr
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
