use std::sync::Once;
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber. Logs go to stderr so that documents and
/// notices printed on stdout stay clean. `RUST_LOG` overrides the default
/// `warn` filter.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}

/// Wall-clock timer for request latency.
pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
