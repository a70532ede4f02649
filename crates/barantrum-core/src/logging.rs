//! Console logging setup.
//!
//! ```ignore
//! use barantrum_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().with_filter("barantrum=debug").init();
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_FILTER: &str = "barantrum=info,barantrum_core=info";

/// Builder for the process-wide tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment filter (e.g., "barantrum=info,barantrum_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Include the event target (module path) in console output.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Resolve the filter: explicit, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => EnvFilter::new(filter),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        }
    }

    /// Install as the global subscriber. Later calls are ignored.
    pub fn init(self) {
        let subscriber = tracing_subscriber::registry()
            .with(self.filter())
            .with(tracing_subscriber::fmt::layer().with_target(self.with_target));

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already installed");
        }
    }
}
