//! Logging setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,ujenzi_hub=debug,app_state=debug,app_core=debug";

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if result.is_ok() {
        tracing::debug!("logging initialized");
    }
}
