use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "Vyberology";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Volume emitted by the engine pipeline.
pub const ENGINE_VOLUME: u8 = 1;

/// Version stamped into every composed reading.
pub const COMPOSER_VERSION: &str = "2.0.0";

/// Locale assumed when request metadata omits one.
pub const DEFAULT_LOCALE: &str = "en-AU";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "vyberology=info"
}

/// Install a fmt subscriber for host binaries that don't bring their own.
///
/// Returns false when a global subscriber was already set.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} engine v{} logging initialised", APP_NAME, APP_VERSION);
    }
    installed
}
