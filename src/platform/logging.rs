use tracing::Level;

/// Level used where only a plain level can be configured.
pub fn level_from_filter(filter: &str) -> Level {
    filter
        .split(',')
        .find(|directive| !directive.contains('='))
        .and_then(|directive| directive.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

/// `RUST_LOG` wins over the configured filter.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(default_filter: &str) {
    let _ = dioxus::logger::init(level_from_filter(default_filter));
}
