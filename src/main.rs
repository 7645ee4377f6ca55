use tracing::{info, warn};

use users_console::app;
use users_console::config::{self, AppConfig};
use users_console::platform::logging::{init_logging, level_from_filter};

fn main() {
    let loaded = config::load();
    let log_filter = loaded
        .as_ref()
        .map(|config| config.log_filter.clone())
        .unwrap_or_else(|_| AppConfig::default().log_filter);
    init_logging(&log_filter);

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "using default configuration");
            AppConfig::default()
        }
    };
    info!(
        api = %config.api_base_url,
        page_size = config.page_size,
        level = %level_from_filter(&config.log_filter),
        "starting users console"
    );

    let builder = dioxus::LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        dioxus::desktop::Config::new()
            .with_window(dioxus::desktop::WindowBuilder::new().with_title("Users")),
    );

    builder.launch(app::App);
}
