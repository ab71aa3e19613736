use encore::config::Config;
use encore::ui::{make_config, App, AppContext};
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("Set ENCORE_GRAPHQL_URL (and ENCORE_ANON_KEY) in the environment or a .env file");
            std::process::exit(1);
        }
    };

    info!("Starting encore against {}", config.graphql_url);
    let context = AppContext::new(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
