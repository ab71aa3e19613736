use crate::catalog::CatalogClient;
use crate::config::Config;
use dioxus::prelude::*;

#[derive(Clone)]
pub struct AppContext {
    pub client: CatalogClient,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            client: CatalogClient::from_config(&config),
            config,
        }
    }
}

/// Hook to access the shared catalog client
pub fn use_catalog_client() -> CatalogClient {
    let context = use_context::<AppContext>();
    context.client.clone()
}
