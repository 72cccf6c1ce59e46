//! Application state management

use domain_catalog::{CatalogService, MongoCatalogRepository};
use mongodb::Client;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    /// Bound to the configured products collection
    pub repository: MongoCatalogRepository,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        let repository =
            MongoCatalogRepository::with_collection(&db, &config.products_collection);

        Self {
            config,
            mongo_client,
            repository,
        }
    }

    pub fn catalog(&self) -> CatalogService<MongoCatalogRepository> {
        CatalogService::new(self.repository.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repository_uses_configured_collection() {
        let config = temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("PRODUCTS_COLLECTION", Some("catalog_items")),
            ],
            Config::from_env,
        )
        .unwrap();
        // Client construction does not contact the server
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();

        let state = AppState::new(config, client);
        assert_eq!(state.repository.collection_name(), "catalog_items");
    }
}
