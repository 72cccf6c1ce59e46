//! Product and review routes

use axum::Router;
use domain_catalog::handlers;

use crate::state::AppState;

/// `/products` and `/reviews`, sharing one service
pub fn routes(state: &AppState) -> Router {
    let service = state.catalog();

    Router::new()
        .nest("/products", handlers::router(service.clone()))
        .nest("/reviews", handlers::reviews_router(service))
}

/// Initialize catalog indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    state.repository.init_indexes().await?;
    Ok(())
}
