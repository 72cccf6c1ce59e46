//! Catalog Domain
//!
//! Filtered, sorted, paginated product listings with nested, paginated
//! reviews, backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, parameter parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pagination windows, validation, not-found/out-of-range
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Store access (trait + MongoDB + in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Review, DTOs, page responses
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, MongoCatalogRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let service = CatalogService::new(MongoCatalogRepository::new(&db));
//!
//! let router = axum::Router::new()
//!     .nest("/products", handlers::router(service.clone()))
//!     .nest("/reviews", handlers::reviews_router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use handlers::{ApiDoc, ReviewsApiDoc};
pub use memory::InMemoryCatalogRepository;
pub use models::{
    CreateProduct, CreateReview, Product, ProductListParams, ProductPage, Review,
    ReviewListParams, ReviewPage, PRODUCTS_PER_PAGE, REVIEWS_PER_PAGE,
};
pub use self::mongodb::{MongoCatalogRepository, PRODUCTS_COLLECTION};
pub use query::{PageWindow, PriceSort, ProductFilter, ProductQuery};
pub use repository::CatalogRepository;
pub use service::CatalogService;
