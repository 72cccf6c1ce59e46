use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{CreateProduct, CreateReview, Product, Review};
use crate::query::{PageWindow, PriceSort, ProductFilter};

/// Repository trait for catalog persistence
///
/// Keeps the store's query language out of the service. `Ok(None)` and
/// `Ok(false)` mean "no such document"; the service turns them into
/// not-found errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Distinct category values across all products
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>>;

    /// Number of products matching `filter`, ignoring pagination
    async fn count_matching(&self, filter: &ProductFilter) -> CatalogResult<u64>;

    /// One window of matching products in `sort` order
    async fn fetch_page(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        window: PageWindow,
    ) -> CatalogResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// `reviews[skip .. skip + limit]` of a product, clamped to bounds
    async fn slice_reviews(
        &self,
        product_id: Uuid,
        window: PageWindow,
    ) -> CatalogResult<Option<Vec<Review>>>;

    /// Store a new product under a fresh id
    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product>;

    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Append a review; `None` when the product does not exist
    async fn push_review(
        &self,
        product_id: Uuid,
        input: CreateReview,
    ) -> CatalogResult<Option<Review>>;

    /// Remove a review from whichever product holds it
    async fn pull_review(&self, review_id: Uuid) -> CatalogResult<bool>;
}
