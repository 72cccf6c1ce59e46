//! Catalog Service - pagination, validation and not-found handling

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CreateProduct, CreateReview, Product, ProductPage, Review, ReviewPage, REVIEWS_PER_PAGE,
};
use crate::query::{PageWindow, ProductQuery};
use crate::repository::CatalogRepository;

/// Catalog operations over any [`CatalogRepository`]
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of products plus the total match count and every category.
    ///
    /// Reads run in order: categories, count, window. A page past the first
    /// with nothing in it is [`CatalogError::PageOutOfRange`]; an empty first
    /// page is a normal empty result. A window starting at or past the count
    /// is rejected without reading it.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> CatalogResult<ProductPage> {
        let page = query.page.max(1);
        let categories = self.repository.distinct_categories().await?;
        let count = self.repository.count_matching(&query.filter).await?;

        let window = query.window();
        if page > 1 && window.skip >= count {
            return Err(CatalogError::PageOutOfRange(page));
        }

        let product_results = self
            .repository
            .fetch_page(&query.filter, query.sort, window)
            .await?;

        if page > 1 && product_results.is_empty() {
            return Err(CatalogError::PageOutOfRange(page));
        }

        tracing::debug!(page, count, returned = product_results.len(), "Listed products");
        Ok(ProductPage {
            count,
            categories,
            product_results,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// One page of a product's reviews with the product's total review count
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, product_id: Uuid, page: u64) -> CatalogResult<ReviewPage> {
        let page = page.max(1);
        let product = self.get_product(product_id).await?;
        let total_review_count = product.reviews.len() as u64;

        let window = PageWindow::new(page, REVIEWS_PER_PAGE);
        if page > 1 && window.skip >= total_review_count {
            return Err(CatalogError::PageOutOfRange(page));
        }

        let reviews = self
            .repository
            .slice_reviews(product_id, window)
            .await?
            .ok_or(CatalogError::ProductNotFound(product_id))?;

        if page > 1 && reviews.is_empty() {
            return Err(CatalogError::PageOutOfRange(page));
        }

        Ok(ReviewPage {
            total_review_count,
            reviews,
        })
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        input.validate()?;
        self.repository.insert(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn add_review(
        &self,
        product_id: Uuid,
        input: CreateReview,
    ) -> CatalogResult<Review> {
        input.validate()?;
        self.repository
            .push_review(product_id, input)
            .await?
            .ok_or(CatalogError::ProductNotFound(product_id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_review(&self, review_id: Uuid) -> CatalogResult<()> {
        if !self.repository.pull_review(review_id).await? {
            return Err(CatalogError::ReviewNotFound(review_id));
        }
        Ok(())
    }
}
