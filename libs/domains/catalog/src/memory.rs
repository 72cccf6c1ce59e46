//! In-memory CatalogRepository for tests and local runs

use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{CreateProduct, CreateReview, Product, Review};
use crate::query::{PageWindow, PriceSort, ProductFilter};
use crate::repository::CatalogRepository;

/// Products in insertion order behind a read/write lock.
///
/// Mirrors the MongoDB semantics: case-insensitive category and name
/// matching, price ordering with insertion order as the tie-break.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing products, kept in the given order
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

fn matches(filter: &ProductFilter, product: &Product) -> bool {
    let category_ok = filter
        .category
        .as_ref()
        .map_or(true, |c| c.to_lowercase() == product.category.to_lowercase());

    let search_ok = filter
        .search
        .as_ref()
        .map_or(true, |s| product.name.to_lowercase().contains(&s.to_lowercase()));

    category_ok && search_ok
}

fn window<T: Clone>(items: &[T], window: PageWindow) -> Vec<T> {
    let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
    items.iter().skip(skip).take(limit).cloned().collect()
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let products = self.products.read().await;
        let mut categories: Vec<String> = Vec::new();
        for product in products.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    async fn count_matching(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| matches(filter, p)).count() as u64)
    }

    async fn fetch_page(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        page: PageWindow,
    ) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut matching: Vec<&Product> = products.iter().filter(|p| matches(filter, p)).collect();

        // Stable sort keeps insertion order among equal prices.
        match sort {
            PriceSort::Ascending => matching.sort_by(|a, b| {
                a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
            }),
            PriceSort::Descending => matching.sort_by(|a, b| {
                b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal)
            }),
            PriceSort::None => {}
        }

        Ok(window(&matching, page).into_iter().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn slice_reviews(
        &self,
        product_id: Uuid,
        page: PageWindow,
    ) -> CatalogResult<Option<Vec<Review>>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| window(&p.reviews, page)))
    }

    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn push_review(
        &self,
        product_id: Uuid,
        input: CreateReview,
    ) -> CatalogResult<Option<Review>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            return Ok(None);
        };

        let review = Review::new(input);
        product.reviews.push(review.clone());
        Ok(Some(review))
    }

    async fn pull_review(&self, review_id: Uuid) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        let Some(product) = products
            .iter_mut()
            .find(|p| p.reviews.iter().any(|r| r.id == review_id))
        else {
            return Ok(false);
        };

        product.reviews.retain(|r| r.id != review_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.into(),
            category: category.into(),
            price: Some(price),
            image: format!("https://img.example.com/{name}.png"),
        }
    }

    #[tokio::test]
    async fn test_case_insensitive_matching() {
        let repo = InMemoryCatalogRepository::new();
        repo.insert(input("iPhone Case", "electronics", 15.0)).await.unwrap();
        repo.insert(input("Desk", "furniture", 120.0)).await.unwrap();

        let filter = ProductFilter::new(Some("Electronics".into()), Some("PHONE".into()));
        assert_eq!(repo.count_matching(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_price_ties_keep_insertion_order() {
        let repo = InMemoryCatalogRepository::new();
        let first = repo.insert(input("a", "x", 10.0)).await.unwrap();
        let second = repo.insert(input("b", "x", 10.0)).await.unwrap();
        repo.insert(input("c", "x", 5.0)).await.unwrap();

        let page = repo
            .fetch_page(
                &ProductFilter::default(),
                PriceSort::Descending,
                PageWindow::new(1, 8),
            )
            .await
            .unwrap();

        let ids: Vec<Uuid> = page.iter().map(|p| p.id).collect();
        assert_eq!(&ids[..2], &[first.id, second.id]);
        assert_eq!(page[2].name, "c");
    }

    #[tokio::test]
    async fn test_distinct_categories() {
        let repo = InMemoryCatalogRepository::new();
        repo.insert(input("a", "books", 1.0)).await.unwrap();
        repo.insert(input("b", "toys", 1.0)).await.unwrap();
        repo.insert(input("c", "books", 1.0)).await.unwrap();

        assert_eq!(repo.distinct_categories().await.unwrap(), vec!["books", "toys"]);
    }

    #[tokio::test]
    async fn test_pull_review_only_touches_owner() {
        let repo = InMemoryCatalogRepository::new();
        let a = repo.insert(input("a", "x", 1.0)).await.unwrap();
        let b = repo.insert(input("b", "x", 1.0)).await.unwrap();

        let review = CreateReview {
            username: "ana".into(),
            text: "ok".into(),
        };
        let target = repo.push_review(a.id, review.clone()).await.unwrap().unwrap();
        repo.push_review(a.id, review.clone()).await.unwrap();
        repo.push_review(b.id, review).await.unwrap();

        assert!(repo.pull_review(target.id).await.unwrap());
        assert!(!repo.pull_review(target.id).await.unwrap());

        assert_eq!(repo.find_by_id(a.id).await.unwrap().unwrap().reviews.len(), 1);
        assert_eq!(repo.find_by_id(b.id).await.unwrap().unwrap().reviews.len(), 1);
    }

    #[tokio::test]
    async fn test_slice_reviews_clamps_to_bounds() {
        let repo = InMemoryCatalogRepository::new();
        let product = repo.insert(input("a", "x", 1.0)).await.unwrap();
        for i in 0..5 {
            let review = CreateReview {
                username: format!("user{i}"),
                text: "ok".into(),
            };
            repo.push_review(product.id, review).await.unwrap();
        }

        let second = repo
            .slice_reviews(product.id, PageWindow::new(2, 4))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].username, "user4");

        let third = repo
            .slice_reviews(product.id, PageWindow::new(3, 4))
            .await
            .unwrap()
            .unwrap();
        assert!(third.is_empty());

        assert!(repo
            .slice_reviews(Uuid::now_v7(), PageWindow::new(1, 4))
            .await
            .unwrap()
            .is_none());
    }
}
