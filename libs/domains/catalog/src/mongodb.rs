//! MongoDB implementation of CatalogRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, spec::BinarySubtype, Binary, Bson, Document},
    options::{
        Collation, CollationStrength, CountOptions, FindOneOptions, FindOptions, IndexOptions,
    },
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{CreateProduct, CreateReview, Product, Review};
use crate::query::{PageWindow, PriceSort, ProductFilter};
use crate::repository::CatalogRepository;

/// Default collection name
pub const PRODUCTS_COLLECTION: &str = "products";

/// MongoDB implementation of the CatalogRepository
#[derive(Clone)]
pub struct MongoCatalogRepository {
    collection: Collection<Product>,
}

impl MongoCatalogRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, PRODUCTS_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes used by listing, sorting and review deletion
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .collation(collation())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(IndexOptions::builder().name("idx_price".to_string()).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "reviews._id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_review_id".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!(collection = self.collection.name(), "Catalog indexes created successfully");
        Ok(())
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Category equality AND escaped, case-insensitive name regex
    pub(crate) fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }

        if let Some(ref search) = filter.search {
            doc.insert(
                "name",
                doc! { "$regex": regex::escape(search), "$options": "i" },
            );
        }

        doc
    }

    pub(crate) fn sort_doc(sort: PriceSort) -> Document {
        match sort {
            PriceSort::Descending => doc! { "price": -1, "_id": 1 },
            PriceSort::Ascending => doc! { "price": 1, "_id": 1 },
            PriceSort::None => doc! { "_id": 1 },
        }
    }
}

/// English, strength 2: case-insensitive, accent-sensitive
fn collation() -> Collation {
    Collation::builder()
        .locale("en".to_string())
        .strength(CollationStrength::Secondary)
        .build()
}

/// Ids are written by the raw (non human-readable) serializer as generic
/// binary, so filters must match that form.
pub(crate) fn id_bson(id: Uuid) -> Bson {
    Bson::Binary(Binary {
        subtype: BinarySubtype::Generic,
        bytes: id.as_bytes().to_vec(),
    })
}

fn review_doc(review: &Review) -> Document {
    doc! {
        "_id": id_bson(review.id),
        "username": &review.username,
        "text": &review.text,
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn count_matching(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        let options = CountOptions::builder().collation(collation()).build();

        let count = self
            .collection
            .count_documents(Self::build_filter(filter))
            .with_options(options)
            .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn fetch_page(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        window: PageWindow,
    ) -> CatalogResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(Self::sort_doc(sort))
            .skip(window.skip)
            .limit(to_i64(window.limit))
            .collation(collation())
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(filter))
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(skip = window.skip, returned = products.len(), "Fetched product window");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id_bson(id) }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn slice_reviews(
        &self,
        product_id: Uuid,
        window: PageWindow,
    ) -> CatalogResult<Option<Vec<Review>>> {
        let options = FindOneOptions::builder()
            .projection(doc! {
                "reviews": { "$slice": [to_i64(window.skip), to_i64(window.limit)] }
            })
            .build();

        let product = self
            .collection
            .find_one(doc! { "_id": id_bson(product_id) })
            .with_options(options)
            .await?;

        Ok(product.map(|p| p.reviews))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id_bson(id) }).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self, input))]
    async fn push_review(
        &self,
        product_id: Uuid,
        input: CreateReview,
    ) -> CatalogResult<Option<Review>> {
        let review = Review::new(input);

        let result = self
            .collection
            .update_one(
                doc! { "_id": id_bson(product_id) },
                doc! { "$push": { "reviews": review_doc(&review) } },
            )
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        tracing::info!(product_id = %product_id, review_id = %review.id, "Review added");
        Ok(Some(review))
    }

    #[instrument(skip(self))]
    async fn pull_review(&self, review_id: Uuid) -> CatalogResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "reviews._id": id_bson(review_id) },
                doc! { "$pull": { "reviews": { "_id": id_bson(review_id) } } },
            )
            .await?;

        if result.matched_count > 0 {
            tracing::info!(review_id = %review_id, "Review deleted");
        }
        Ok(result.matched_count > 0)
    }
}
