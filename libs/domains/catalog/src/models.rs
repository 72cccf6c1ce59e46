use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Products returned per page of a listing.
pub const PRODUCTS_PER_PAGE: u64 = 8;

/// Reviews returned per page of a product's reviews.
pub const REVIEWS_PER_PAGE: u64 = 4;

/// Customer review, embedded in its product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub username: String,
    pub text: String,
}

impl Review {
    pub fn new(input: CreateReview) -> Self {
        Self {
            id: Uuid::now_v7(),
            username: input.username,
            text: input.text,
        }
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Time-ordered (v7) id; doubles as insertion order
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub price: f64,
    /// Image URI
    pub image: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Assigns a fresh id; starts with no reviews.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            category: input.category,
            name: input.name,
            price: input.price.unwrap_or_default(),
            image: input.image,
            reviews: Vec::new(),
        }
    }
}

/// DTO for creating a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(required(message = "price is required"), range(min = 0.0))]
    pub price: Option<f64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
}

/// DTO for adding a review
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

/// Query parameters of `GET /products`
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// 1-based page; values below 1 are read as 1
    pub page: Option<i64>,
    /// Exact category, case-insensitive
    pub category: Option<String>,
    /// Case-insensitive substring of the product name
    pub query: Option<String>,
    /// `highest` or `lowest`; anything else leaves the order unsorted
    pub price: Option<String>,
}

/// Query parameters of `GET /products/{id}/reviews`
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReviewListParams {
    pub page: Option<i64>,
}

/// One page of a product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Products matching the filter, across all pages
    pub count: u64,
    /// Every distinct stored category, regardless of filter
    pub categories: Vec<String>,
    pub product_results: Vec<Product>,
}

/// One page of a product's reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewPage {
    pub total_review_count: u64,
    pub reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> CreateProduct {
        CreateProduct {
            name: "Desk Lamp".into(),
            category: "home".into(),
            price: Some(24.5),
            image: "https://img.example.com/lamp.png".into(),
        }
    }

    #[test]
    fn test_create_product_validation() {
        assert!(valid_product().validate().is_ok());

        let missing_price = CreateProduct {
            price: None,
            ..valid_product()
        };
        assert!(missing_price.validate().is_err());

        let negative_price = CreateProduct {
            price: Some(-1.0),
            ..valid_product()
        };
        assert!(negative_price.validate().is_err());

        let empty_name = CreateProduct {
            name: String::new(),
            ..valid_product()
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_then_fail_validation() {
        let input: CreateProduct = serde_json::from_str(r#"{"name":"Desk Lamp"}"#).unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("image"));
    }

    #[test]
    fn test_new_product_has_no_reviews() {
        let product = Product::new(valid_product());
        assert!(product.reviews.is_empty());
        assert_eq!(product.price, 24.5);
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(valid_product());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["_id"], product.id.to_string());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_review_accepts_id_alias() {
        let id = Uuid::now_v7();
        let json = format!(r#"{{"id":"{id}","username":"ana","text":"great"}}"#);
        let review: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(review.id, id);
    }

    #[test]
    fn test_create_review_validation() {
        let review = CreateReview {
            username: "ana".into(),
            text: String::new(),
        };
        assert!(review.validate().is_err());
    }
}
