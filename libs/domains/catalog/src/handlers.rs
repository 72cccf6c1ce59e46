//! HTTP handlers for the Catalog API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ErrorResponse, QueryParams, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CreateProduct, CreateReview, Product, ProductListParams, ProductPage, Review,
    ReviewListParams, ReviewPage,
};
use crate::query::{normalize_page, ProductQuery};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the products routes
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        delete_product,
        list_reviews,
        add_review,
    ),
    components(
        schemas(
            Product, Review, CreateProduct, CreateReview, ProductPage, ReviewPage
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product listing and management")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the reviews routes
#[derive(OpenApi)]
#[openapi(
    paths(delete_review),
    tags(
        (name = "Reviews", description = "Review management")
    )
)]
pub struct ReviewsApiDoc;

/// Routes mounted at `/products`
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/{id}/reviews", get(list_reviews).post(add_review))
        .with_state(shared_service)
}

/// Routes mounted at `/reviews`
pub fn reviews_router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    Router::new()
        .route("/{id}", delete(delete_review))
        .with_state(Arc::new(service))
}

/// List products: filter, sort and paginate
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, description = "Malformed query parameters", body = ErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    QueryParams(params): QueryParams<ProductListParams>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(ProductQuery::from(params)).await?;
    Ok(Json(page))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Delete a product and its reviews
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List one page of a product's reviews
#[utoipa::path(
    get,
    path = "/{id}/reviews",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ReviewListParams
    ),
    responses(
        (status = 200, description = "One page of reviews", body = ReviewPage),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
    QueryParams(params): QueryParams<ReviewListParams>,
) -> CatalogResult<Json<ReviewPage>> {
    let page = service.list_reviews(id, normalize_page(params.page)).await?;
    Ok(Json(page))
}

/// Add a review to a product
#[utoipa::path(
    post,
    path = "/{id}/reviews",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review added", body = Review),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_review<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> CatalogResult<impl IntoResponse> {
    let review = service.add_review(id, input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Delete a review from whichever product holds it
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_review<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<StatusCode> {
    service.delete_review(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
