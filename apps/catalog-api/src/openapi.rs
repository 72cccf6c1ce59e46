//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog with filtered, sorted and paginated listings and reviews",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_catalog::ApiDoc),
        (path = "/api/reviews", api = domain_catalog::ReviewsApiDoc)
    ),
    tags(
        (name = "Products", description = "Product listing and management"),
        (name = "Reviews", description = "Review management")
    )
)]
pub struct ApiDoc;
