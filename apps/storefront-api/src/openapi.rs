//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SarTrends Storefront API",
        version = "0.1.0",
        description = "Read-only product catalog for the SarTrends storefront"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Catalog listing and product detail")
    )
)]
pub struct ApiDoc;
