//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, NotFoundResponse},
    ErrorResponse, QueryParams,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductListResponse, ProductQuery, ProductResponse, Rate};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the catalog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product),
    components(
        schemas(Product, Rate, ProductListResponse, ProductResponse, ErrorResponse),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Storefront catalog queries")
    )
)]
pub struct ApiDoc;

/// Products router; mount it at `/products`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products, optionally filtered by category and type
///
/// Both filters are case-insensitive exact matches and combine with AND.
/// A repeated parameter keeps its last value.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products (possibly empty)", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let products = service.list_products(query).await?;
    Ok(Json(products.into()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product.into()))
}
