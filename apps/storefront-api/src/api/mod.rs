//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::{create_router, health_router};
use tracing::{info, warn};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full application: `/api/*`, OpenAPI viewers, `/health` and `/ready`.
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let router = create_router::<ApiDoc>(
        routes(state),
        &state.config.server,
        &state.config.environment,
    )?
    .merge(health_router(state.config.app))
    .merge(health::router(state.clone()));

    Ok(router)
}

/// Create the catalog index when `MONGODB_CREATE_INDEXES` is set.
///
/// The collection belongs to another service, so a failure here (e.g. a
/// read-only user) is logged and startup continues.
pub async fn ensure_indexes(state: &AppState) {
    if !state.config.create_indexes {
        return;
    }

    match products::init_indexes(state).await {
        Ok(()) => info!(collection = %state.config.collection, "Catalog indexes ensured"),
        Err(e) => warn!(
            collection = %state.config.collection,
            error = %e,
            "Could not create catalog indexes, continuing without them"
        ),
    }
}
