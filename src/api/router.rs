//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`, one resource per entity, with the
//! resource names existing clients already call.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/pacientes",
            get(endpoints::patients::list)
                .post(endpoints::patients::create)
                .put(endpoints::patients::update),
        )
        .route(
            "/pacientes/:id",
            get(endpoints::patients::get).delete(endpoints::patients::delete),
        )
        .route(
            "/doctores",
            get(endpoints::doctors::list)
                .post(endpoints::doctors::create)
                .put(endpoints::doctors::update),
        )
        .route(
            "/doctores/:id",
            get(endpoints::doctors::get).delete(endpoints::doctors::delete),
        )
        .route(
            "/citas",
            get(endpoints::appointments::list)
                .post(endpoints::appointments::create)
                .put(endpoints::appointments::update),
        )
        .route(
            "/citas/:id",
            get(endpoints::appointments::get).delete(endpoints::appointments::delete),
        )
        .route(
            "/procedimientos",
            get(endpoints::procedures::list)
                .post(endpoints::procedures::create)
                .put(endpoints::procedures::update),
        )
        .route(
            "/procedimientos/:id",
            get(endpoints::procedures::get).delete(endpoints::procedures::delete),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}
