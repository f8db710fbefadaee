use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::SharedState;

/// Swagger UI and OpenAPI JSON.
pub mod docs;
/// REST game CRUD.
pub mod game;
/// GraphQL endpoint and GraphiQL.
pub mod graphql;
/// Healthcheck.
pub mod health;
/// Greeting on `/`.
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = root::router()
        .merge(health::router())
        .merge(game::router())
        .merge(graphql::router(state.clone()));

    api_router.merge(docs::router()).with_state(state)
}

/// Full application served by the binary: every route plus permissive CORS and HTTP tracing.
pub fn app(state: SharedState) -> Router<()> {
    router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
