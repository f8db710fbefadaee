use axum::{Router, routing::get};

use crate::state::SharedState;

/// Greeting served on `/`.
pub const ROOT_GREETING: &str = "Hello World!";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Plain text greeting", body = String))
)]
/// Plain text greeting.
pub async fn root() -> &'static str {
    ROOT_GREETING
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(root))
}
