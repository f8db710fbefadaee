use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness along with the number of games held in memory.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let games = state.game_store().count();
    debug!(games, "health check");
    HealthResponse::ok(games)
}
