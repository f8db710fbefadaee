use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::game::{CreateGameRequest, GameSummary, UpdateGameRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// CRUD routes for games.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/game", get(list_games).post(create_game))
        .route(
            "/game/{id}",
            get(get_game).patch(update_game).delete(remove_game),
        )
}

/// Create a game, applying default symbols for omitted fields.
#[utoipa::path(
    post,
    path = "/game",
    tag = "game",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created", body = GameSummary)
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> (StatusCode, Json<GameSummary>) {
    let summary = game_service::create_game(&state, payload);
    (StatusCode::CREATED, Json(summary))
}

/// List every stored game.
#[utoipa::path(
    get,
    path = "/game",
    tag = "game",
    responses((status = 200, description = "All games", body = [GameSummary]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<GameSummary>> {
    Json(game_service::list_games(&state))
}

/// Retrieve a game by its ID.
#[utoipa::path(
    get,
    path = "/game/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game found", body = GameSummary),
        (status = 404, description = "Game not found")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::get_game(&state, &id)?))
}

/// Overwrite the provided fields of a game.
#[utoipa::path(
    patch,
    path = "/game/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game")),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameSummary),
        (status = 404, description = "Game not found")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::update_game(&state, &id, payload)?))
}

/// Delete a game and return it as it was.
#[utoipa::path(
    delete,
    path = "/game/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game deleted", body = GameSummary),
        (status = 404, description = "Game not found")
    )
)]
pub async fn remove_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::remove_game(&state, &id)?))
}
