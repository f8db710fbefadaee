use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dao::models::{GameEntity, GameStatus},
    dto::game::{CreateGameRequest, GameSummary, UpdateGameRequest},
    error::ServiceError,
    state::SharedState,
};

const DEFAULT_HUMAN_SYMBOL: &str = "X";
const DEFAULT_AI_SYMBOL: &str = "O";

/// Start a new game, applying default symbols when the request leaves them out.
pub fn create_game(state: &SharedState, request: CreateGameRequest) -> GameSummary {
    let game = build_game(request);
    info!(id = %game.id, label = ?game.label, "game created");
    state.game_store().insert(game.clone());
    game.into()
}

/// Every stored game, in no particular order.
pub fn list_games(state: &SharedState) -> Vec<GameSummary> {
    state
        .game_store()
        .list()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Fetch a single game by id.
pub fn get_game(state: &SharedState, id: &str) -> Result<GameSummary, ServiceError> {
    let id = parse_game_id(id)?;
    state
        .game_store()
        .find(id)
        .map(Into::into)
        .ok_or_else(|| not_found(id))
}

/// Overwrite the provided fields of a stored game and return the merged record.
pub fn update_game(
    state: &SharedState,
    id: &str,
    request: UpdateGameRequest,
) -> Result<GameSummary, ServiceError> {
    let id = parse_game_id(id)?;
    let mut request = Some(request);
    let updated = state
        .game_store()
        .modify(id, &mut |game| {
            if let Some(request) = request.take() {
                merge_update(game, request);
            }
        })
        .ok_or_else(|| not_found(id))?;

    info!(%id, "game updated");
    Ok(updated.into())
}

/// Delete a game permanently, returning it as it was before removal.
pub fn remove_game(state: &SharedState, id: &str) -> Result<GameSummary, ServiceError> {
    let id = parse_game_id(id)?;
    let removed = state.game_store().remove(id).ok_or_else(|| not_found(id))?;

    info!(%id, "game removed");
    Ok(removed.into())
}

fn build_game(request: CreateGameRequest) -> GameEntity {
    let CreateGameRequest {
        human_symbol,
        ai_symbol,
        label,
    } = request;

    let human_symbol = human_symbol.unwrap_or_else(|| DEFAULT_HUMAN_SYMBOL.into());
    let ai_symbol = ai_symbol.unwrap_or_else(|| DEFAULT_AI_SYMBOL.into());

    GameEntity {
        id: Uuid::new_v4(),
        status: GameStatus::InProgress,
        next_turn: human_symbol.clone(),
        human_symbol,
        ai_symbol,
        move_number: 0,
        winner: None,
        label,
    }
}

/// Status, next turn and move number are never written here.
fn merge_update(game: &mut GameEntity, request: UpdateGameRequest) {
    let UpdateGameRequest {
        human_symbol,
        ai_symbol,
        label,
    } = request;

    if let Some(human_symbol) = human_symbol {
        game.human_symbol = human_symbol;
    }
    if let Some(ai_symbol) = ai_symbol {
        game.ai_symbol = ai_symbol;
    }
    if label.is_some() {
        game.label = label;
    }
}

/// Ids that are not UUIDs can never have been issued, so they resolve to "not found".
fn parse_game_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| {
        debug!(id = raw, "game id is not a uuid");
        ServiceError::game_not_found()
    })
}

fn not_found(id: Uuid) -> ServiceError {
    debug!(%id, "game not found");
    ServiceError::game_not_found()
}
