use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a game as tracked by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// The game is still being played.
    InProgress,
    /// The human player won.
    WonHuman,
    /// The AI player won.
    WonAi,
    /// Nobody won.
    Draw,
}

/// Representation of a game held by a [`GameStore`](crate::dao::game_store::GameStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Stable identifier assigned at creation.
    pub id: Uuid,
    /// Outcome so far, `IN_PROGRESS` at creation.
    pub status: GameStatus,
    /// Symbol played by the human (defaults to `X`).
    pub human_symbol: String,
    /// Symbol played by the AI (defaults to `O`).
    pub ai_symbol: String,
    /// Symbol expected to play next.
    pub next_turn: String,
    /// Moves played so far, starting at 0.
    pub move_number: i32,
    /// Symbol of the winner, once there is one.
    pub winner: Option<String>,
    /// Free-form label chosen by the client.
    pub label: Option<String>,
}
