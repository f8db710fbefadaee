use async_graphql::{ComplexObject, ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dao::models::{GameEntity, GameStatus};

/// Payload used to start a new game. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateGameDto")]
pub struct CreateGameRequest {
    /// Symbol for the human player, `X` when omitted.
    pub human_symbol: Option<String>,
    /// Symbol for the AI player, `O` when omitted.
    pub ai_symbol: Option<String>,
    /// Free-form label shown to players.
    pub label: Option<String>,
}

/// Partial game used for updates. Absent or null fields keep their stored value.
///
/// Only the fields a client chose at creation can change; status, turn and move
/// counter are not writable.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "UpdateGameDto")]
pub struct UpdateGameRequest {
    /// New symbol for the human player.
    pub human_symbol: Option<String>,
    /// New symbol for the AI player.
    pub ai_symbol: Option<String>,
    /// New label.
    pub label: Option<String>,
}

/// Public projection of a game returned by both REST and GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "Game", complex)]
pub struct GameSummary {
    /// Identifier, exposed to GraphQL as an `ID` by a complex field.
    #[graphql(skip)]
    pub id: Uuid,
    /// Current outcome of the game.
    pub status: GameStatus,
    /// Symbol played by the human.
    pub human_symbol: String,
    /// Symbol played by the AI.
    pub ai_symbol: String,
    /// Symbol expected to play next.
    pub next_turn: String,
    /// Number of moves played so far.
    pub move_number: i32,
    /// Symbol of the winner, once there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Free-form label chosen by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[ComplexObject]
impl GameSummary {
    /// Opaque identifier of the game.
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }
}

impl From<GameEntity> for GameSummary {
    fn from(game: GameEntity) -> Self {
        Self {
            id: game.id,
            status: game.status,
            human_symbol: game.human_symbol,
            ai_symbol: game.ai_symbol,
            next_turn: game.next_turn,
            move_number: game.move_number,
            winner: game.winner,
            label: game.label,
        }
    }
}
