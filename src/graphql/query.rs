use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    dto::game::GameSummary, graphql::GRAPHQL_GREETING, services::game_service, state::SharedState,
};

/// Read-only entry points.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Static greeting, handy as a liveness probe for GraphQL clients.
    async fn hello(&self) -> String {
        GRAPHQL_GREETING.to_owned()
    }

    /// Every stored game, in no particular order.
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<GameSummary>> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::list_games(state))
    }

    /// A single game, or `null` with a `Game not found` error.
    async fn game(&self, ctx: &Context<'_>, id: String) -> Result<Option<GameSummary>> {
        let state = ctx.data::<SharedState>()?;
        game_service::get_game(state, &id)
            .map(Some)
            .map_err(|err| err.extend())
    }
}
