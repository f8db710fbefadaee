use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    dto::game::{CreateGameRequest, GameSummary, UpdateGameRequest},
    services::game_service,
    state::SharedState,
};

/// Write entry points mirroring `POST`, `PATCH` and `DELETE /game`.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_game(
        &self,
        ctx: &Context<'_>,
        input: CreateGameRequest,
    ) -> Result<GameSummary> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::create_game(state, input))
    }

    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: String,
        input: UpdateGameRequest,
    ) -> Result<Option<GameSummary>> {
        let state = ctx.data::<SharedState>()?;
        game_service::update_game(state, &id, input)
            .map(Some)
            .map_err(|err| err.extend())
    }

    async fn remove_game(&self, ctx: &Context<'_>, id: String) -> Result<Option<GameSummary>> {
        let state = ctx.data::<SharedState>()?;
        game_service::remove_game(state, &id)
            .map(Some)
            .map_err(|err| err.extend())
    }
}
