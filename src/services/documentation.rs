use utoipa::OpenApi;

/// OpenAPI document covering every REST route and payload.
#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the REST surface.
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::healthcheck,
        crate::routes::game::create_game,
        crate::routes::game::list_games,
        crate::routes::game::get_game,
        crate::routes::game::update_game,
        crate::routes::game::remove_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
            crate::dto::game::GameSummary,
            crate::dao::models::GameStatus,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "game", description = "Game CRUD operations"),
    )
)]
pub struct ApiDoc;
