use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
};

use crate::{
    graphql::{AppSchema, build_schema},
    state::SharedState,
};

const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL endpoint, plus the GraphiQL IDE on `GET` when enabled in config.
pub fn router(state: SharedState) -> Router<SharedState> {
    let playground = state.config().playground();
    let schema = build_schema(state);

    let route = if playground {
        post(graphql_handler).get(graphiql)
    } else {
        post(graphql_handler)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(schema)
}

async fn graphql_handler(
    State(schema): State<AppSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
