//! GraphQL schema exposing the same game operations as the REST routes.
//!
//! Unknown ids resolve to `null` together with a `Game not found` error carrying
//! `extensions.code = "NOT_FOUND"`, for `game`, `updateGame` and `removeGame` alike.

mod mutation;
mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::state::SharedState;

pub use self::{mutation::MutationRoot, query::QueryRoot};

/// Greeting returned by the `hello` query.
pub const GRAPHQL_GREETING: &str = "Hello World from GraphQL!";

/// Executable schema with no subscriptions.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the shared state available to every resolver.
pub fn build_schema(state: SharedState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
