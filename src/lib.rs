//! Library crate for tictactoe-back, exposing modules for binaries and integration tests.

/// Runtime configuration loaded from file and environment.
pub mod config;
/// Stored models and the game store.
pub mod dao;
/// Request and response payloads shared by REST and GraphQL.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// GraphQL schema and resolvers.
pub mod graphql;
/// HTTP routes and middleware.
pub mod routes;
/// Business operations behind the routes and resolvers.
pub mod services;
/// Shared application state.
pub mod state;
