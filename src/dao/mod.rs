/// Game storage and retrieval operations.
pub mod game_store;
/// Stored model definitions.
pub mod models;
