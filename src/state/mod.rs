use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::game_store::{GameStore, InMemoryGameStore},
};

/// Reference-counted handle to the state, cloned into every handler and resolver.
pub type SharedState = Arc<AppState>;

/// Central application state holding the game store and runtime configuration.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] around the given store, wrapped in an [`Arc`] so it can be
    /// cloned cheaply into handlers.
    pub fn new(game_store: Arc<dyn GameStore>, config: AppConfig) -> SharedState {
        Arc::new(Self { game_store, config })
    }

    /// State backed by a fresh, empty in-memory store and default configuration.
    pub fn in_memory() -> SharedState {
        Self::new(Arc::new(InMemoryGameStore::new()), AppConfig::default())
    }

    /// Handle to the installed game store.
    pub fn game_store(&self) -> &dyn GameStore {
        self.game_store.as_ref()
    }

    /// Configuration the server was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
