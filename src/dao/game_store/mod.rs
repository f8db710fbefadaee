/// In-memory implementation.
pub mod memory;

use uuid::Uuid;

use crate::dao::models::GameEntity;

pub use self::memory::InMemoryGameStore;

/// Abstraction over the keyed collection holding every game.
pub trait GameStore: Send + Sync {
    /// Store a game under its id, replacing any previous record.
    fn insert(&self, game: GameEntity);
    /// Copy of the stored game, if any.
    fn find(&self, id: Uuid) -> Option<GameEntity>;
    /// Snapshot of every stored game.
    fn list(&self) -> Vec<GameEntity>;
    /// Apply `change` to the stored game and return the result, or `None` when the id is unknown.
    fn modify(&self, id: Uuid, change: &mut dyn FnMut(&mut GameEntity)) -> Option<GameEntity>;
    /// Remove a game, returning the record as it was before deletion.
    fn remove(&self, id: Uuid) -> Option<GameEntity>;
    /// Number of stored games.
    fn count(&self) -> usize;
}
