use dashmap::DashMap;
use uuid::Uuid;

use crate::dao::{game_store::GameStore, models::GameEntity};

/// Process-local game store backed by a concurrent hash map.
///
/// Iteration order of [`GameStore::list`] follows the map's internal layout and is not stable.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: DashMap<Uuid, GameEntity>,
}

impl InMemoryGameStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for InMemoryGameStore {
    fn insert(&self, game: GameEntity) {
        self.games.insert(game.id, game);
    }

    fn find(&self, id: Uuid) -> Option<GameEntity> {
        self.games.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<GameEntity> {
        self.games
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn modify(&self, id: Uuid, change: &mut dyn FnMut(&mut GameEntity)) -> Option<GameEntity> {
        // The entry guard holds the shard lock for the whole read-modify-write.
        let mut entry = self.games.get_mut(&id)?;
        change(entry.value_mut());
        Some(entry.value().clone())
    }

    fn remove(&self, id: Uuid) -> Option<GameEntity> {
        self.games.remove(&id).map(|(_, game)| game)
    }

    fn count(&self) -> usize {
        self.games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::GameStatus;

    fn game(label: &str) -> GameEntity {
        GameEntity {
            id: Uuid::new_v4(),
            status: GameStatus::InProgress,
            human_symbol: "X".into(),
            ai_symbol: "O".into(),
            next_turn: "X".into(),
            move_number: 0,
            winner: None,
            label: Some(label.into()),
        }
    }

    #[test]
    fn insert_then_find_returns_copy() {
        let store = InMemoryGameStore::new();
        let game = game("a");
        store.insert(game.clone());

        assert_eq!(store.find(game.id), Some(game));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn find_unknown_id_is_none() {
        let store = InMemoryGameStore::new();
        store.insert(game("a"));
        assert!(store.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn modify_applies_change_in_place() {
        let store = InMemoryGameStore::new();
        let game = game("before");
        store.insert(game.clone());

        let updated = store
            .modify(game.id, &mut |stored| stored.label = Some("after".into()))
            .unwrap();

        assert_eq!(updated.label.as_deref(), Some("after"));
        assert_eq!(store.find(game.id).unwrap().label.as_deref(), Some("after"));
    }

    #[test]
    fn modify_unknown_id_does_not_call_change() {
        let store = InMemoryGameStore::new();
        let mut called = false;
        let result = store.modify(Uuid::new_v4(), &mut |_| called = true);

        assert!(result.is_none());
        assert!(!called);
    }

    #[test]
    fn remove_returns_previous_record_once() {
        let store = InMemoryGameStore::new();
        let game = game("gone");
        store.insert(game.clone());

        assert_eq!(store.remove(game.id), Some(game.clone()));
        assert!(store.remove(game.id).is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn list_returns_every_game() {
        let store = InMemoryGameStore::new();
        for label in ["a", "b", "c"] {
            store.insert(game(label));
        }

        let mut labels = store
            .list()
            .into_iter()
            .filter_map(|game| game.label)
            .collect::<Vec<_>>();
        labels.sort();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }
}
