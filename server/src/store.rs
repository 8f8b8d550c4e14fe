use std::collections::HashMap;
use std::sync::Mutex;

use minado_core::{Game, GameId};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("The game store is unavailable")]
    Unavailable,
    #[error("The record changed since it was read")]
    VersionConflict,
}

/// A game record together with the version observed at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct Stored {
    pub version: u64,
    pub game: Game,
}

/// Persistence seam. Implementations must give read-your-writes consistency
/// for a single game after a successful `save`.
///
/// Writes are version-conditioned: a save only lands if the record still has
/// the version the caller observed, which keeps two near-simultaneous moves
/// on the same game from both succeeding.
pub trait GameStore {
    fn load(&self, id: &GameId) -> Result<Option<Stored>, StoreError>;

    /// `expected` is the version returned by `load`, or `None` when the
    /// record must not exist yet. On mismatch nothing is written and
    /// `VersionConflict` is returned. Returns the new version.
    fn save(&self, game: Game, expected: Option<u64>) -> Result<u64, StoreError>;

    fn exists(&self, id: &GameId) -> Result<bool, StoreError>;
}

/// In-memory reference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, Stored>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, id: &GameId) -> Result<Option<Stored>, StoreError> {
        let games = self.games.lock().map_err(|_| StoreError::Unavailable)?;
        Ok(games.get(id).cloned())
    }

    fn save(&self, game: Game, expected: Option<u64>) -> Result<u64, StoreError> {
        let mut games = self.games.lock().map_err(|_| StoreError::Unavailable)?;

        let current = games.get(game.id()).map(|stored| stored.version);
        if current != expected {
            return Err(StoreError::VersionConflict);
        }

        let version = expected.map_or(1, |v| v + 1);
        games.insert(game.id().clone(), Stored { version, game });
        Ok(version)
    }

    fn exists(&self, id: &GameId) -> Result<bool, StoreError> {
        let games = self.games.lock().map_err(|_| StoreError::Unavailable)?;
        Ok(games.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::{Address, Board, Player, PrivateId, PublicId};

    fn sample_game(id: &str) -> Game {
        Game::new(
            GameId(id.into()),
            Board::new(3, 3).unwrap(),
            Player {
                private_id: PrivateId("a".into()),
                public_id: PublicId("a-pub".into()),
                address: Address("a-addr".into()),
            },
        )
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let game = sample_game("ABC123");

        let version = store.save(game.clone(), None).unwrap();
        assert_eq!(version, 1);

        let stored = store.load(game.id()).unwrap().unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.game, game);
        assert!(store.exists(game.id()).unwrap());
    }

    #[test]
    fn load_of_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(&GameId("NOPE".into())).unwrap(), None);
        assert!(!store.exists(&GameId("NOPE".into())).unwrap());
    }

    #[test]
    fn create_conflicts_when_record_exists() {
        let store = MemoryStore::new();
        let game = sample_game("ABC123");

        store.save(game.clone(), None).unwrap();
        assert_eq!(
            store.save(game, None),
            Err(StoreError::VersionConflict)
        );
    }

    #[test]
    fn stale_version_is_rejected_and_nothing_is_written() {
        let store = MemoryStore::new();
        let game = sample_game("ABC123");
        store.save(game.clone(), None).unwrap();

        // Two readers observe version 1; only the first write lands.
        let first = store.load(game.id()).unwrap().unwrap();
        let second = store.load(game.id()).unwrap().unwrap();

        assert_eq!(store.save(first.game, Some(first.version)), Ok(2));
        assert_eq!(
            store.save(second.game, Some(second.version)),
            Err(StoreError::VersionConflict)
        );

        let stored = store.load(game.id()).unwrap().unwrap();
        assert_eq!(stored.version, 2);
    }
}
