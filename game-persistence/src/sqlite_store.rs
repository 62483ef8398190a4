use crate::config::PersistenceConfig;
use crate::connection::connect_to_database;
use crate::repositories::BlobRepository;
use game_core::BlobStore;
use game_types::GameError;
use migration::{Migrator, MigratorTrait};
use tokio::runtime::{Builder, Runtime};
use tracing::info;

/// Blocking [`BlobStore`] over a sqlite database.
///
/// Owns a current-thread runtime and drives every query to completion, so it
/// must not be called from inside another tokio runtime.
pub struct SqliteBlobStore {
    runtime: Runtime,
    repository: BlobRepository,
}

impl SqliteBlobStore {
    /// Connect and bring the schema up to date
    pub fn open(config: &PersistenceConfig) -> Result<Self, GameError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(storage_unavailable)?;

        let db = runtime
            .block_on(async {
                let db = connect_to_database(config).await?;
                Migrator::up(&db, None).await?;
                Ok::<_, sea_orm::DbErr>(db)
            })
            .map_err(storage_unavailable)?;

        info!("Opened stats store at {}", config.database_url);
        Ok(Self {
            runtime,
            repository: BlobRepository::new(db),
        })
    }

    pub fn open_from_env() -> Result<Self, GameError> {
        Self::open(&PersistenceConfig::from_env())
    }

    pub fn in_memory() -> Result<Self, GameError> {
        Self::open(&PersistenceConfig::in_memory())
    }

    pub fn keys(&self) -> anyhow::Result<Vec<String>> {
        self.runtime.block_on(self.repository.keys())
    }

    pub fn remove(&self, key: &str) -> anyhow::Result<bool> {
        self.runtime.block_on(self.repository.delete(key))
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.runtime.block_on(self.repository.find(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.runtime.block_on(self.repository.upsert(key, value))
    }
}

fn storage_unavailable(err: impl std::fmt::Display) -> GameError {
    GameError::StorageUnavailable {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::StatsTracker;
    use game_types::{Difficulty, GameKind, GameSummary, StatsRecord};

    fn won_game(game: GameKind, score: u32) -> GameSummary {
        GameSummary {
            game,
            difficulty: Difficulty::Easy,
            won: true,
            score,
            correct_count: 5,
            wrong_count: 0,
            best_streak: 5,
            mastered: vec!["cat".to_string()],
            operations: Default::default(),
        }
    }

    #[test]
    fn test_blob_round_trip() {
        let store = SqliteBlobStore::in_memory().unwrap();

        assert_eq!(store.get("map-stats").unwrap(), None);
        store.set("map-stats", "{}").unwrap();
        assert_eq!(store.get("map-stats").unwrap().as_deref(), Some("{}"));

        assert!(store.remove("map-stats").unwrap());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_tracker_survives_reload() {
        let store = SqliteBlobStore::in_memory().unwrap();

        {
            let mut tracker = StatsTracker::new(GameKind::SpellingBee, &store);
            let unlocked = tracker.record_game(&won_game(GameKind::SpellingBee, 120));
            assert!(unlocked.iter().any(|a| a.id == "first-win" && a.is_unlocked()));
        }

        let tracker = StatsTracker::new(GameKind::SpellingBee, &store);
        assert_eq!(tracker.stats().total_games, 1);
        assert_eq!(tracker.stats().high_score, 120);
        assert!(tracker.stats().mastered.contains("cat"));

        let raw = store
            .get(GameKind::SpellingBee.storage_key())
            .unwrap()
            .unwrap();
        let saved: StatsRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved.wins, 1);
    }

    #[test]
    fn test_games_are_stored_separately() {
        let store = SqliteBlobStore::in_memory().unwrap();

        StatsTracker::new(GameKind::Hangman, &store).record_game(&won_game(GameKind::Hangman, 40));
        StatsTracker::new(GameKind::MathQuest, &store)
            .record_game(&won_game(GameKind::MathQuest, 90));

        assert_eq!(
            store.keys().unwrap(),
            vec!["hangman-stats".to_string(), "mathquest-stats".to_string()]
        );
        let hangman = StatsTracker::new(GameKind::Hangman, &store);
        assert_eq!(hangman.stats().high_score, 40);
    }

    #[test]
    fn test_unreachable_database_is_storage_error() {
        let config = PersistenceConfig::from_url(Some(
            "sqlite:///nonexistent-dir/for/stats.db".to_string(),
        ));
        assert!(matches!(
            SqliteBlobStore::open(&config),
            Err(GameError::StorageUnavailable { .. })
        ));
    }
}
