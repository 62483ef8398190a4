use crate::achievements::catalog;
use crate::storage::BlobStore;
use game_types::{Achievement, GameKind, GameSummary, StatsRecord};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Lifetime stats and achievements of one game, loaded once and saved after
/// every recorded game
pub struct StatsTracker<S: BlobStore> {
    game: GameKind,
    store: S,
    stats: StatsRecord,
}

impl<S: BlobStore> StatsTracker<S> {
    /// Load the stored record, or start fresh if it is missing or unreadable
    pub fn new(game: GameKind, store: S) -> Self {
        let stats = match store.get(game.storage_key()) {
            Ok(Some(blob)) => match serde_json::from_str::<StatsRecord>(&blob) {
                Ok(mut stats) => {
                    merge_catalog(game, &mut stats);
                    stats
                }
                Err(e) => {
                    warn!("Discarding unreadable {} stats: {}", game, e);
                    default_record(game)
                }
            },
            Ok(None) => default_record(game),
            Err(e) => {
                warn!("Failed to load {} stats, starting fresh: {:#}", game, e);
                default_record(game)
            }
        };

        Self { game, store, stats }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn stats(&self) -> &StatsRecord {
        &self.stats
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.stats.achievements
    }

    /// Fold a finished game into the stats and return achievements unlocked by it
    pub fn record_game(&mut self, summary: &GameSummary) -> Vec<Achievement> {
        if summary.game != self.game {
            warn!(
                "Ignoring {} game summary sent to the {} tracker",
                summary.game, self.game
            );
            return Vec::new();
        }

        let now = chrono::Utc::now().to_rfc3339();
        let stats = &mut self.stats;

        stats.total_games += 1;
        stats.total_attempts += summary.correct_count + summary.wrong_count;
        stats.total_correct += summary.correct_count;
        stats.total_score += summary.score;
        stats.high_score = stats.high_score.max(summary.score);
        stats.best_answer_streak = stats.best_answer_streak.max(summary.best_streak);
        stats.last_played = Some(now.clone());
        stats.mastered.extend(summary.mastered.iter().cloned());
        for (operation, accuracy) in &summary.operations {
            stats
                .operation_accuracy
                .entry(*operation)
                .or_default()
                .merge(accuracy);
        }

        let tally = stats.games_by_difficulty.get_mut(summary.difficulty);
        tally.played += 1;
        if summary.won {
            tally.won += 1;
            stats.wins += 1;
            stats.current_streak += 1;
            stats.best_win_streak = stats.best_win_streak.max(stats.current_streak);
        } else {
            stats.losses += 1;
            stats.current_streak = 0;
        }

        // thresholds only see the fully updated counters
        let mut unlocked = Vec::new();
        for def in catalog(self.game) {
            if !def.milestone.reached(stats, summary) {
                continue;
            }
            if let Some(achievement) = stats.achievements.iter_mut().find(|a| a.id == def.id) {
                if achievement.unlocked_at.is_none() {
                    achievement.unlocked_at = Some(now.clone());
                    info!("Unlocked {} achievement: {}", self.game, achievement.name);
                    unlocked.push(achievement.clone());
                }
            }
        }

        debug!(
            "Recorded {} game: won={} score={} ({} total games)",
            self.game, summary.won, summary.score, stats.total_games
        );
        self.save();
        unlocked
    }

    fn save(&self) {
        let blob = match serde_json::to_string(&self.stats) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize {} stats: {}", self.game, e);
                return;
            }
        };
        if let Err(e) = self.store.set(self.game.storage_key(), &blob) {
            warn!("Failed to save {} stats: {:#}", self.game, e);
        }
    }
}

/// A fresh record with every achievement of the game locked
pub fn default_record(game: GameKind) -> StatsRecord {
    StatsRecord {
        achievements: catalog(game).iter().map(|def| def.locked()).collect(),
        ..Default::default()
    }
}

/// Bring a stored record up to date with the current catalog: collapse
/// duplicated ids keeping the first, then append definitions it has never seen
pub fn merge_catalog(game: GameKind, stats: &mut StatsRecord) {
    let mut seen = HashSet::new();
    stats
        .achievements
        .retain(|achievement| seen.insert(achievement.id.clone()));

    for def in catalog(game) {
        if !seen.contains(def.id) {
            stats.achievements.push(def.locked());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;
    use anyhow::anyhow;
    use game_types::{Accuracy, Difficulty, Operation};
    use std::collections::BTreeMap;

    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("disk on fire"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    fn summary(game: GameKind, won: bool, score: u32) -> GameSummary {
        GameSummary {
            game,
            difficulty: Difficulty::Easy,
            won,
            score,
            correct_count: 8,
            wrong_count: if won { 0 } else { 3 },
            best_streak: 8,
            mastered: Vec::new(),
            operations: BTreeMap::new(),
        }
    }

    fn unlocked_ids(achievements: &[Achievement]) -> Vec<&str> {
        achievements.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_fresh_tracker_has_locked_catalog() {
        let tracker = StatsTracker::new(GameKind::SpellingBee, MemoryBlobStore::new());
        assert_eq!(tracker.stats().total_games, 0);
        assert_eq!(tracker.achievements().len(), 12);
        assert_eq!(tracker.stats().unlocked_count(), 0);
    }

    #[test]
    fn test_record_game_updates_counters_and_saves() {
        let store = MemoryBlobStore::new();
        let mut tracker = StatsTracker::new(GameKind::MathQuest, store.clone());

        tracker.record_game(&summary(GameKind::MathQuest, true, 120));
        tracker.record_game(&summary(GameKind::MathQuest, false, 40));

        let stats = tracker.stats();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_win_streak, 1);
        assert_eq!(stats.total_attempts, 19);
        assert_eq!(stats.total_correct, 16);
        assert_eq!(stats.total_score, 160);
        assert_eq!(stats.high_score, 120);
        assert_eq!(stats.games_by_difficulty.easy.played, 2);
        assert_eq!(stats.games_by_difficulty.easy.won, 1);
        assert!(stats.last_played.is_some());

        let saved = store.get("mathquest-stats").unwrap().unwrap();
        let reloaded: StatsRecord = serde_json::from_str(&saved).unwrap();
        assert_eq!(&reloaded, stats);
    }

    #[test]
    fn test_unlocks_are_one_shot() {
        let mut tracker = StatsTracker::new(GameKind::MathQuest, MemoryBlobStore::new());

        let first = tracker.record_game(&summary(GameKind::MathQuest, true, 1000));
        assert_eq!(
            unlocked_ids(&first),
            vec!["first-win", "perfect-easy", "streak-5", "score-500", "score-1000"]
        );
        let stamp = tracker.stats().achievement("score-1000").unwrap().unlocked_at.clone();

        let second = tracker.record_game(&summary(GameKind::MathQuest, true, 1000));
        assert!(second.is_empty());
        assert_eq!(
            tracker.stats().achievement("score-1000").unwrap().unlocked_at,
            stamp
        );
    }

    #[test]
    fn test_operation_tallies_accumulate() {
        let mut tracker = StatsTracker::new(GameKind::MathQuest, MemoryBlobStore::new());
        let mut game = summary(GameKind::MathQuest, false, 0);
        game.best_streak = 0;
        game.operations
            .insert(Operation::Add, Accuracy { correct: 30, total: 32 });

        assert!(tracker.record_game(&game).is_empty());
        let unlocked = tracker.record_game(&game);
        assert_eq!(unlocked_ids(&unlocked), vec!["master-add"]);
        assert_eq!(
            tracker.stats().operation_accuracy[&Operation::Add],
            Accuracy { correct: 60, total: 64 }
        );
    }

    #[test]
    fn test_corrupt_blob_starts_fresh() {
        let store = MemoryBlobStore::with_blob("hangman-stats", "{not json");
        let tracker = StatsTracker::new(GameKind::Hangman, store);
        assert_eq!(tracker.stats(), &default_record(GameKind::Hangman));
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut tracker = StatsTracker::new(GameKind::MapExplorer, BrokenStore);
        let unlocked = tracker.record_game(&summary(GameKind::MapExplorer, true, 50));
        assert_eq!(unlocked_ids(&unlocked)[0], "first-expedition");
        assert_eq!(tracker.stats().wins, 1);
    }

    #[test]
    fn test_merge_keeps_unlocks_and_adds_new_definitions() {
        let mut stats = StatsRecord::default();
        stats.achievements.push(Achievement {
            id: "first-win".to_string(),
            name: "First Victory".to_string(),
            description: "Win your first game".to_string(),
            unlocked_at: Some("2024-01-01T00:00:00Z".to_string()),
        });
        stats.achievements.push(Achievement {
            id: "first-win".to_string(),
            name: "duplicate".to_string(),
            description: String::new(),
            unlocked_at: None,
        });

        merge_catalog(GameKind::Hangman, &mut stats);

        assert_eq!(stats.achievements.len(), 12);
        assert_eq!(stats.achievements[0].name, "First Victory");
        assert!(stats.achievements[0].is_unlocked());
        assert_eq!(stats.unlocked_count(), 1);
    }

    #[test]
    fn test_summary_for_another_game_is_ignored() {
        let mut tracker = StatsTracker::new(GameKind::Hangman, MemoryBlobStore::new());
        assert!(tracker.record_game(&summary(GameKind::MathQuest, true, 10)).is_empty());
        assert_eq!(tracker.stats().total_games, 0);
    }
}
