use crate::{Difficulty, Operation};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked_at: Option<String>, // ISO 8601 string, set once
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PlayRecord {
    pub played: u32,
    pub won: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DifficultyTally {
    pub easy: PlayRecord,
    pub medium: PlayRecord,
    pub hard: PlayRecord,
}

impl DifficultyTally {
    pub fn get(&self, difficulty: Difficulty) -> &PlayRecord {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut PlayRecord {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Accuracy {
    pub correct: u32,
    pub total: u32,
}

impl Accuracy {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn merge(&mut self, other: &Accuracy) {
        self.correct += other.correct;
        self.total += other.total;
    }
}

/// Lifetime statistics of one game. Persisted as a camelCase JSON blob; every
/// field falls back to its default so blobs written by older builds still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct StatsRecord {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Questions, words or letters judged across all games
    pub total_attempts: u32,
    pub total_correct: u32,
    /// Games won in a row
    pub current_streak: u32,
    pub best_win_streak: u32,
    /// Longest run of correct answers inside a single game
    pub best_answer_streak: u32,
    pub total_score: u32,
    pub high_score: u32,
    pub games_by_difficulty: DifficultyTally,
    pub mastered: BTreeSet<String>,
    pub operation_accuracy: BTreeMap<Operation, Accuracy>,
    pub achievements: Vec<Achievement>,
    pub last_played: Option<String>,
}

impl StatsRecord {
    /// Win rate as a rounded percentage
    pub fn win_rate(&self) -> u32 {
        percentage(self.wins, self.total_games)
    }

    /// Share of correct attempts as a rounded percentage
    pub fn accuracy(&self) -> u32 {
        percentage(self.total_correct, self.total_attempts)
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_unlocked()).count()
    }
}

fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(whole)) * 100.0).round() as u32
}
