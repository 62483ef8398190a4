use crate::{Accuracy, Operation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum GameKind {
    Hangman,
    MathQuest,
    SpellingBee,
    MapExplorer,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Hangman,
        GameKind::MathQuest,
        GameKind::SpellingBee,
        GameKind::MapExplorer,
    ];

    /// Key under which this game's stats blob is stored
    pub fn storage_key(&self) -> &'static str {
        match self {
            GameKind::Hangman => "hangman-stats",
            GameKind::MathQuest => "mathquest-stats",
            GameKind::SpellingBee => "spellingbee-stats",
            GameKind::MapExplorer => "mapexplorer-stats",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Hangman => "hangman",
            GameKind::MathQuest => "math quest",
            GameKind::SpellingBee => "spelling bee",
            GameKind::MapExplorer => "map explorer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    Idle,    // Reserved, sessions start in Playing
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Counters of one live play-through, safe to hand to the presentation layer.
/// The targets themselves stay inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionState {
    pub id: SessionId,
    pub game: GameKind,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub lives: u32,
    pub max_lives: u32,
    /// `None` when hints are unlimited
    pub hints_remaining: Option<u32>,
    /// Hints taken on the current target
    pub hints_used: u32,
    /// `None` for untimed games
    pub time_left: Option<u32>,
    pub target_index: usize,
    pub total_targets: usize,
    pub created_at: String, // ISO 8601 string
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsBreakdown {
    pub base: u32,
    pub streak_bonus: u32,
    pub speed_bonus: u32,
    pub no_hint_bonus: u32,
}

impl PointsBreakdown {
    pub fn total(&self) -> u32 {
        self.base + self.streak_bonus + self.speed_bonus + self.no_hint_bonus
    }

    pub fn has_streak_bonus(&self) -> bool {
        self.streak_bonus > 0
    }

    pub fn has_speed_bonus(&self) -> bool {
        self.speed_bonus > 0
    }
}

/// Result of a guess, answer, click, timeout or skip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoundOutcome {
    pub correct: bool,
    /// False only when the same hangman letter was already guessed
    pub is_new_guess: bool,
    /// Nothing changed: the session was already over or the guess repeated
    pub no_op: bool,
    pub points: PointsBreakdown,
    pub status: GameStatus,
    /// The canonical answer of the target that was judged
    pub solution: String,
    pub fun_fact: Option<String>,
    pub target_completed: bool,
}

impl RoundOutcome {
    pub fn points_earned(&self) -> u32 {
        self.points.total()
    }
}

/// What a finished session reports to the stats tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameSummary {
    pub game: GameKind,
    pub difficulty: Difficulty,
    pub won: bool,
    pub score: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub best_streak: u32,
    /// Words spelled, words solved or regions found this session
    pub mastered: Vec<String>,
    pub operations: BTreeMap<Operation, Accuracy>,
}
