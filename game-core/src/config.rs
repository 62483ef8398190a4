use anyhow::{Context, Result};
use game_types::{Difficulty, GameKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables that change with the chosen difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTuning {
    pub lives: u32,
    pub seconds_per_target: Option<u32>, // None means untimed
    pub hints: HintBudget,
    /// Targets to finish, or correct answers to reach for quota games
    pub target_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintBudget {
    Limited(u32),
    Unlimited,
}

impl HintBudget {
    pub fn remaining(&self) -> Option<u32> {
        match self {
            HintBudget::Limited(n) => Some(*n),
            HintBudget::Unlimited => None,
        }
    }
}

/// What happens after a wrong guess that does not end the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    Stay,
    Advance,
}

/// How a session is won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progression {
    /// Complete the last of a pre-drawn sequence of targets
    Sequence,
    /// Reach `target_count` correct answers; a fresh target follows every answer
    Quota,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseAward {
    None,
    Fixed(u32),
    PerLetter(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedBonus {
    pub within_secs: u64,
    pub points: u32,
}

impl SpeedBonus {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.within_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub base: BaseAward,
    pub streak_threshold: u32,
    pub streak_multiplier: u32,
    pub speed_bonus: Option<SpeedBonus>,
    pub no_hint_bonus: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game: GameKind,
    pub easy: DifficultyTuning,
    pub medium: DifficultyTuning,
    pub hard: DifficultyTuning,
    pub miss_policy: MissPolicy,
    pub progression: Progression,
    pub scoring: ScoringRule,
    pub skippable: bool,
}

impl GameConfig {
    /// Built-in tables for each game
    pub fn for_game(game: GameKind) -> Self {
        match game {
            GameKind::Hangman => Self::hangman(),
            GameKind::MathQuest => Self::math_quest(),
            GameKind::SpellingBee => Self::spelling_bee(),
            GameKind::MapExplorer => Self::map_explorer(),
        }
    }

    /// Parse a config override, e.g. one shipped next to the web bundle
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid game config")
    }

    pub fn tuning(&self, difficulty: Difficulty) -> &DifficultyTuning {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn hangman() -> Self {
        let word = |lives| DifficultyTuning {
            lives,
            seconds_per_target: None,
            hints: HintBudget::Limited(0),
            target_count: 1,
        };
        Self {
            game: GameKind::Hangman,
            easy: word(8),
            medium: word(6),
            hard: word(6),
            miss_policy: MissPolicy::Stay,
            progression: Progression::Sequence,
            scoring: ScoringRule {
                base: BaseAward::None,
                streak_threshold: 3,
                streak_multiplier: 0,
                speed_bonus: None,
                no_hint_bonus: None,
            },
            skippable: false,
        }
    }

    pub fn math_quest() -> Self {
        let mission = |lives, seconds, target_count| DifficultyTuning {
            lives,
            seconds_per_target: Some(seconds),
            hints: HintBudget::Limited(0),
            target_count,
        };
        Self {
            game: GameKind::MathQuest,
            easy: mission(5, 30, 10),
            medium: mission(4, 20, 12),
            hard: mission(3, 15, 15),
            miss_policy: MissPolicy::Advance,
            progression: Progression::Quota,
            scoring: ScoringRule {
                base: BaseAward::Fixed(10),
                streak_threshold: 3,
                streak_multiplier: 2,
                speed_bonus: None,
                no_hint_bonus: None,
            },
            skippable: false,
        }
    }

    pub fn spelling_bee() -> Self {
        let round = |lives, target_count| DifficultyTuning {
            lives,
            seconds_per_target: None,
            hints: HintBudget::Unlimited,
            target_count,
        };
        Self {
            game: GameKind::SpellingBee,
            easy: round(4, 8),
            medium: round(3, 10),
            hard: round(3, 12),
            miss_policy: MissPolicy::Stay,
            progression: Progression::Sequence,
            scoring: ScoringRule {
                base: BaseAward::PerLetter(10),
                streak_threshold: 3,
                streak_multiplier: 5,
                speed_bonus: None,
                no_hint_bonus: Some(10),
            },
            skippable: true,
        }
    }

    pub fn map_explorer() -> Self {
        let expedition = |lives, seconds, hints, target_count| DifficultyTuning {
            lives,
            seconds_per_target: Some(seconds),
            hints: HintBudget::Limited(hints),
            target_count,
        };
        Self {
            game: GameKind::MapExplorer,
            easy: expedition(5, 30, 2, 8),
            medium: expedition(4, 20, 1, 12),
            hard: expedition(3, 25, 0, 10),
            miss_policy: MissPolicy::Advance,
            progression: Progression::Sequence,
            scoring: ScoringRule {
                base: BaseAward::Fixed(10),
                streak_threshold: 3,
                streak_multiplier: 2,
                speed_bonus: Some(SpeedBonus {
                    within_secs: 5,
                    points: 5,
                }),
                no_hint_bonus: None,
            },
            skippable: false,
        }
    }
}
