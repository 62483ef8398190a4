use crate::config::{BaseAward, ScoringRule};
use game_types::PointsBreakdown;
use std::time::Duration;

/// What the scorer needs to know about a correct answer
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    /// Streak including the answer being scored
    pub streak: u32,
    /// Letters in the target, for length-scaled awards
    pub target_len: usize,
    pub hints_used: u32,
    /// Time since the target was presented
    pub elapsed: Duration,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for one correct answer under a game's scoring rule
    pub fn award(rule: &ScoringRule, ctx: &ScoreContext) -> PointsBreakdown {
        let base = match rule.base {
            BaseAward::None => 0,
            BaseAward::Fixed(points) => points,
            BaseAward::PerLetter(points) => points.saturating_mul(ctx.target_len as u32),
        };

        let streak_bonus = if ctx.streak >= rule.streak_threshold {
            ctx.streak.saturating_mul(rule.streak_multiplier)
        } else {
            0
        };

        let speed_bonus = match rule.speed_bonus {
            Some(bonus) if ctx.elapsed < bonus.window() => bonus.points,
            _ => 0,
        };

        let no_hint_bonus = match rule.no_hint_bonus {
            Some(points) if ctx.hints_used == 0 => points,
            _ => 0,
        };

        PointsBreakdown {
            base,
            streak_bonus,
            speed_bonus,
            no_hint_bonus,
        }
    }
}
