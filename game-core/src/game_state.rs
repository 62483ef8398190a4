use crate::config::{GameConfig, MissPolicy, Progression};
use crate::content::ContentProvider;
use crate::scoring::{ScoreContext, ScoringEngine};
use game_types::{
    Accuracy, Difficulty, GameError, GameKind, GameStatus, GameSummary, Operation, PointsBreakdown,
    RoundOutcome, SessionState,
};
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, SystemTime};
use tracing::debug;
use uuid::Uuid;

/// How a single guess measured up against the current target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    /// Already tried this exact guess; nothing changes
    Repeat,
    Miss,
    Hit { completes_target: bool },
}

/// The per-game pieces plugged into the shared round engine
pub trait RoundRules {
    type Target: Clone + fmt::Debug;
    type Guess: ?Sized;
    /// Session-wide accumulation (guessed letters, found regions, tallies)
    type Progress: Default + Clone + fmt::Debug;
    type Hint;

    const GAME: GameKind;

    fn judge(
        target: &Self::Target,
        guess: &Self::Guess,
        progress: &mut Self::Progress,
    ) -> Judgement;

    /// Called whenever a target becomes current
    fn start_target(
        _target: &Self::Target,
        _difficulty: Difficulty,
        _progress: &mut Self::Progress,
    ) {
    }

    fn hint(target: &Self::Target, progress: &Self::Progress) -> Self::Hint;

    /// Canonical answer shown to the player
    fn solution(target: &Self::Target) -> String;

    fn fun_fact(_target: &Self::Target) -> Option<String> {
        None
    }

    fn target_len(target: &Self::Target) -> usize {
        Self::solution(target).chars().count()
    }

    fn mastered(_progress: &Self::Progress) -> Vec<String> {
        Vec::new()
    }

    fn operations(_progress: &Self::Progress) -> BTreeMap<Operation, Accuracy> {
        BTreeMap::new()
    }
}

/// One play-through. Every operation consumes the session and hands back the updated one.
#[derive(Debug, Clone)]
pub struct Session<R: RoundRules> {
    pub state: SessionState,
    targets: Vec<R::Target>,
    progress: R::Progress,
    config: GameConfig,
    target_presented_at: SystemTime,
}

impl<R: RoundRules> Session<R> {
    pub fn new(
        config: GameConfig,
        difficulty: Difficulty,
        targets: Vec<R::Target>,
    ) -> Result<Self, GameError> {
        if targets.is_empty() {
            return Err(GameError::ContentExhausted {
                game: R::GAME,
                difficulty,
            });
        }

        let tuning = *config.tuning(difficulty);
        let total_targets = match config.progression {
            Progression::Sequence => targets.len(),
            Progression::Quota => tuning.target_count,
        };
        let lives = tuning.lives.max(1);

        let state = SessionState {
            id: Uuid::new_v4(),
            game: R::GAME,
            difficulty,
            status: GameStatus::Playing,
            score: 0,
            streak: 0,
            best_streak: 0,
            correct_count: 0,
            wrong_count: 0,
            lives,
            max_lives: lives,
            hints_remaining: tuning.hints.remaining(),
            hints_used: 0,
            time_left: tuning.seconds_per_target,
            target_index: 0,
            total_targets,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let mut session = Self {
            state,
            targets,
            progress: R::Progress::default(),
            config,
            target_presented_at: SystemTime::now(),
        };
        if let Some(first) = session.targets.first() {
            R::start_target(first, difficulty, &mut session.progress);
        }

        debug!(
            "Created {} session {} on {} with {} targets",
            R::GAME,
            session.state.id,
            difficulty,
            session.targets.len()
        );
        Ok(session)
    }

    /// Draw targets from a provider and start a session
    pub fn create<P, G>(
        config: GameConfig,
        difficulty: Difficulty,
        provider: &P,
        rng: &mut G,
    ) -> Result<Self, GameError>
    where
        P: ContentProvider<Target = R::Target>,
        G: Rng + ?Sized,
    {
        let tuning = config.tuning(difficulty);
        let count = match config.progression {
            Progression::Sequence => tuning.target_count,
            // enough for every answer the player can give before winning or running out of lives
            Progression::Quota => tuning.target_count + tuning.lives.saturating_sub(1) as usize,
        };
        let targets = provider.draw_set(difficulty, count, rng)?;
        Self::new(config, difficulty, targets)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn targets(&self) -> &[R::Target] {
        &self.targets
    }

    pub fn progress(&self) -> &R::Progress {
        &self.progress
    }

    pub fn current_target(&self) -> Option<&R::Target> {
        if self.is_over() {
            return None;
        }
        self.targets.get(self.state.target_index)
    }

    pub fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    pub fn submit(self, guess: &R::Guess) -> (Self, RoundOutcome) {
        self.submit_at(guess, SystemTime::now())
    }

    /// Judge a guess as if it arrived at `now`
    pub fn submit_at(mut self, guess: &R::Guess, now: SystemTime) -> (Self, RoundOutcome) {
        let Some(target) = self.current_target().cloned() else {
            let outcome = self.unchanged(true);
            return (self, outcome);
        };

        let outcome = match R::judge(&target, guess, &mut self.progress) {
            Judgement::Repeat => self.unchanged(false),
            Judgement::Miss => self.apply_miss(&target, now),
            Judgement::Hit { completes_target } => self.apply_hit(&target, completes_target, now),
        };
        (self, outcome)
    }

    /// Count down one second of the current target's clock
    pub fn tick(self) -> (Self, Option<RoundOutcome>) {
        self.tick_at(SystemTime::now())
    }

    pub fn tick_at(mut self, now: SystemTime) -> (Self, Option<RoundOutcome>) {
        if self.is_over() {
            return (self, None);
        }

        match self.state.time_left {
            None => (self, None),
            Some(left) if left > 1 => {
                self.state.time_left = Some(left - 1);
                (self, None)
            }
            Some(_) => {
                self.state.time_left = Some(0);
                let (session, outcome) = self.handle_timeout_at(now);
                (session, Some(outcome))
            }
        }
    }

    pub fn handle_timeout(self) -> (Self, RoundOutcome) {
        self.handle_timeout_at(SystemTime::now())
    }

    /// Time ran out on the current target. Untimed games ignore this.
    pub fn handle_timeout_at(mut self, now: SystemTime) -> (Self, RoundOutcome) {
        if self.state.time_left.is_none() {
            let outcome = self.unchanged(true);
            return (self, outcome);
        }
        let outcome = self.forfeit(now);
        (self, outcome)
    }

    /// Give up on the current target, for games that allow it
    pub fn skip(mut self) -> (Self, RoundOutcome) {
        if !self.config.skippable {
            let outcome = self.unchanged(true);
            return (self, outcome);
        }
        let outcome = self.forfeit(SystemTime::now());
        (self, outcome)
    }

    /// Spend a hint. `None` once the budget is used up or the session is over.
    pub fn use_hint(mut self) -> (Self, Option<R::Hint>) {
        if self.is_over() {
            return (self, None);
        }

        let next_remaining = match self.state.hints_remaining {
            Some(0) => return (self, None),
            Some(left) => Some(left - 1),
            None => None,
        };
        let hint = self
            .current_target()
            .map(|target| R::hint(target, &self.progress));
        let Some(hint) = hint else {
            return (self, None);
        };

        self.state.hints_remaining = next_remaining;
        self.state.hints_used += 1;
        (self, Some(hint))
    }

    /// Percent of the way to a win
    pub fn progress_percent(&self) -> u32 {
        if self.state.status == GameStatus::Won {
            return 100;
        }
        let total = self.state.total_targets.max(1) as u64;
        let done = match self.config.progression {
            Progression::Sequence => self.state.target_index as u64,
            Progression::Quota => self.state.correct_count as u64,
        };
        (done * 100 / total).min(100) as u32
    }

    /// Final report for the stats tracker, once the session has ended
    pub fn summary(&self) -> Option<GameSummary> {
        if !self.is_over() {
            return None;
        }
        Some(GameSummary {
            game: R::GAME,
            difficulty: self.state.difficulty,
            won: self.state.status == GameStatus::Won,
            score: self.state.score,
            correct_count: self.state.correct_count,
            wrong_count: self.state.wrong_count,
            best_streak: self.state.best_streak,
            mastered: R::mastered(&self.progress),
            operations: R::operations(&self.progress),
        })
    }

    fn apply_hit(
        &mut self,
        target: &R::Target,
        completes_target: bool,
        now: SystemTime,
    ) -> RoundOutcome {
        self.state.correct_count += 1;
        self.state.streak += 1;
        self.state.best_streak = self.state.best_streak.max(self.state.streak);

        let elapsed = now
            .duration_since(self.target_presented_at)
            .unwrap_or(Duration::ZERO);
        let points = ScoringEngine::award(
            &self.config.scoring,
            &ScoreContext {
                streak: self.state.streak,
                target_len: R::target_len(target),
                hints_used: self.state.hints_used,
                elapsed,
            },
        );
        self.state.score += points.total();

        if completes_target {
            let won = match self.config.progression {
                Progression::Sequence => self.state.target_index + 1 >= self.targets.len(),
                Progression::Quota => self.state.correct_count as usize >= self.state.total_targets,
            };
            if won {
                self.finish(GameStatus::Won);
            } else if !self.advance(now) {
                self.finish(GameStatus::Lost);
            }
        }

        RoundOutcome {
            correct: true,
            is_new_guess: true,
            no_op: false,
            points,
            status: self.state.status,
            solution: R::solution(target),
            fun_fact: if completes_target { R::fun_fact(target) } else { None },
            target_completed: completes_target,
        }
    }

    fn apply_miss(&mut self, target: &R::Target, now: SystemTime) -> RoundOutcome {
        self.lose_life();
        // Only lives end the game on a miss: the last target stays put
        if !self.is_over() && self.config.miss_policy == MissPolicy::Advance {
            self.advance(now);
        }
        self.missed(target)
    }

    /// Timeouts and skips: a miss that always moves on, and loses if there is nowhere to go
    fn forfeit(&mut self, now: SystemTime) -> RoundOutcome {
        let Some(target) = self.current_target().cloned() else {
            return self.unchanged(true);
        };

        self.lose_life();
        if !self.is_over() && !self.advance(now) {
            self.finish(GameStatus::Lost);
        }
        self.missed(&target)
    }

    fn lose_life(&mut self) {
        self.state.wrong_count += 1;
        self.state.streak = 0;
        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 {
            self.finish(GameStatus::Lost);
        }
    }

    fn advance(&mut self, now: SystemTime) -> bool {
        let next = self.state.target_index + 1;
        let Some(target) = self.targets.get(next) else {
            return false;
        };

        R::start_target(target, self.state.difficulty, &mut self.progress);
        self.state.target_index = next;
        self.state.hints_used = 0;
        self.state.time_left = self.config.tuning(self.state.difficulty).seconds_per_target;
        self.target_presented_at = now;
        true
    }

    fn finish(&mut self, status: GameStatus) {
        if self.is_over() {
            return;
        }
        self.state.status = status;
        debug!(
            "{} session {} finished as {:?} with score {}",
            R::GAME,
            self.state.id,
            status,
            self.state.score
        );
    }

    fn missed(&self, target: &R::Target) -> RoundOutcome {
        RoundOutcome {
            correct: false,
            is_new_guess: true,
            no_op: false,
            points: PointsBreakdown::default(),
            status: self.state.status,
            solution: R::solution(target),
            fun_fact: None,
            target_completed: false,
        }
    }

    fn unchanged(&self, is_new_guess: bool) -> RoundOutcome {
        RoundOutcome {
            correct: false,
            is_new_guess,
            no_op: true,
            points: PointsBreakdown::default(),
            status: self.state.status,
            solution: self
                .targets
                .get(self.state.target_index)
                .map(R::solution)
                .unwrap_or_default(),
            fun_fact: None,
            target_completed: false,
        }
    }
}
