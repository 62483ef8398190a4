use crate::config::GameConfig;
use crate::content::{ContentProvider, ProblemGenerator, RegionAtlas, SpellingList, WordBank};
use crate::game_events::{GameEvent, GameEventBus, GameEventHandler};
use crate::game_state::{RoundRules, Session};
use crate::games::{Hangman, MapExplorer, MathQuest, SpellingBee};
use crate::input_validation::InputValidator;
use crate::stats::StatsTracker;
use crate::storage::BlobStore;
use game_types::{Difficulty, GameError, RoundOutcome, SessionState, StatsRecord};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

pub type HangmanDesk<S> = GameDesk<Hangman, WordBank, S>;
pub type MathDesk<S> = GameDesk<MathQuest, ProblemGenerator, S>;
pub type SpellingDesk<S> = GameDesk<SpellingBee, SpellingList, S>;
pub type MapDesk<S> = GameDesk<MapExplorer, RegionAtlas, S>;

/// Hosts one game for the presentation layer: at most one live session, the
/// content it draws from and the stats tracker it reports to. Starting a new
/// session drops the old one, so only the current session's clock ever ticks.
pub struct GameDesk<R: RoundRules, P, S: BlobStore> {
    pub config: GameConfig,
    pub event_bus: GameEventBus,
    provider: P,
    rng: Box<dyn RngCore>,
    active: Option<Session<R>>,
    tracker: StatsTracker<S>,
}

impl<R, P, S> GameDesk<R, P, S>
where
    R: RoundRules,
    P: ContentProvider<Target = R::Target>,
    S: BlobStore,
{
    pub fn new(provider: P, store: S) -> Self {
        Self {
            config: GameConfig::for_game(R::GAME),
            event_bus: GameEventBus::new(),
            provider,
            rng: Box::new(StdRng::from_entropy()),
            active: None,
            tracker: StatsTracker::new(R::GAME, store),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn session(&self) -> Option<&Session<R>> {
        self.active.as_ref()
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.active.as_ref().map(|session| &session.state)
    }

    pub fn stats(&self) -> &StatsRecord {
        self.tracker.stats()
    }

    pub fn tracker(&self) -> &StatsTracker<S> {
        &self.tracker
    }

    /// Start a session, abandoning any game still in progress
    pub fn start(&mut self, difficulty: Difficulty) -> Result<&SessionState, GameError> {
        self.drop_active();

        let session = Session::<R>::create(
            self.config.clone(),
            difficulty,
            &self.provider,
            &mut *self.rng,
        )?;
        self.event_bus.publish(GameEvent::SessionStarted {
            session_id: session.state.id,
            game: R::GAME,
            difficulty,
            total_targets: session.state.total_targets,
        });

        Ok(&self.active.insert(session).state)
    }

    pub fn submit(&mut self, guess: &R::Guess) -> Result<RoundOutcome, GameError> {
        let session = self.active.take().ok_or(GameError::NoActiveSession)?;
        let was_over = session.is_over();

        let (session, outcome) = session.submit(guess);
        if !outcome.no_op {
            self.event_bus.publish(GameEvent::GuessJudged {
                session_id: session.state.id,
                outcome: outcome.clone(),
            });
        }

        self.settle(session, was_over);
        Ok(outcome)
    }

    /// One second of the clock; returns the timeout outcome when time ran out
    pub fn tick(&mut self) -> Result<Option<RoundOutcome>, GameError> {
        let session = self.active.take().ok_or(GameError::NoActiveSession)?;
        let was_over = session.is_over();

        let (session, outcome) = session.tick();
        if let Some(outcome) = &outcome {
            self.event_bus.publish(GameEvent::TargetTimedOut {
                session_id: session.state.id,
                outcome: outcome.clone(),
            });
        }

        self.settle(session, was_over);
        Ok(outcome)
    }

    pub fn use_hint(&mut self) -> Result<Option<R::Hint>, GameError> {
        let session = self.active.take().ok_or(GameError::NoActiveSession)?;

        let (session, hint) = session.use_hint();
        if hint.is_some() {
            self.event_bus.publish(GameEvent::HintUsed {
                session_id: session.state.id,
                hints_remaining: session.state.hints_remaining,
            });
        }

        self.active = Some(session);
        Ok(hint)
    }

    pub fn skip(&mut self) -> Result<RoundOutcome, GameError> {
        let session = self.active.take().ok_or(GameError::NoActiveSession)?;
        let was_over = session.is_over();

        let (session, outcome) = session.skip();
        if !outcome.no_op {
            self.event_bus.publish(GameEvent::TargetSkipped {
                session_id: session.state.id,
                outcome: outcome.clone(),
            });
        }

        self.settle(session, was_over);
        Ok(outcome)
    }

    /// Subscribe a handler to the live session only; it is dropped when that session ends
    pub fn watch_session(&mut self, handler: Box<dyn GameEventHandler>) -> Result<(), GameError> {
        let session_id = self
            .active
            .as_ref()
            .map(|session| session.state.id)
            .ok_or(GameError::NoActiveSession)?;
        self.event_bus.add_session_handler(session_id, handler);
        Ok(())
    }

    /// Leave the current session without recording it
    pub fn abandon(&mut self) -> Result<(), GameError> {
        if self.active.is_none() {
            return Err(GameError::NoActiveSession);
        }
        self.drop_active();
        Ok(())
    }

    fn drop_active(&mut self) {
        let Some(session) = self.active.take() else {
            return;
        };
        if !session.is_over() {
            debug!("Abandoning {} session {}", R::GAME, session.state.id);
            self.event_bus.publish(GameEvent::SessionAbandoned {
                session_id: session.state.id,
                game: R::GAME,
            });
        }
    }

    /// Record the game the first time it reaches a terminal state
    fn settle(&mut self, session: Session<R>, was_over: bool) {
        if !was_over {
            if let Some(summary) = session.summary() {
                let unlocked = self.tracker.record_game(&summary);
                info!(
                    "{} session {} ended (won: {}, score: {}, {} new achievements)",
                    R::GAME,
                    session.state.id,
                    summary.won,
                    summary.score,
                    unlocked.len()
                );
                self.event_bus.publish(GameEvent::SessionFinished {
                    session_id: session.state.id,
                    summary,
                    unlocked,
                });
            }
        }
        self.active = Some(session);
    }
}

impl<S: BlobStore> GameDesk<Hangman, WordBank, S> {
    /// Guess a typed letter
    pub fn guess_letter(&mut self, input: &str) -> Result<RoundOutcome, GameError> {
        let letter = InputValidator::hangman_letter(input)?;
        self.submit(&letter)
    }
}

impl<S: BlobStore> GameDesk<MathQuest, ProblemGenerator, S> {
    /// Answer with the text typed into the answer box
    pub fn answer(&mut self, input: &str) -> Result<RoundOutcome, GameError> {
        let answer = InputValidator::math_answer(input)?;
        self.submit(&answer)
    }
}

impl<S: BlobStore> GameDesk<SpellingBee, SpellingList, S> {
    pub fn spell(&mut self, input: &str) -> Result<RoundOutcome, GameError> {
        let attempt = InputValidator::spelling_attempt(input)?;
        self.submit(attempt)
    }
}

impl<S: BlobStore> GameDesk<MapExplorer, RegionAtlas, S> {
    pub fn click(&mut self, region_id: &str) -> Result<RoundOutcome, GameError> {
        self.submit(region_id)
    }
}
