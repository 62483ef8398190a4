use game_types::{Achievement, Difficulty, GameKind, GameSummary, RoundOutcome, SessionId};

#[derive(Debug, Clone)]
pub enum GameEvent {
    SessionStarted {
        session_id: SessionId,
        game: GameKind,
        difficulty: Difficulty,
        total_targets: usize,
    },
    GuessJudged {
        session_id: SessionId,
        outcome: RoundOutcome,
    },
    TargetTimedOut {
        session_id: SessionId,
        outcome: RoundOutcome,
    },
    TargetSkipped {
        session_id: SessionId,
        outcome: RoundOutcome,
    },
    HintUsed {
        session_id: SessionId,
        hints_remaining: Option<u32>,
    },
    SessionFinished {
        session_id: SessionId,
        summary: GameSummary,
        unlocked: Vec<Achievement>,
    },
    SessionAbandoned {
        session_id: SessionId,
        game: GameKind,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::SessionStarted { session_id, .. } => *session_id,
            GameEvent::GuessJudged { session_id, .. } => *session_id,
            GameEvent::TargetTimedOut { session_id, .. } => *session_id,
            GameEvent::TargetSkipped { session_id, .. } => *session_id,
            GameEvent::HintUsed { session_id, .. } => *session_id,
            GameEvent::SessionFinished { session_id, .. } => *session_id,
            GameEvent::SessionAbandoned { session_id, .. } => *session_id,
        }
    }

    /// The session has ended one way or the other and will publish nothing more
    pub fn closes_session(&self) -> bool {
        matches!(
            self,
            GameEvent::SessionFinished { .. } | GameEvent::SessionAbandoned { .. }
        )
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

struct Subscription {
    session: Option<SessionId>,
    handler: Box<dyn GameEventHandler>,
}

/// Fans events out to the presentation layer. Handlers either watch every
/// session or a single one; single-session handlers are dropped once that
/// session finishes or is abandoned.
pub struct GameEventBus {
    subscriptions: Vec<Subscription>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.subscriptions.push(Subscription {
            session: None,
            handler,
        });
    }

    pub fn add_session_handler(
        &mut self,
        session_id: SessionId,
        handler: Box<dyn GameEventHandler>,
    ) {
        self.subscriptions.push(Subscription {
            session: Some(session_id),
            handler,
        });
    }

    pub fn handler_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        let session_id = event.session_id();
        for subscription in &mut self.subscriptions {
            if subscription.session.is_none_or(|id| id == session_id) {
                subscription.handler.handle_event(event.clone());
            }
        }

        if event.closes_session() {
            self.subscriptions
                .retain(|subscription| subscription.session != Some(session_id));
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}
