use crate::{Difficulty, GameKind};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("no {game} content available for {difficulty} difficulty")]
    ContentExhausted { game: GameKind, difficulty: Difficulty },
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },
    #[error("no active session")]
    NoActiveSession,
}

impl GameError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        GameError::InvalidInput {
            reason: reason.into(),
        }
    }
}
