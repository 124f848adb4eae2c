//! Error types for the battle-ai crate

use thiserror::Error;

use crate::battle::Action;

/// Main error type for the battle-ai crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("character names must be distinct, got '{name}' twice")]
    DuplicateCharacter { name: String },

    #[error("character '{name}' is not registered in this battle queue")]
    UnknownCharacter { name: String },

    #[error("battle queue is empty: no character can act")]
    EmptyQueue,

    #[error("battle is already over")]
    BattleOver,

    #[error("{character} cannot perform {action:?} with {sp} SP")]
    IllegalAction {
        character: String,
        action: Action,
        sp: i32,
    },

    #[error("non-terminal state with '{character}' to move has no available actions")]
    NoActionsAvailable { character: String },

    #[error("score for node {node} was never resolved during back-propagation")]
    UnresolvedScore { node: usize },

    #[error("skill decision tree picked a sorcerer attack from inside a sorcerer attack")]
    RecursiveSkill,

    #[error("battle did not finish within {limit} turns")]
    TurnLimitExceeded { limit: usize },

    #[error("invalid action token '{token}' (expected 'A', 'S' or 'X')")]
    InvalidActionToken { token: String },

    #[error("invalid character spec '{input}': {reason}")]
    InvalidCharacterSpec { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
