use std::error::Error as StdError;

use thiserror::Error;

use crate::player::PlayerId;

/// Reasons a raw command line could not be turned into a VIP command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized command verb `{0}`")]
    UnknownVerb(String),

    #[error("`{verb}` does not accept {found} argument(s)")]
    TokenCount { verb: &'static str, found: usize },

    #[error("invalid day count `{0}`")]
    InvalidDuration(String),
}

/// A durable write or read against the player store failed.
#[derive(Debug, Error)]
#[error("failed to persist vip state for player {player_id}")]
pub struct PersistenceError {
    pub player_id: PlayerId,
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl PersistenceError {
    pub fn new(player_id: PlayerId, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            player_id,
            source: source.into(),
        }
    }
}

/// Everything that can stop a VIP command short of its final state.
#[derive(Debug, Error)]
pub enum VipError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("player `{0}` not found")]
    TargetNotFound(String),

    #[error("{actor} is not allowed to manage vip status")]
    AccessDenied { actor: String },
}
