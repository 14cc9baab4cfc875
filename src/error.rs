//! Error types for godtrial
//!
//! Match actions themselves never fail: an invalid action is silently
//! absorbed by the controller. Errors here cover the outer surfaces -
//! the trial driver and the text front end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Trial driver requires the Trial phase")]
    NotInTrial,

    #[error("Trial did not conclude within {0} ticks")]
    TrialStalled(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
