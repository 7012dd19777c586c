use crate::core::common::ValidationError;
use crate::core::thermal_balance::OpeningsExceedEnvelopeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Input describes a room that cannot exist: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("Error identified during thermal balance calculation: {0}")]
    FailureInCalculation(#[from] OpeningsExceedEnvelopeError),
    #[error("Error while writing out results: {0}")]
    ErrorInOutput(OutputError),
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct OutputError {
    error: anyhow::Error,
}

impl OutputError {
    pub(crate) fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}

impl RoomError {
    /// Whether the error was caused by the user's input rather than by the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, RoomError::ErrorInOutput(_))
    }
}
