use eardrill_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TutorError {
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl TutorError {
    pub fn invalid_state<T: Into<String>>(message: T) -> Self {
        Self::InvalidState(message.into())
    }
}
