use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("unknown {kind} label: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },
}

impl DomainError {
    pub fn invalid_range<T: Into<String>>(message: T) -> Self {
        Self::InvalidRange(message.into())
    }

    pub fn unknown_label<T: Into<String>>(kind: &'static str, label: T) -> Self {
        Self::UnknownLabel {
            kind,
            label: label.into(),
        }
    }
}
