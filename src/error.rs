use thiserror::Error;

/// Rejection reasons for console commands. A command that returns one of
/// these has not touched any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    DuplicateEntry(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidNumber(String),

    #[error("No entry with id {0}")]
    NotFound(i64),
}

impl ValidationError {
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateEntry(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }
}
