//! Error taxonomy. Everything except `Config` is retryable: the scheduler
//! turns it into one de-duplicated chat notification and keeps looping.
//! `Delivery` never propagates past the notifier.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HwPulseError>;

#[derive(Debug, Error)]
pub enum HwPulseError {
    /// Required credential absent at startup. The only fatal variant.
    #[error("config: {0}")]
    Config(String),

    /// Network-level failure or non-success HTTP status on fetch.
    #[error("transport: {0}")]
    Transport(String),

    /// Response body is not valid JSON.
    #[error("decode: {0}")]
    Decode(String),

    /// Decoded body fails structural validation.
    #[error("response shape: {0}")]
    Shape(String),

    /// A homework record could not be turned into a message.
    #[error("parse status: {0}")]
    Interpret(#[from] InterpretError),

    /// Notification transport failed. Logged and swallowed by the notifier.
    #[error("delivery: {0}")]
    Delivery(String),
}

/// Why a single homework record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("homework name is missing or empty")]
    MissingName,
    #[error("homework record has no status key")]
    MissingStatus,
    #[error("undocumented homework status: {0}")]
    UnknownStatus(String),
}

impl HwPulseError {
    /// True for the startup-only variant that must terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HwPulseError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_config_is_fatal() {
        assert!(HwPulseError::Config("x".into()).is_fatal());
        assert!(!HwPulseError::Transport("x".into()).is_fatal());
        assert!(!HwPulseError::Interpret(InterpretError::MissingName).is_fatal());
    }

    #[test]
    fn test_interpret_error_converts() {
        let err: HwPulseError = InterpretError::UnknownStatus("archived".into()).into();
        assert!(err.to_string().contains("archived"));
    }
}
