use thiserror::Error;

pub(crate) const VALUE_ON_ERROR: &str = "Result contains error - Cannot get the success value";
pub(crate) const ERROR_ON_VALUE: &str =
    "Result completed successfully - Cannot get the error value";

/// Faults raised by the library itself, as opposed to modeled domain errors
/// carried in the `Err` slot of a `Result`.
#[derive(Error, Debug)]
pub enum ExpressError {
    /// `from_parts` was asked for a state with both or neither half present.
    #[error("Value and error are both {0} - Cannot determine state of Result")]
    IndeterminateState(&'static str),

    /// A terminal accessor was used on the wrong state.
    #[error("{0}")]
    IllegalState(&'static str),

    #[error("Result holds a `{actual}`, which is not a `{expected}`")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    AttemptFailed(#[from] AttemptFailed),
}

/// Default error model for `error_default()`, when the caller does not care
/// to define one.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ResultError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ResultError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ResultError {
    fn default() -> Self {
        Self::new("Result error.")
    }
}

/// A failure raised during bridging that did not match the expected error type.
///
/// This is a programming fault (the caller assumed the wrong failure type),
/// so it never travels in the modeled `Err` slot.
#[derive(Error, Debug)]
#[error("Attempt failed: {0}")]
pub struct AttemptFailed(#[source] anyhow::Error);

impl AttemptFailed {
    pub fn new(cause: impl Into<anyhow::Error>) -> Self {
        Self(cause.into())
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self(anyhow::Error::msg(message.into()))
    }

    /// The original failure.
    pub fn cause(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn into_cause(self) -> anyhow::Error {
        self.0
    }
}
