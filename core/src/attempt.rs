//! # Attempt: bridging failing computations into values
//!
//! A computation "raises" by returning `Err` of any type convertible into
//! [`anyhow::Error`]. The adapters classify that failure against the error
//! type the caller expects: a match becomes the modeled `Err`, anything else
//! escalates as [`AttemptFailed`].
//!
//! Panics are not failures here; they unwind through untouched.

use std::any::{Any, type_name};
use std::fmt::{Debug, Display};

use crate::blank::{BLANK, Blank};
use crate::error::AttemptFailed;

pub type AttemptResult<V, E> = Result<Result<V, E>, AttemptFailed>;

/// Runs `supplier`, capturing failures of type `E` as the modeled error.
///
/// A failure of any other type is returned as [`AttemptFailed`] wrapping the
/// original.
pub fn supply_throwing<E, V, F, X>(supplier: F) -> AttemptResult<V, E>
where
    E: Display + Debug + Send + Sync + 'static,
    F: FnOnce() -> Result<V, X>,
    X: Into<anyhow::Error>,
{
    match supplier() {
        Ok(value) => Ok(Ok(value)),
        Err(raised) => classify::<E>(raised.into()).map(Err),
    }
}

/// [`supply_throwing`] for computations run for effect only.
pub fn run_throwing<E, F, X>(runnable: F) -> AttemptResult<Blank, E>
where
    E: Display + Debug + Send + Sync + 'static,
    F: FnOnce() -> Result<(), X>,
    X: Into<anyhow::Error>,
{
    supply_throwing::<E, _, _, _>(|| runnable().map(|()| BLANK))
}

/// Runs `supplier`, capturing every failure. Cannot escalate.
pub fn supply_throwing_any<V, F, X>(supplier: F) -> Result<V, anyhow::Error>
where
    F: FnOnce() -> Result<V, X>,
    X: Into<anyhow::Error>,
{
    supplier().map_err(|raised| {
        let raised: anyhow::Error = raised.into();
        tracing::debug!(error = %raised, "Captured failure");
        raised
    })
}

pub fn run_throwing_any<F, X>(runnable: F) -> Result<Blank, anyhow::Error>
where
    F: FnOnce() -> Result<(), X>,
    X: Into<anyhow::Error>,
{
    supply_throwing_any(|| runnable().map(|()| BLANK))
}

/// Like [`supply_throwing`], with the expected failures picked by `is_expected`
/// instead of by type.
pub fn supply_throwing_if<V, F, X, P>(
    is_expected: P,
    supplier: F,
) -> AttemptResult<V, anyhow::Error>
where
    F: FnOnce() -> Result<V, X>,
    X: Into<anyhow::Error>,
    P: FnOnce(&anyhow::Error) -> bool,
{
    match supplier() {
        Ok(value) => Ok(Ok(value)),
        Err(raised) => {
            let raised: anyhow::Error = raised.into();
            if is_expected(&raised) {
                tracing::debug!(error = %raised, "Captured expected failure");
                Ok(Err(raised))
            } else {
                tracing::warn!(error = %raised, "Unexpected failure, escalating");
                Err(AttemptFailed::new(raised))
            }
        }
    }
}

fn classify<E>(raised: anyhow::Error) -> Result<E, AttemptFailed>
where
    E: Display + Debug + Send + Sync + 'static,
{
    // Expecting `anyhow::Error` itself means expecting any failure.
    let mut slot = Some(raised);
    let widest = (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<E>>()
        .and_then(Option::take);
    let classified = match (widest, slot) {
        (Some(expected), _) => Ok(expected),
        (None, Some(raised)) => raised.downcast::<E>(),
        (None, None) => Err(anyhow::anyhow!("failure was lost before classification")),
    };

    match classified {
        Ok(expected) => {
            tracing::debug!(
                express.expected = type_name::<E>(),
                error = %expected,
                "Captured expected failure"
            );
            Ok(expected)
        }
        Err(other) => {
            tracing::warn!(
                express.expected = type_name::<E>(),
                error = %other,
                "Unexpected failure, escalating"
            );
            Err(AttemptFailed::new(other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultError;
    use crate::test_support::capture_logs;
    use std::cell::Cell;
    use thiserror::Error;

    #[derive(Error, Debug, PartialEq, Eq)]
    #[error("expected failure")]
    struct ExpectedError;

    #[derive(Error, Debug)]
    #[error("other failure")]
    struct OtherError;

    #[test]
    fn test_supply_throwing_wraps_value() {
        let result = supply_throwing::<ExpectedError, _, _, _>(|| Ok::<_, ExpectedError>(3));
        assert_eq!(result.ok(), Some(Ok(3)));
    }

    #[test]
    fn test_supply_throwing_captures_expected_failure() {
        let result = supply_throwing::<ExpectedError, i32, _, _>(|| Err(ExpectedError));
        assert_eq!(result.ok(), Some(Err(ExpectedError)));
    }

    #[test]
    fn test_supply_throwing_escalates_unexpected_failure() {
        let result = supply_throwing::<ExpectedError, i32, _, _>(|| Err(OtherError));
        let failed = result.expect_err("other failures must escalate");
        assert!(failed.cause().downcast_ref::<OtherError>().is_some());
        assert_eq!(failed.to_string(), "Attempt failed: other failure");
    }

    #[test]
    fn test_supply_throwing_classifies_anyhow_failures() {
        let result = supply_throwing::<ExpectedError, i32, _, _>(|| {
            Err(anyhow::Error::new(ExpectedError))
        });
        assert_eq!(result.ok(), Some(Err(ExpectedError)));
    }

    #[test]
    fn test_run_throwing_returns_blank() {
        let ran = Cell::new(false);
        let result = run_throwing::<ExpectedError, _, _>(|| {
            ran.set(true);
            Ok::<_, ExpectedError>(())
        });
        assert!(ran.get());
        assert_eq!(result.ok(), Some(Ok(BLANK)));

        let result = run_throwing::<ExpectedError, _, _>(|| Err(OtherError));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_throwing_captures_expected_failure() {
        let result = run_throwing::<ExpectedError, _, _>(|| Err(ExpectedError));
        assert_eq!(result.ok(), Some(Err(ExpectedError)));
    }

    #[test]
    fn test_expecting_anyhow_captures_every_failure() {
        let result =
            supply_throwing::<anyhow::Error, i32, _, _>(|| Err(ResultError::new("boom")));
        let captured = result
            .expect("expecting anyhow::Error must not escalate")
            .expect_err("failure is modeled");
        assert!(captured.downcast_ref::<ResultError>().is_some());
        assert_eq!(captured.to_string(), "boom");

        let result =
            supply_throwing::<anyhow::Error, i32, _, _>(|| Err(anyhow::anyhow!("plain")));
        let captured = result
            .expect("expecting anyhow::Error must not escalate")
            .expect_err("failure is modeled");
        assert_eq!(captured.to_string(), "plain");

        let result = run_throwing::<anyhow::Error, _, _>(|| Err(OtherError));
        assert!(matches!(result, Ok(Err(_))));
    }

    #[test]
    fn test_classification_is_logged() {
        let logs = capture_logs(|| {
            let captured = supply_throwing::<ExpectedError, i32, _, _>(|| Err(ExpectedError));
            assert!(matches!(captured, Ok(Err(ExpectedError))));
            let escalated = supply_throwing::<ExpectedError, i32, _, _>(|| Err(OtherError));
            assert!(escalated.is_err());
        });

        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("Captured expected failure"));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Unexpected failure, escalating"));
        assert!(logs.contains("express.expected="));
        assert!(logs.contains("ExpectedError"));
        assert!(logs.contains("error=other failure"));
    }

    #[test]
    fn test_any_variants_never_escalate() {
        let failed = supply_throwing_any::<i32, _, _>(|| Err(OtherError));
        assert_eq!(failed.unwrap_err().to_string(), "other failure");

        assert_eq!(run_throwing_any(|| Ok::<_, ResultError>(())).ok(), Some(BLANK));
        assert!(run_throwing_any(|| Err(ResultError::default())).is_err());
    }

    #[test]
    fn test_supply_throwing_if_uses_predicate() {
        let expected = |err: &anyhow::Error| err.is::<ExpectedError>();

        let captured = supply_throwing_if(expected, || Err::<i32, _>(ExpectedError));
        assert!(matches!(captured, Ok(Err(_))));

        let escalated = supply_throwing_if(expected, || Err::<i32, _>(OtherError));
        assert!(escalated.is_err());
    }
}
