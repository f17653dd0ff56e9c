//! # Result: success or error
//!
//! The container is `std::result::Result`; the enum already guarantees that
//! exactly one half is present. This module adds the constructors and the
//! [`ResultExt`] combinators that std does not ship. Operations std already
//! provides with the same contract are used as-is:
//!
//! | operation        | provided by                  |
//! |------------------|------------------------------|
//! | map / map_err    | `Result::map` / `Result::map_err` |
//! | flat_map_err     | `Result::or_else`            |
//! | or_else          | `Result::or_else`            |
//! | or_else_get      | `Result::unwrap_or_else`     |
//! | peek / on_error  | `Result::inspect` / `Result::inspect_err` |
//! | to_option / or_null | `Result::ok`              |
//! | error_to_option  | `Result::err`                |

use std::any::{Any, type_name};
use std::convert::Infallible;

use crate::blank::{BLANK, Blank};
use crate::error::{ERROR_ON_VALUE, ExpressError, ResultError, VALUE_ON_ERROR};

pub fn ok<V, E>(value: V) -> Result<V, E> {
    Ok(value)
}

/// A success that carries no meaningful value.
pub fn ok_blank<E>() -> Result<Blank, E> {
    Ok(BLANK)
}

pub fn error<V, E>(err: E) -> Result<V, E> {
    Err(err)
}

/// An error holding the default `"Result error."` model.
pub fn error_default<V>() -> Result<V, ResultError> {
    Err(ResultError::default())
}

pub fn when<V, E>(condition: bool, value: V, err: E) -> Result<V, E> {
    if condition { Ok(value) } else { Err(err) }
}

/// Like [`when`], but only the branch that is taken gets evaluated.
pub fn when_with<V, E, FV, FE>(condition: bool, value: FV, err: FE) -> Result<V, E>
where
    FV: FnOnce() -> V,
    FE: FnOnce() -> E,
{
    if condition { Ok(value()) } else { Err(err()) }
}

/// Builds a `Result` from two nullable halves.
///
/// Exactly one half must be present; anything else is a construction fault.
pub fn from_parts<V, E>(
    value: Option<V>,
    error: Option<E>,
) -> Result<Result<V, E>, ExpressError> {
    match (value, error) {
        (Some(value), None) => Ok(Ok(value)),
        (None, Some(error)) => Ok(Err(error)),
        (Some(_), Some(_)) => Err(ExpressError::IndeterminateState("present")),
        (None, None) => Err(ExpressError::IndeterminateState("absent")),
    }
}

/// Outcome of [`ResultExt::filter_throwing`], waiting for its filter error to be
/// mapped into the declared error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredResult<V, S, E> {
    /// The result was already an error before filtering.
    Settled(E),
    /// The filter ran; its failure (if any) is still of type `S`.
    Pending(Result<V, S>),
}

impl<V, S, E> FilteredResult<V, S, E> {
    pub fn map_filter_error<F>(self, mapper: F) -> Result<V, E>
    where
        F: FnOnce(S) -> E,
    {
        match self {
            FilteredResult::Settled(error) => Err(error),
            FilteredResult::Pending(result) => result.map_err(mapper),
        }
    }
}

/// Combinators for `Result` beyond what std provides.
pub trait ResultExt<V, E>: Sized {
    /// Discards the success value, keeping only the fact of success.
    fn map_to_blank(self) -> Result<Blank, E>;

    /// Chains a fallible step. The step may fail with any error convertible
    /// into `E`.
    fn flat_map<S, E2, F>(self, f: F) -> Result<S, E>
    where
        E2: Into<E>,
        F: FnOnce(V) -> Result<S, E2>;

    /// Combines two successes. If either is an error, the first one (checking
    /// `self` first) is returned.
    fn merge<S, R, E2, F>(self, other: Result<S, E2>, f: F) -> Result<R, E>
    where
        E2: Into<E>,
        F: FnOnce(V, S) -> R;

    /// Turns a success into an error when `predicate` rejects the value.
    fn filter<P, F>(self, predicate: P, error_fn: F) -> Result<V, E>
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E;

    fn filter_not<P, F>(self, predicate: P, error_fn: F) -> Result<V, E>
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E;

    /// Runs `body` on the success value; a returned error replaces the success.
    fn filter_with<F>(self, body: F) -> Result<V, E>
    where
        F: FnOnce(&V) -> Option<E>;

    /// Runs a fallible check on the success value. Its failure has its own type
    /// `S` and must be mapped with [`FilteredResult::map_filter_error`].
    fn filter_throwing<S, F>(self, body: F) -> FilteredResult<V, S, E>
    where
        F: FnOnce(&V) -> Result<(), S>;

    fn fold<C, FV, FE>(self, on_value: FV, on_error: FE) -> C
    where
        FV: FnOnce(V) -> C,
        FE: FnOnce(E) -> C;

    /// `true` only for a success whose value satisfies `predicate`.
    fn matches<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool;

    fn consume<FV, FE>(self, on_value: FV, on_error: FE) -> Self
    where
        FV: FnOnce(&V),
        FE: FnOnce(&E);

    /// Converts the error into the failure to raise; meant for use with `?`.
    fn or_throw<S, F>(self, f: F) -> Result<V, S>
    where
        F: FnOnce(E) -> S;

    /// Widens both halves into compatible types.
    fn project<S, R>(self) -> Result<S, R>
    where
        V: Into<S>,
        E: Into<R>;

    /// # Panics
    ///
    /// Panics if the result is an error.
    fn get(self) -> V;

    /// # Panics
    ///
    /// Panics if the result is a success.
    fn get_error(self) -> E;

    fn try_get(self) -> Result<V, ExpressError>;

    fn try_get_error(self) -> Result<E, ExpressError>;

    /// Whichever half is present, type-erased.
    fn get_any(self) -> Box<dyn Any>
    where
        V: Any,
        E: Any;

    fn get_any_as<T>(self) -> Result<T, ExpressError>
    where
        V: Any,
        E: Any,
        T: Any;
}

impl<V, E> ResultExt<V, E> for Result<V, E> {
    fn map_to_blank(self) -> Result<Blank, E> {
        self.map(|_| BLANK)
    }

    fn flat_map<S, E2, F>(self, f: F) -> Result<S, E>
    where
        E2: Into<E>,
        F: FnOnce(V) -> Result<S, E2>,
    {
        match self {
            Ok(value) => f(value).map_err(Into::into),
            Err(error) => Err(error),
        }
    }

    fn merge<S, R, E2, F>(self, other: Result<S, E2>, f: F) -> Result<R, E>
    where
        E2: Into<E>,
        F: FnOnce(V, S) -> R,
    {
        self.flat_map(|first| other.map(|second| f(first, second)))
    }

    fn filter<P, F>(self, predicate: P, error_fn: F) -> Result<V, E>
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(error_fn(&value))
                }
            }
            Err(error) => Err(error),
        }
    }

    fn filter_not<P, F>(self, predicate: P, error_fn: F) -> Result<V, E>
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(&V) -> E,
    {
        self.filter(|value| !predicate(value), error_fn)
    }

    fn filter_with<F>(self, body: F) -> Result<V, E>
    where
        F: FnOnce(&V) -> Option<E>,
    {
        match self {
            Ok(value) => match body(&value) {
                Some(error) => Err(error),
                None => Ok(value),
            },
            Err(error) => Err(error),
        }
    }

    fn filter_throwing<S, F>(self, body: F) -> FilteredResult<V, S, E>
    where
        F: FnOnce(&V) -> Result<(), S>,
    {
        match self {
            Ok(value) => FilteredResult::Pending(body(&value).map(|()| value)),
            Err(error) => FilteredResult::Settled(error),
        }
    }

    fn fold<C, FV, FE>(self, on_value: FV, on_error: FE) -> C
    where
        FV: FnOnce(V) -> C,
        FE: FnOnce(E) -> C,
    {
        match self {
            Ok(value) => on_value(value),
            Err(error) => on_error(error),
        }
    }

    fn matches<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        self.as_ref().is_ok_and(predicate)
    }

    fn consume<FV, FE>(self, on_value: FV, on_error: FE) -> Self
    where
        FV: FnOnce(&V),
        FE: FnOnce(&E),
    {
        self.inspect(on_value).inspect_err(on_error)
    }

    fn or_throw<S, F>(self, f: F) -> Result<V, S>
    where
        F: FnOnce(E) -> S,
    {
        self.map_err(f)
    }

    fn project<S, R>(self) -> Result<S, R>
    where
        V: Into<S>,
        E: Into<R>,
    {
        self.map(Into::into).map_err(Into::into)
    }

    #[track_caller]
    fn get(self) -> V {
        match self {
            Ok(value) => value,
            Err(_) => panic!("{VALUE_ON_ERROR}"),
        }
    }

    #[track_caller]
    fn get_error(self) -> E {
        match self {
            Ok(_) => panic!("{ERROR_ON_VALUE}"),
            Err(error) => error,
        }
    }

    fn try_get(self) -> Result<V, ExpressError> {
        self.map_err(|_| ExpressError::IllegalState(VALUE_ON_ERROR))
    }

    fn try_get_error(self) -> Result<E, ExpressError> {
        match self {
            Ok(_) => Err(ExpressError::IllegalState(ERROR_ON_VALUE)),
            Err(error) => Ok(error),
        }
    }

    fn get_any(self) -> Box<dyn Any>
    where
        V: Any,
        E: Any,
    {
        match self {
            Ok(value) => Box::new(value),
            Err(error) => Box::new(error),
        }
    }

    fn get_any_as<T>(self) -> Result<T, ExpressError>
    where
        V: Any,
        E: Any,
        T: Any,
    {
        let actual = if self.is_ok() { type_name::<V>() } else { type_name::<E>() };
        self.get_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ExpressError::TypeMismatch {
                expected: type_name::<T>(),
                actual,
            })
    }
}

/// Runtime type checks on a type-erased success value.
pub trait IsType<E> {
    /// Narrows the success value to `S`, or fails via `error_fn` when the value
    /// holds another type. An error passes through without calling `error_fn`.
    fn is_type<S, F>(self, error_fn: F) -> Result<S, E>
    where
        S: Any,
        F: FnOnce(&dyn Any) -> E;
}

impl<E> IsType<E> for Result<Box<dyn Any>, E> {
    fn is_type<S, F>(self, error_fn: F) -> Result<S, E>
    where
        S: Any,
        F: FnOnce(&dyn Any) -> E,
    {
        match self {
            Ok(erased) => erased
                .downcast::<S>()
                .map(|narrowed| *narrowed)
                .map_err(|original| error_fn(&*original)),
            Err(error) => Err(error),
        }
    }
}

/// Re-tags a result whose error half cannot exist.
pub trait ProjectToValue<V> {
    fn project_to_value<S>(self) -> Result<V, S>;
}

impl<V> ProjectToValue<V> for Result<V, Infallible> {
    fn project_to_value<S>(self) -> Result<V, S> {
        match self {
            Ok(value) => Ok(value),
            Err(never) => match never {},
        }
    }
}

/// Re-tags a result whose value half cannot exist.
pub trait ProjectToError<E> {
    fn project_to_error<S>(self) -> Result<S, E>;
}

impl<E> ProjectToError<E> for Result<Infallible, E> {
    fn project_to_error<S>(self) -> Result<S, E> {
        match self {
            Ok(never) => match never {},
            Err(error) => Err(error),
        }
    }
}
