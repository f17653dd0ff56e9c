//! # Option: zero-or-one value
//!
//! The container is `std::option::Option`. This module adds the constructors
//! that collapse absent input into `None`, plus the one combinator std orders
//! differently.
//!
//! | operation    | provided by             |
//! |--------------|-------------------------|
//! | peek         | `Option::inspect`       |
//! | or_else      | `Option::unwrap_or`     |
//! | or_else_get  | `Option::unwrap_or_else`|
//! | or           | [`OptionExt::prefer`]   |
//! | filter / map | `Option::filter` / `Option::map` |
//! | flat_map     | `Option::and_then`      |

/// Wraps `value`. An absent input yields `None`, never `Some(None)`.
pub fn some<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Present only when `value` is present and `condition` holds.
pub fn some_if<T>(value: impl Into<Option<T>>, condition: bool) -> Option<T> {
    value.into().filter(|_| condition)
}

pub const fn none<T>() -> Option<T> {
    None
}

pub trait OptionExt<T> {
    /// Returns `other` when it holds a value, otherwise `self`.
    ///
    /// Note the preference is the reverse of [`Option::or`].
    fn prefer(self, other: Option<T>) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn prefer(self, other: Option<T>) -> Option<T> {
        match other {
            Some(value) => Some(value),
            None => self,
        }
    }
}
