//! Combinators for `Result` and `Option`, a unit marker, and adapters that turn
//! failing computations into values.
//!
//! ```
//! use express_core::prelude::*;
//!
//! let total = ok::<u32, String>(3)
//!     .filter(|qty| *qty > 0, |_| "empty order".to_string())
//!     .merge(ok::<u32, String>(4), |qty, price| qty * price)
//!     .get();
//! assert_eq!(total, 12);
//! ```

pub mod attempt;
pub mod blank;
pub mod error;
pub mod option;
pub mod result;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use attempt::{
    AttemptResult, run_throwing, run_throwing_any, supply_throwing, supply_throwing_any,
    supply_throwing_if,
};
pub use blank::{BLANK, Blank};
pub use error::{AttemptFailed, ExpressError, ResultError};
pub use option::OptionExt;
pub use result::{FilteredResult, IsType, ProjectToError, ProjectToValue, ResultExt};
pub use telemetry::TraceResult;

pub mod prelude {
    pub use crate::attempt::{
        run_throwing, run_throwing_any, supply_throwing, supply_throwing_any, supply_throwing_if,
    };
    pub use crate::blank::{BLANK, Blank};
    pub use crate::error::{AttemptFailed, ExpressError, ResultError};
    pub use crate::option::{OptionExt, none, some, some_if};
    pub use crate::result::{
        FilteredResult, IsType, ProjectToError, ProjectToValue, ResultExt, error,
        error_default, from_parts, ok, ok_blank, when, when_with,
    };
    pub use crate::telemetry::TraceResult;
}
