//! Error types for ptoplan.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] defined here.  Precondition checks use the
//! [`ensure!`](crate::ensure) convenience macro.

use thiserror::Error;

/// The top-level error type used throughout ptoplan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: out-of-range year, malformed ISO string, ...
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A request exceeded one of the planner's defensive size bounds.
    #[error("{what} ({value}) exceeds the configured limit of {limit}")]
    LimitExceeded {
        /// What was being bounded (e.g. `"PTO budget"`).
        what: &'static str,
        /// The requested value.
        value: usize,
        /// The configured upper bound.
        limit: usize,
    },
}

/// Shorthand `Result` type used throughout ptoplan.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pto_core::{ensure, errors::Error};
/// fn positive(x: i32) -> pto_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
