//! # Guardrail
//!
//! > *"Accumulate every failure, report once"*
//!
//! A Rust library for fluent guard clauses and validation chains.
//!
//! ## Philosophy
//!
//! Guard clauses should read like the rule they enforce. A [`Check`] wraps
//! one value and lets you chain predicate checks onto it; every failure is
//! recorded as a message, nothing is raised mid-chain, and a single terminal
//! call at the end either reports every failure at once or stays silent when
//! the value passed.
//!
//! ## Quick Example
//!
//! ```rust
//! use guardrail::prelude::*;
//!
//! fn register(username: &str, age: i32) -> Result<(), CheckError> {
//!     Check::new(username)
//!         .if_empty_or_whitespace()
//!         .if_length_greater_than(20)
//!         .to_result()?;
//!
//!     Check::new(age)
//!         .if_negative()
//!         .if_greater_than(150)
//!         .to_result()?;
//!
//!     Ok(())
//! }
//!
//! assert!(register("ada", 36).is_ok());
//!
//! let err = register("", -1).unwrap_err();
//! assert_eq!(err.to_string(), "Errors: 1) String is empty or whitespace.");
//! ```
//!
//! ## Conditional checks
//!
//! `and_if*` runs only when the previous gated check passed; `or_if*` only
//! when it failed. That lets a chain branch without `if` blocks:
//!
//! ```rust
//! use guardrail::Check;
//!
//! let port = 70000_i64;
//! let check = Check::new(port)
//!     .if_msg(|p| *p <= 0, "port must be positive")
//!     .and_if_msg(|p| *p > 65535, "port is out of range")
//!     .or_if_msg(|p| *p == -1, "-1 is reserved");
//!
//! // The and-branch fired; the or-branch ran afterwards but found nothing.
//! assert_eq!(check.errors(), ["port is out of range"]);
//! ```
//!
//! ## Absent values
//!
//! `Option` subjects enter through [`Check::from_option`]; an absent subject
//! fails validity immediately, and every content check on it is skipped
//! rather than run against nothing:
//!
//! ```rust
//! use guardrail::prelude::*;
//!
//! let nickname: Option<String> = None;
//! let check = Check::from_option(nickname)
//!     .if_none_msg("a nickname is required")
//!     .if_length_greater_than(20); // skipped, no panic
//!
//! assert_eq!(check.errors(), ["a nickname is required"]);
//! ```
//!
//! For more examples, see the `demos/` directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod checks;
pub mod error;
pub mod report;
pub mod testing;

// Re-exports
pub use check::Check;
pub use checks::{CollectionChecks, OrdChecks, SignChecks, StringChecks};
#[cfg(feature = "time")]
pub use checks::TimeChecks;
pub use error::CheckError;
pub use report::{Report, ReportOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::Check;
    #[cfg(feature = "time")]
    pub use crate::checks::TimeChecks;
    pub use crate::checks::{CollectionChecks, OrdChecks, SignChecks, StringChecks};
    pub use crate::error::CheckError;
    pub use crate::report::{Report, ReportOptions};
}
