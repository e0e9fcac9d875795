//! Per-type check catalogs as extension traits
//!
//! Each trait in this module extends [`Check`](crate::Check) with checks that
//! only make sense for a particular subject type: string shape checks,
//! ordered-number comparisons, collection counts, and (behind the `time`
//! feature) calendar checks.
//!
//! Every method follows one uniform pattern over the core's building blocks:
//! consult [`Check::skip_content_check`](crate::Check::skip_content_check)
//! (so absent subjects and their predicates are left alone), test the
//! subject, and report through [`Check::fail`](crate::Check::fail). Each
//! check has a `*_msg` sibling whose non-empty message replaces the default.
//!
//! # Example
//!
//! ```
//! use guardrail::prelude::*;
//!
//! let check = Check::new(String::from("abc"))
//!     .if_empty()
//!     .if_length_greater_than(10);
//!
//! assert!(check.is_valid());
//! ```

mod collection;
mod number;
mod string;
#[cfg(feature = "time")]
mod time;

pub use collection::CollectionChecks;
pub use number::{OrdChecks, SignChecks};
pub use string::StringChecks;
#[cfg(feature = "time")]
pub use time::TimeChecks;
