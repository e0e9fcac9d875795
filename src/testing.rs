//! Testing utilities for check chains
//!
//! Assertion macros for tests that exercise [`Check`](crate::Check) chains:
//! [`assert_valid!`](crate::assert_valid) fails the test when a chain has
//! accumulated errors (and shows them), [`assert_invalid!`](crate::assert_invalid)
//! fails when it has not, optionally pinning the expected error count or the
//! exact messages.

/// Assert that a check chain is clean.
///
/// Panics with the accumulated messages if any check has failed.
///
/// # Example
///
/// ```rust
/// use guardrail::{assert_valid, Check};
///
/// let check = Check::new(5).if_(|x| *x > 10);
/// assert_valid!(check);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($check:expr) => {{
        let check = &$check;
        if check.has_errors() {
            panic!("Expected a valid check, got errors: {:?}", check.errors());
        }
    }};
}

/// Assert that a check chain has failed.
///
/// Panics if the chain is clean. The two-argument form also pins the error
/// count, and the bracketed form the exact messages.
///
/// # Example
///
/// ```rust
/// use guardrail::{assert_invalid, Check};
///
/// let check = Check::new(5).if_msg(|x| *x < 10, "too small");
/// assert_invalid!(check);
/// assert_invalid!(check, 1);
/// assert_invalid!(check, ["too small"]);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($check:expr) => {{
        let check = &$check;
        if !check.has_errors() {
            panic!("Expected a failed check, got no errors");
        }
    }};
    ($check:expr, [$($msg:expr),+ $(,)?]) => {{
        let check = &$check;
        let expected: &[&str] = &[$($msg),+];
        if check.errors() != expected {
            panic!(
                "Expected errors {:?}, got {:?}",
                expected,
                check.errors()
            );
        }
    }};
    ($check:expr, $count:expr) => {{
        let check = &$check;
        if check.error_count() != $count {
            panic!(
                "Expected {} errors, got {}: {:?}",
                $count,
                check.error_count(),
                check.errors()
            );
        }
    }};
}
