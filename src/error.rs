//! The error type produced by failing terminal methods
//!
//! Individual check failures are plain message strings accumulated inside a
//! [`Check`](crate::Check); they only become a [`CheckError`] when a
//! `to_result*` terminal method runs with at least one message on the books.
//! A clean chain never produces an error — terminal methods on zero messages
//! are no-ops.

use std::error::Error as StdError;
use std::fmt;

/// A failed check chain, rendered and ready to hand to a caller.
///
/// Carries the formatted message and, in verbose mode, the label of the
/// offending value (the captured expression plus its type name), so the
/// receiving side can tell which argument was rejected.
///
/// # Example
///
/// ```
/// use guardrail::{Check, CheckError};
///
/// let err = Check::new(-3)
///     .if_msg(|x| *x < 0, "the number is negative")
///     .to_result()
///     .unwrap_err();
///
/// assert!(err.is_aggregate());
/// assert_eq!(err.to_string(), "Errors: 1) the number is negative.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CheckError {
    /// Every accumulated failure, numbered in insertion order.
    Aggregate {
        /// The formatted message body.
        message: String,
        /// The offending value's label, present in verbose mode.
        label: Option<String>,
    },
    /// Only the first accumulated failure.
    First {
        /// The formatted message body.
        message: String,
        /// The offending value's label, present in verbose mode.
        label: Option<String>,
    },
}

impl CheckError {
    /// The formatted message, without the parameter suffix.
    pub fn message(&self) -> &str {
        match self {
            CheckError::Aggregate { message, .. } => message,
            CheckError::First { message, .. } => message,
        }
    }

    /// The offending value's label, when the error was built verbose.
    pub fn label(&self) -> Option<&str> {
        match self {
            CheckError::Aggregate { label, .. } => label.as_deref(),
            CheckError::First { label, .. } => label.as_deref(),
        }
    }

    /// Whether this error aggregates every failure rather than just the
    /// first.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, CheckError::Aggregate { .. })
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(label) = self.label() {
            write!(f, " (parameter '{label}')")?;
        }
        Ok(())
    }
}

impl StdError for CheckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_label() {
        let err = CheckError::Aggregate {
            message: String::from("Errors: 1) A."),
            label: None,
        };
        assert_eq!(err.to_string(), "Errors: 1) A.");
    }

    #[test]
    fn test_display_with_label() {
        let err = CheckError::First {
            message: String::from("Errors: A."),
            label: Some(String::from("age <i32>")),
        };
        assert_eq!(err.to_string(), "Errors: A. (parameter 'age <i32>')");
    }

    #[test]
    fn test_accessors() {
        let err = CheckError::Aggregate {
            message: String::from("Errors: 1) A."),
            label: Some(String::from("x <i32>")),
        };
        assert_eq!(err.message(), "Errors: 1) A.");
        assert_eq!(err.label(), Some("x <i32>"));
        assert!(err.is_aggregate());
    }

    #[test]
    fn test_first_is_not_aggregate() {
        let err = CheckError::First {
            message: String::from("Errors: A."),
            label: None,
        };
        assert!(!err.is_aggregate());
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn StdError> = Box::new(CheckError::First {
            message: String::from("Errors: A."),
            label: None,
        });
        assert_eq!(err.to_string(), "Errors: A.");
    }
}
