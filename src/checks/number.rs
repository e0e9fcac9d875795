//! Numeric checks
//!
//! [`OrdChecks`] covers any ordered, displayable subject (integers, floats,
//! chars, anything `PartialOrd + Display`); [`SignChecks`] adds the
//! sign/zero family for the signed primitives, where a zero anchor exists.

use std::fmt::Display;

use crate::check::Check;

/// Comparison checks for ordered subjects.
///
/// # Example
///
/// ```
/// use guardrail::prelude::*;
///
/// let check = Check::new(150)
///     .if_greater_than(100)
///     .if_less_than(0);
///
/// assert_eq!(check.errors(), ["The number is greater than 100"]);
/// ```
pub trait OrdChecks<T>: Sized {
    /// Record an error if the subject is greater than `other`.
    fn if_greater_than(self, other: T) -> Self {
        self.if_greater_than_msg(other, "")
    }

    /// [`OrdChecks::if_greater_than`] with a custom message.
    fn if_greater_than_msg(self, other: T, msg: &str) -> Self;

    /// Record an error if the subject is less than `other`.
    fn if_less_than(self, other: T) -> Self {
        self.if_less_than_msg(other, "")
    }

    /// [`OrdChecks::if_less_than`] with a custom message.
    fn if_less_than_msg(self, other: T, msg: &str) -> Self;

    /// Record an error if the subject equals `other`.
    fn if_equal_to(self, other: T) -> Self {
        self.if_equal_to_msg(other, "")
    }

    /// [`OrdChecks::if_equal_to`] with a custom message.
    fn if_equal_to_msg(self, other: T, msg: &str) -> Self;

    /// Record an error if the subject does not equal `other`.
    fn if_not_equal_to(self, other: T) -> Self {
        self.if_not_equal_to_msg(other, "")
    }

    /// [`OrdChecks::if_not_equal_to`] with a custom message.
    fn if_not_equal_to_msg(self, other: T, msg: &str) -> Self;

    /// Record an error if the subject lies strictly between `start` and
    /// `end`.
    fn if_between(self, start: T, end: T) -> Self {
        self.if_between_msg(start, end, "")
    }

    /// [`OrdChecks::if_between`] with a custom message.
    fn if_between_msg(self, start: T, end: T, msg: &str) -> Self;

    /// Record an error if the subject lies outside `start..=end`.
    fn if_not_between(self, start: T, end: T) -> Self {
        self.if_not_between_msg(start, end, "")
    }

    /// [`OrdChecks::if_not_between`] with a custom message.
    fn if_not_between_msg(self, start: T, end: T, msg: &str) -> Self;
}

impl<T: PartialOrd + Display> OrdChecks<T> for Check<T> {
    fn if_greater_than_msg(mut self, other: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v > other) {
            self.fail_with(|| format!("The number is greater than {other}"), msg);
        }
        self
    }

    fn if_less_than_msg(mut self, other: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v < other) {
            self.fail_with(|| format!("The number is less than {other}"), msg);
        }
        self
    }

    fn if_equal_to_msg(mut self, other: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v == other) {
            self.fail_with(|| format!("The number should not be {other}"), msg);
        }
        self
    }

    fn if_not_equal_to_msg(mut self, other: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v != other) {
            self.fail_with(|| format!("The number should be {other}"), msg);
        }
        self
    }

    fn if_between_msg(mut self, start: T, end: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) if *v > start && *v < end => Some(v.to_string()),
            _ => None,
        };
        if let Some(text) = fired {
            self.fail_with(
                || format!("The number '{text}' is between '{start}' and '{end}'"),
                msg,
            );
        }
        self
    }

    fn if_not_between_msg(mut self, start: T, end: T, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) if *v < start || *v > end => Some(v.to_string()),
            _ => None,
        };
        if let Some(text) = fired {
            self.fail_with(
                || format!("The number '{text}' is not between '{start}' and '{end}'"),
                msg,
            );
        }
        self
    }
}

/// Sign and zero checks for signed numeric subjects.
///
/// # Example
///
/// ```
/// use guardrail::prelude::*;
///
/// let check = Check::new(-3).if_negative();
/// assert_eq!(check.errors(), ["The number is negative"]);
/// ```
pub trait SignChecks: Sized {
    /// Record an error if the number is negative.
    fn if_negative(self) -> Self {
        self.if_negative_msg("")
    }

    /// [`SignChecks::if_negative`] with a custom message.
    fn if_negative_msg(self, msg: &str) -> Self;

    /// Record an error if the number is positive.
    fn if_positive(self) -> Self {
        self.if_positive_msg("")
    }

    /// [`SignChecks::if_positive`] with a custom message.
    fn if_positive_msg(self, msg: &str) -> Self;

    /// Record an error if the number is zero.
    fn if_zero(self) -> Self {
        self.if_zero_msg("")
    }

    /// [`SignChecks::if_zero`] with a custom message.
    fn if_zero_msg(self, msg: &str) -> Self;

    /// Record an error if the number is not zero.
    fn if_not_zero(self) -> Self {
        self.if_not_zero_msg("")
    }

    /// [`SignChecks::if_not_zero`] with a custom message.
    fn if_not_zero_msg(self, msg: &str) -> Self;
}

macro_rules! impl_sign_checks {
    ($($t:ty => $zero:expr),+ $(,)?) => {$(
        impl SignChecks for Check<$t> {
            fn if_negative_msg(mut self, msg: &str) -> Self {
                if self.skip_content_check() {
                    return self;
                }
                if matches!(self.value(), Some(v) if *v < $zero) {
                    self.fail("The number is negative", msg);
                }
                self
            }

            fn if_positive_msg(mut self, msg: &str) -> Self {
                if self.skip_content_check() {
                    return self;
                }
                if matches!(self.value(), Some(v) if *v > $zero) {
                    self.fail("The number is positive", msg);
                }
                self
            }

            fn if_zero_msg(mut self, msg: &str) -> Self {
                if self.skip_content_check() {
                    return self;
                }
                if matches!(self.value(), Some(v) if *v == $zero) {
                    self.fail("The number is zero", msg);
                }
                self
            }

            fn if_not_zero_msg(mut self, msg: &str) -> Self {
                if self.skip_content_check() {
                    return self;
                }
                if matches!(self.value(), Some(v) if *v != $zero) {
                    self.fail("The number is not zero", msg);
                }
                self
            }
        }
    )+};
}

impl_sign_checks!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_greater_than() {
        assert!(Check::new(5).if_greater_than(10).is_valid());
        assert_eq!(
            Check::new(15).if_greater_than(10).errors(),
            ["The number is greater than 10"]
        );
    }

    #[test]
    fn test_if_less_than() {
        assert!(Check::new(15).if_less_than(10).is_valid());
        assert!(Check::new(5).if_less_than(10).has_errors());
    }

    #[test]
    fn test_equality_checks() {
        assert_eq!(
            Check::new(7).if_equal_to(7).errors(),
            ["The number should not be 7"]
        );
        assert_eq!(
            Check::new(6).if_not_equal_to(7).errors(),
            ["The number should be 7"]
        );
        assert!(Check::new(7).if_not_equal_to(7).is_valid());
    }

    #[test]
    fn test_between_is_exclusive() {
        assert!(Check::new(10).if_between(10, 20).is_valid());
        assert!(Check::new(20).if_between(10, 20).is_valid());
        assert_eq!(
            Check::new(15).if_between(10, 20).errors(),
            ["The number '15' is between '10' and '20'"]
        );
    }

    #[test]
    fn test_not_between_is_inclusive() {
        assert!(Check::new(10).if_not_between(10, 20).is_valid());
        assert!(Check::new(20).if_not_between(10, 20).is_valid());
        assert_eq!(
            Check::new(25).if_not_between(10, 20).errors(),
            ["The number '25' is not between '10' and '20'"]
        );
    }

    #[test]
    fn test_sign_checks() {
        assert!(Check::new(-1).if_negative().has_errors());
        assert!(Check::new(1).if_negative().is_valid());
        assert!(Check::new(1).if_positive().has_errors());
        assert!(Check::new(0).if_zero().has_errors());
        assert!(Check::new(2).if_not_zero().has_errors());
        assert!(Check::new(0).if_not_zero().is_valid());
    }

    #[test]
    fn test_sign_checks_on_floats() {
        assert!(Check::new(-0.5_f64).if_negative().has_errors());
        assert!(Check::new(0.0_f64).if_zero().has_errors());
    }

    #[test]
    fn test_custom_message() {
        assert_eq!(
            Check::new(-1).if_negative_msg("must not be negative").errors(),
            ["must not be negative"]
        );
    }

    #[test]
    fn test_absent_subject_skips_numeric_checks() {
        let check = Check::from_option(None::<i32>)
            .if_greater_than(10)
            .if_negative();
        assert!(!check.has_errors());
    }

    #[test]
    fn test_numeric_checks_compose_with_gates() {
        let check = Check::new(15)
            .if_greater_than(10)
            .or_if(|x| *x % 2 == 1);
        assert_eq!(check.error_count(), 2);
    }
}
