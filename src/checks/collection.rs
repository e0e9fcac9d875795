//! Collection checks
//!
//! Emptiness, count and membership checks for `Vec` subjects. The
//! predicate-based checks recover from a panicking item predicate the same
//! way the core `if_` combinator does: the check simply does not fire.

use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::check::Check;

/// Checks for collection subjects.
///
/// # Example
///
/// ```
/// use guardrail::prelude::*;
///
/// let check = Check::new(vec![1, 2, 3])
///     .if_empty()
///     .if_count_greater_than(5);
///
/// assert!(check.is_valid());
/// ```
pub trait CollectionChecks<I>: Sized {
    /// Record an error if the collection is empty.
    fn if_empty(self) -> Self {
        self.if_empty_msg("")
    }

    /// [`CollectionChecks::if_empty`] with a custom message.
    fn if_empty_msg(self, msg: &str) -> Self;

    /// Record an error if the collection is not empty.
    fn if_not_empty(self) -> Self {
        self.if_not_empty_msg("")
    }

    /// [`CollectionChecks::if_not_empty`] with a custom message.
    fn if_not_empty_msg(self, msg: &str) -> Self;

    /// Record an error if the collection holds exactly `count` items.
    fn if_count(self, count: usize) -> Self {
        self.if_count_msg(count, "")
    }

    /// [`CollectionChecks::if_count`] with a custom message.
    fn if_count_msg(self, count: usize, msg: &str) -> Self;

    /// Record an error if the collection does not hold exactly `count`
    /// items.
    fn if_not_count(self, count: usize) -> Self {
        self.if_not_count_msg(count, "")
    }

    /// [`CollectionChecks::if_not_count`] with a custom message.
    fn if_not_count_msg(self, count: usize, msg: &str) -> Self;

    /// Record an error if the collection holds more than `count` items.
    fn if_count_greater_than(self, count: usize) -> Self {
        self.if_count_greater_than_msg(count, "")
    }

    /// [`CollectionChecks::if_count_greater_than`] with a custom message.
    fn if_count_greater_than_msg(self, count: usize, msg: &str) -> Self;

    /// Record an error if the collection holds fewer than `count` items.
    fn if_count_less_than(self, count: usize) -> Self {
        self.if_count_less_than_msg(count, "")
    }

    /// [`CollectionChecks::if_count_less_than`] with a custom message.
    fn if_count_less_than_msg(self, count: usize, msg: &str) -> Self;

    /// Record an error if any item matches the condition.
    fn if_any<F>(self, condition: F) -> Self
    where
        F: Fn(&I) -> bool,
    {
        self.if_any_msg(condition, "")
    }

    /// [`CollectionChecks::if_any`] with a custom message.
    fn if_any_msg<F>(self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool;

    /// Record an error if no item matches the condition.
    fn if_not_any<F>(self, condition: F) -> Self
    where
        F: Fn(&I) -> bool,
    {
        self.if_not_any_msg(condition, "")
    }

    /// [`CollectionChecks::if_not_any`] with a custom message.
    fn if_not_any_msg<F>(self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool;

    /// Record an error if every item matches the condition.
    ///
    /// Vacuously fires on an empty collection, the way `Iterator::all`
    /// treats it.
    fn if_all<F>(self, condition: F) -> Self
    where
        F: Fn(&I) -> bool,
    {
        self.if_all_msg(condition, "")
    }

    /// [`CollectionChecks::if_all`] with a custom message.
    fn if_all_msg<F>(self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool;

    /// Record an error if the collection contains `item`.
    fn if_contains(self, item: &I) -> Self
    where
        I: PartialEq + Display,
    {
        self.if_contains_msg(item, "")
    }

    /// [`CollectionChecks::if_contains`] with a custom message.
    fn if_contains_msg(self, item: &I, msg: &str) -> Self
    where
        I: PartialEq + Display;

    /// Record an error if the collection does not contain `item`.
    fn if_not_contains(self, item: &I) -> Self
    where
        I: PartialEq + Display,
    {
        self.if_not_contains_msg(item, "")
    }

    /// [`CollectionChecks::if_not_contains`] with a custom message.
    fn if_not_contains_msg(self, item: &I, msg: &str) -> Self
    where
        I: PartialEq + Display;
}

impl<I> CollectionChecks<I> for Check<Vec<I>> {
    fn if_empty_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.is_empty()) {
            self.fail("The list is empty", msg);
        }
        self
    }

    fn if_not_empty_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if !v.is_empty()) {
            self.fail("The list is not empty", msg);
        }
        self
    }

    fn if_count_msg(mut self, count: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.len() == count) {
            self.fail_with(|| format!("The item count should not be {count}"), msg);
        }
        self
    }

    fn if_not_count_msg(mut self, count: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.len() != count) {
            self.fail_with(|| format!("The item count is not {count}"), msg);
        }
        self
    }

    fn if_count_greater_than_msg(mut self, count: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.len() > count) {
            self.fail_with(|| format!("The item count is greater than {count}"), msg);
        }
        self
    }

    fn if_count_less_than_msg(mut self, count: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.len() < count) {
            self.fail_with(|| format!("The item count is less than {count}"), msg);
        }
        self
    }

    fn if_any_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool,
    {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) => catch_unwind(AssertUnwindSafe(|| v.iter().any(|i| condition(i))))
                .unwrap_or(false),
            None => false,
        };
        if fired {
            self.fail("The list contains a matching item", msg);
        }
        self
    }

    fn if_not_any_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool,
    {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) => catch_unwind(AssertUnwindSafe(|| !v.iter().any(|i| condition(i))))
                .unwrap_or(false),
            None => false,
        };
        if fired {
            self.fail("The list does not contain a matching item", msg);
        }
        self
    }

    fn if_all_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: Fn(&I) -> bool,
    {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) => catch_unwind(AssertUnwindSafe(|| v.iter().all(|i| condition(i))))
                .unwrap_or(false),
            None => false,
        };
        if fired {
            self.fail("All items in the list match the condition", msg);
        }
        self
    }

    fn if_contains_msg(mut self, item: &I, msg: &str) -> Self
    where
        I: PartialEq + Display,
    {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.contains(item)) {
            self.fail_with(|| format!("The list should not contain '{item}'"), msg);
        }
        self
    }

    fn if_not_contains_msg(mut self, item: &I, msg: &str) -> Self
    where
        I: PartialEq + Display,
    {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if !v.contains(item)) {
            self.fail_with(|| format!("The list should contain '{item}'"), msg);
        }
        self
    }
}
