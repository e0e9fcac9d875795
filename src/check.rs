//! The `Check` type: a fluent chain of guard clauses over a single value
//!
//! A [`Check`] wraps one subject value and accumulates error messages as
//! predicate checks are chained onto it. Nothing is raised while the chain is
//! being built; the accumulated messages are consumed by the terminal methods
//! ([`Check::to_result`], [`Check::render`], and friends), which delegate
//! formatting to the [report](crate::report) module.
//!
//! # Quick example
//!
//! ```
//! use guardrail::Check;
//!
//! let check = Check::new(5)
//!     .if_msg(|x| *x < 10, "the number is too small")
//!     .if_msg(|x| *x % 2 == 0, "the number is even");
//!
//! assert!(!check.is_valid());
//! assert_eq!(check.error_count(), 1);
//! assert_eq!(check.render().unwrap(), "Errors: 1) the number is too small.");
//! ```
//!
//! # Gating
//!
//! `if_`/`if_not` are independent checks. `and_if`/`and_if_not` run only when
//! the previous gated check passed; `or_if`/`or_if_not` run only when it
//! failed:
//!
//! ```
//! use guardrail::Check;
//!
//! // The primary check fails, so the `or_if` fallback runs too.
//! let check = Check::new("sk-live")
//!     .if_not_msg(|s| s.starts_with("pk-"), "not a public key")
//!     .or_if_msg(|s| s.starts_with("sk-"), "secret keys are not accepted here");
//!
//! assert_eq!(check.error_count(), 2);
//! ```
//!
//! # Absent subjects
//!
//! An absent subject (`None`) fails validity up front and disables every
//! content check; only [`Check::if_none`] / [`Check::if_some`] can add
//! messages for it. Predicates are never invoked on an absent subject.
//!
//! ```
//! use guardrail::Check;
//!
//! let check = Check::from_option(None::<String>)
//!     .if_none()
//!     .if_(|s| s.len() > 3); // skipped, predicate untouched
//!
//! assert_eq!(check.errors(), ["The value is none"]);
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::CheckError;
use crate::report::{Report, ReportOptions};

/// A fluent validation session over a single subject value.
///
/// Combinators take `self` and return it, so checks chain left to right.
/// Terminal methods borrow `&self` and may be called repeatedly; the session
/// is only reset by [`Check::clear`].
///
/// The subject is stored as an `Option<T>`: `None` is the absent ("null")
/// representation. Use [`Check::new`] for values that are always present and
/// [`Check::from_option`] at nullable boundaries.
#[derive(Debug, Clone)]
pub struct Check<T> {
    value: Option<T>,
    is_valid: bool,
    gate_open: bool,
    messages: Vec<String>,
    label: String,
    location: Option<String>,
}

impl<T> Check<T> {
    /// Start a check chain over a present subject.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::new(42);
    /// assert!(check.is_valid());
    /// assert!(!check.has_errors());
    /// ```
    pub fn new(value: T) -> Self {
        Self::from_option(Some(value))
    }

    /// Start a check chain over a possibly absent subject.
    ///
    /// An absent subject starts invalid (so [`Check::if_none`] can report it)
    /// but carries no message until a null check runs. Content checks are
    /// disabled for the whole session.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::from_option(None::<i32>);
    /// assert!(!check.is_valid());
    /// assert_eq!(check.error_count(), 0);
    /// ```
    pub fn from_option(value: Option<T>) -> Self {
        let is_valid = value.is_some();
        Check {
            value,
            is_valid,
            gate_open: true,
            messages: Vec::new(),
            label: std::any::type_name::<T>().to_string(),
            location: None,
        }
    }

    /// Attach the textual expression the subject came from.
    ///
    /// The label is combined with the subject's type name and shows up in
    /// verbose reports as the offending-parameter identifier. The [`check!`]
    /// macro captures it automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::new(3).with_label("user.age");
    /// assert!(check.label().starts_with("user.age <"));
    /// ```
    ///
    /// [`check!`]: crate::check!
    pub fn with_label(mut self, expression: impl AsRef<str>) -> Self {
        self.label = format!(
            "{} <{}>",
            expression.as_ref(),
            std::any::type_name::<T>()
        );
        self
    }

    /// Attach the source location the subject was checked at.
    ///
    /// Only the file's final path component is kept. Used by verbose reports;
    /// the [`check!`] macro captures it automatically.
    ///
    /// [`check!`]: crate::check!
    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        let file = file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file);
        self.location = Some(format!("in {file}:line {line}"));
        self
    }

    // ------------------------------------------------------------------
    // Null checks
    // ------------------------------------------------------------------

    /// Record an error if the subject is absent.
    ///
    /// Always re-opens the gate, so it can head a chain.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::from_option(None::<String>).if_none();
    /// assert_eq!(check.errors(), ["The value is none"]);
    /// ```
    pub fn if_none(self) -> Self {
        self.if_none_msg("")
    }

    /// [`Check::if_none`] with a custom message.
    pub fn if_none_msg(mut self, msg: &str) -> Self {
        self.gate_open = true;
        if self.value.is_none() {
            self.fail("The value is none", msg);
        }
        self
    }

    /// Record an error if the subject is present.
    ///
    /// The mirror of [`Check::if_none`], for values that are required to be
    /// absent. Always re-opens the gate.
    pub fn if_some(self) -> Self {
        self.if_some_msg("")
    }

    /// [`Check::if_some`] with a custom message.
    pub fn if_some_msg(mut self, msg: &str) -> Self {
        self.gate_open = true;
        if self.value.is_some() {
            self.fail("The value is not none", msg);
        }
        self
    }

    // ------------------------------------------------------------------
    // Predicate combinators
    // ------------------------------------------------------------------

    /// Record an error if the condition holds.
    ///
    /// Skipped outright when the subject is absent. A panicking condition is
    /// treated as "did not hold" and swallowed. On failure the gate closes,
    /// so a following `and_if` is skipped and a following `or_if` runs.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// assert!(Check::new(5).if_(|x| *x > 10).is_valid());
    /// assert!(!Check::new(5).if_(|x| *x < 10).is_valid());
    /// ```
    pub fn if_<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.if_msg(condition, "")
    }

    /// [`Check::if_`] with a custom message.
    pub fn if_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_content_check() {
            return self;
        }
        if self.eval(condition) == Some(true) {
            self.fail("If(condition)", msg);
        }
        self
    }

    /// Record an error if the condition does **not** hold.
    ///
    /// A panicking condition counts as a failed expectation here, unlike
    /// [`Check::if_`]: either way the expected-true condition did not hold.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::new("hello").if_not_msg(|s| s.is_empty(), "must be blank");
    /// assert_eq!(check.errors(), ["must be blank"]);
    /// ```
    pub fn if_not<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.if_not_msg(condition, "")
    }

    /// [`Check::if_not`] with a custom message.
    pub fn if_not_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_content_check() {
            return self;
        }
        if self.eval(condition) != Some(true) {
            self.fail("IfNot(condition)", msg);
        }
        self
    }

    /// Like [`Check::if_`], but only runs when the previous gated check
    /// passed.
    pub fn and_if<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.and_if_msg(condition, "")
    }

    /// [`Check::and_if`] with a custom message.
    pub fn and_if_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_gated_check() {
            return self;
        }
        if self.eval(condition) == Some(true) {
            self.fail("AndIf(condition)", msg);
        }
        self
    }

    /// Like [`Check::if_not`], but only runs when the previous gated check
    /// passed.
    pub fn and_if_not<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.and_if_not_msg(condition, "")
    }

    /// [`Check::and_if_not`] with a custom message.
    pub fn and_if_not_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_gated_check() {
            return self;
        }
        if self.eval(condition) != Some(true) {
            self.fail("AndIfNot(condition)", msg);
        }
        self
    }

    /// Like [`Check::if_`], but only runs when the previous gated check
    /// **failed** — the fallback branch of a gate.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// // The primary check passes, so the fallback never runs.
    /// let check = Check::new(50)
    ///     .if_(|x| *x > 100)
    ///     .or_if(|x| *x % 2 == 0);
    /// assert!(check.is_valid());
    /// ```
    pub fn or_if<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.or_if_msg(condition, "")
    }

    /// [`Check::or_if`] with a custom message.
    pub fn or_if_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_or_check() {
            return self;
        }
        if self.eval(condition) == Some(true) {
            self.fail("OrIf(condition)", msg);
        }
        self
    }

    /// Like [`Check::if_not`], but only runs when the previous gated check
    /// failed.
    pub fn or_if_not<F>(self, condition: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.or_if_not_msg(condition, "")
    }

    /// [`Check::or_if_not`] with a custom message.
    pub fn or_if_not_msg<F>(mut self, condition: F, msg: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skip_or_check() {
            return self;
        }
        if self.eval(condition) != Some(true) {
            self.fail("OrIfNot(condition)", msg);
        }
        self
    }

    // ------------------------------------------------------------------
    // Building blocks for check catalogs
    // ------------------------------------------------------------------

    /// Skip-guard for content checks.
    ///
    /// Returns `true` when the subject is absent, in which case the caller
    /// must not run its predicate. On a present subject the gate re-opens and
    /// `false` is returned.
    ///
    /// Typed check extensions (see [`crate::checks`]) call this at the top of
    /// every method, then [`Check::fail`] when their condition fires.
    pub fn skip_content_check(&mut self) -> bool {
        if self.value.is_none() {
            return true;
        }
        self.gate_open = true;
        false
    }

    /// Skip-guard for `and_*` checks: skips when the gate is closed, then
    /// defers to [`Check::skip_content_check`].
    pub fn skip_gated_check(&mut self) -> bool {
        !self.gate_open || self.skip_content_check()
    }

    /// Skip-guard for `or_*` checks: runs only when the subject is present
    /// and the previous gated check failed. Does not touch the gate.
    pub fn skip_or_check(&mut self) -> bool {
        self.value.is_none() || self.gate_open
    }

    /// Append an error message, marking the session invalid and closing the
    /// gate.
    ///
    /// A non-empty `custom_msg` overrides `default_msg`; an empty one falls
    /// back to it.
    pub fn fail(&mut self, default_msg: &str, custom_msg: &str) {
        self.fail_with(|| default_msg.to_string(), custom_msg);
    }

    /// [`Check::fail`] with a lazily built default message, for checks whose
    /// default interpolates parameters.
    pub fn fail_with<F>(&mut self, default_msg: F, custom_msg: &str)
    where
        F: FnOnce() -> String,
    {
        self.is_valid = false;
        self.gate_open = false;
        let msg = if custom_msg.is_empty() {
            default_msg()
        } else {
            custom_msg.to_string()
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(label = %self.label, error = %msg, "check failed");
        self.messages.push(msg);
    }

    // Runs the predicate on the present subject, converting a panic into
    // None. Callers interpret None per combinator.
    fn eval<F>(&self, condition: F) -> Option<bool>
    where
        F: FnOnce(&T) -> bool,
    {
        let value = self.value.as_ref()?;
        catch_unwind(AssertUnwindSafe(|| condition(value))).ok()
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The accumulated error messages, in insertion order.
    pub fn errors(&self) -> &[String] {
        &self.messages
    }

    /// Whether any check has recorded an error.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Number of accumulated error messages.
    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    /// Whether the session is still valid.
    ///
    /// False once any check fails, and from construction for an absent
    /// subject. Reset only by [`Check::clear`].
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The wrapped subject, if present.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The diagnostic label for the subject.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The captured source location, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Consume the session and recover the subject.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Reset the evaluation state for reuse: validity, gate and messages.
    /// The subject, label and location are untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let check = Check::new(1).if_(|x| *x == 1).clear();
    /// assert!(check.is_valid());
    /// assert_eq!(check.error_count(), 0);
    /// ```
    pub fn clear(mut self) -> Self {
        self.is_valid = true;
        self.gate_open = true;
        self.messages.clear();
        self
    }

    // ------------------------------------------------------------------
    // Terminal methods
    // ------------------------------------------------------------------

    /// Build a [`Report`] over the accumulated messages, or `None` when
    /// there are none to report.
    pub fn report(&self, options: &ReportOptions) -> Option<Report> {
        Report::new(
            self.messages.clone(),
            self.label.clone(),
            self.location.clone(),
            options.clone(),
        )
    }

    /// Fail with all accumulated errors, or succeed when there are none.
    ///
    /// The error message numbers every failure in insertion order. Calling
    /// this on a clean chain is a no-op, so it can end any chain
    /// unconditionally.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// assert!(Check::new(5).if_(|x| *x > 10).to_result().is_ok());
    ///
    /// let err = Check::new(15).if_(|x| *x > 10).to_result().unwrap_err();
    /// assert_eq!(err.message(), "Errors: 1) If(condition).");
    /// ```
    pub fn to_result(&self) -> Result<(), CheckError> {
        self.to_result_with(&ReportOptions::default())
    }

    /// [`Check::to_result`] with explicit report options.
    pub fn to_result_with(&self, options: &ReportOptions) -> Result<(), CheckError> {
        match self.report(options) {
            Some(report) => {
                let err = report.into_aggregate_error();
                #[cfg(feature = "tracing")]
                tracing::debug!(label = %self.label, error = %err, "check chain failed");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Fail with only the first accumulated error, or succeed when there are
    /// none.
    pub fn to_result_first(&self) -> Result<(), CheckError> {
        self.to_result_first_with(&ReportOptions::default())
    }

    /// [`Check::to_result_first`] with explicit report options.
    pub fn to_result_first_with(&self, options: &ReportOptions) -> Result<(), CheckError> {
        match self.report(options) {
            Some(report) => {
                let err = report.into_first_error();
                #[cfg(feature = "tracing")]
                tracing::debug!(label = %self.label, error = %err, "check chain failed");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Render all accumulated errors as a string, or `None` when there are
    /// none.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::Check;
    ///
    /// let rendered = Check::new("")
    ///     .if_msg(|s| s.is_empty(), "name is required")
    ///     .render();
    /// assert_eq!(rendered.unwrap(), "Errors: 1) name is required.");
    /// ```
    pub fn render(&self) -> Option<String> {
        self.render_with(&ReportOptions::default())
    }

    /// [`Check::render`] with explicit report options.
    pub fn render_with(&self, options: &ReportOptions) -> Option<String> {
        self.report(options).map(|report| report.render_all())
    }

    /// Render only the first accumulated error, or `None` when there are
    /// none.
    pub fn render_first(&self) -> Option<String> {
        self.render_first_with(&ReportOptions::default())
    }

    /// [`Check::render_first`] with explicit report options.
    pub fn render_first_with(&self, options: &ReportOptions) -> Option<String> {
        self.report(options).map(|report| report.render_first())
    }
}

impl<T> From<Option<T>> for Check<T> {
    fn from(value: Option<T>) -> Self {
        Check::from_option(value)
    }
}

/// Start a check chain, capturing the expression text and source location.
///
/// Expands to [`Check::new`] plus [`Check::with_label`] /
/// [`Check::with_location`], so verbose reports can name the offending
/// expression and where it was checked.
///
/// # Example
///
/// ```
/// use guardrail::{check, ReportOptions};
///
/// let age = 15;
/// let rendered = check!(age)
///     .if_msg(|a| *a < 18, "must be an adult")
///     .render_with(&ReportOptions::new().verbose(true))
///     .unwrap();
/// assert!(rendered.contains("must be an adult"));
/// assert!(rendered.contains("age <i32>"));
/// ```
#[macro_export]
macro_rules! check {
    ($value:expr) => {
        $crate::Check::new($value)
            .with_label(stringify!($value))
            .with_location(file!(), line!())
    };
}

/// [`check!`] for possibly absent subjects: wraps an `Option` with
/// [`Check::from_option`] and captures the same metadata.
///
/// # Example
///
/// ```
/// use guardrail::check_opt;
///
/// let name: Option<String> = None;
/// let check = check_opt!(name).if_none();
/// assert!(check.has_errors());
/// ```
#[macro_export]
macro_rules! check_opt {
    ($value:expr) => {
        $crate::Check::from_option($value)
            .with_label(stringify!($value))
            .with_location(file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_valid() {
        let check = Check::new(42);
        assert!(check.is_valid());
        assert!(!check.has_errors());
        assert_eq!(check.error_count(), 0);
        assert_eq!(check.value(), Some(&42));
    }

    #[test]
    fn test_absent_starts_invalid_without_messages() {
        let check = Check::from_option(None::<i32>);
        assert!(!check.is_valid());
        assert!(!check.has_errors());
    }

    #[test]
    fn test_if_passes() {
        let check = Check::new(5).if_(|x| *x > 10);
        assert!(check.is_valid());
        assert_eq!(check.error_count(), 0);
    }

    #[test]
    fn test_if_fails() {
        let check = Check::new(5).if_(|x| *x < 10);
        assert!(!check.is_valid());
        assert_eq!(check.errors(), ["If(condition)"]);
    }

    #[test]
    fn test_if_not_fails_when_condition_false() {
        let check = Check::new(5).if_not(|x| *x > 10);
        assert_eq!(check.errors(), ["IfNot(condition)"]);
    }

    #[test]
    fn test_custom_message_overrides_default() {
        let check = Check::new(5).if_msg(|x| *x < 10, "too small");
        assert_eq!(check.errors(), ["too small"]);
    }

    #[test]
    fn test_empty_custom_message_falls_back_to_default() {
        let check = Check::new(5).if_msg(|x| *x < 10, "");
        assert_eq!(check.errors(), ["If(condition)"]);
    }

    #[test]
    fn test_and_if_skipped_after_failure() {
        let mut ran = false;
        let check = Check::new(5).if_(|x| *x < 10).and_if(|_| {
            ran = true;
            true
        });
        assert!(!ran);
        assert_eq!(check.error_count(), 1);
    }

    #[test]
    fn test_and_if_runs_after_pass() {
        let check = Check::new(5).if_(|x| *x > 10).and_if(|x| *x == 5);
        assert_eq!(check.errors(), ["AndIf(condition)"]);
    }

    #[test]
    fn test_or_if_runs_after_failure() {
        let check = Check::new(5).if_(|x| *x < 10).or_if(|x| *x == 5);
        assert_eq!(check.errors(), ["If(condition)", "OrIf(condition)"]);
    }

    #[test]
    fn test_or_if_skipped_after_pass() {
        let mut ran = false;
        let check = Check::new(5).if_(|x| *x > 10).or_if(|_| {
            ran = true;
            true
        });
        assert!(!ran);
        assert!(check.is_valid());
    }

    #[test]
    fn test_consecutive_or_checks_all_run_while_gate_closed() {
        let check = Check::new(5)
            .if_(|x| *x < 10)
            .or_if(|x| *x == 5)
            .or_if_not(|x| *x == 7);
        assert_eq!(check.error_count(), 3);
    }

    #[test]
    fn test_gate_reopens_on_next_independent_check() {
        // Second if_ passes and reopens the gate, so and_if runs again.
        let check = Check::new(5)
            .if_(|x| *x < 10)
            .if_(|x| *x > 10)
            .and_if(|x| *x == 5);
        assert_eq!(check.errors(), ["If(condition)", "AndIf(condition)"]);
    }

    #[test]
    fn test_absent_subject_skips_content_checks() {
        let check = Check::from_option(None::<String>)
            .if_none()
            .if_(|s| s.len() > 3)
            .if_not(|s| s.is_empty())
            .and_if(|_| true)
            .or_if(|_| true)
            .or_if_not(|_| false);
        assert_eq!(check.errors(), ["The value is none"]);
    }

    #[test]
    fn test_absent_subject_predicates_never_invoked() {
        let mut ran = false;
        let _ = Check::from_option(None::<i32>)
            .if_(|_| {
                ran = true;
                true
            })
            .or_if_not(|_| {
                ran = true;
                true
            });
        assert!(!ran);
    }

    #[test]
    fn test_if_some_on_present_subject() {
        let check = Check::new(1).if_some();
        assert_eq!(check.errors(), ["The value is not none"]);
    }

    #[test]
    fn test_if_none_on_present_subject_is_clean() {
        let check = Check::new(1).if_none();
        assert!(check.is_valid());
    }

    #[test]
    fn test_panicking_predicate_swallowed_by_if() {
        let items: Vec<i32> = Vec::new();
        let check = Check::new(items).if_(|v| v[0] == 1);
        assert!(check.is_valid());
        assert_eq!(check.error_count(), 0);
    }

    #[test]
    fn test_panicking_predicate_fails_if_not() {
        let items: Vec<i32> = Vec::new();
        let check = Check::new(items).if_not(|v| v[0] == 1);
        assert_eq!(check.errors(), ["IfNot(condition)"]);
    }

    #[test]
    fn test_panicking_predicate_closes_gate_for_if_not() {
        let items: Vec<i32> = Vec::new();
        let check = Check::new(items)
            .if_not(|v| v[0] == 1)
            .or_if(|v| v.is_empty());
        assert_eq!(check.error_count(), 2);
    }

    #[test]
    fn test_clear_resets_state() {
        let check = Check::new(5)
            .if_(|x| *x < 10)
            .if_(|x| *x == 5)
            .clear();
        assert!(check.is_valid());
        assert_eq!(check.error_count(), 0);
        // The subject survives, so the chain is reusable.
        assert_eq!(check.value(), Some(&5));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let check = Check::new(5).if_(|x| *x < 10).clear().clear();
        assert!(check.is_valid());
        assert_eq!(check.error_count(), 0);
    }

    #[test]
    fn test_clear_reopens_gate() {
        let check = Check::new(5)
            .if_(|x| *x < 10)
            .clear()
            .and_if(|x| *x == 5);
        assert_eq!(check.errors(), ["AndIf(condition)"]);
    }

    #[test]
    fn test_error_count_matches_validity_on_present_subject() {
        let mut check = Check::new(5);
        for step in 0..4 {
            check = check.if_(move |x| *x > step);
            assert_eq!(check.has_errors(), !check.is_valid());
            assert_eq!(check.has_errors(), check.error_count() > 0);
        }
    }

    #[test]
    fn test_messages_preserve_insertion_order_and_duplicates() {
        let check = Check::new(1)
            .if_msg(|x| *x == 1, "dup")
            .if_msg(|x| *x == 1, "dup")
            .if_msg(|x| *x == 1, "other");
        assert_eq!(check.errors(), ["dup", "dup", "other"]);
    }

    #[test]
    fn test_terminal_methods_are_non_destructive() {
        let check = Check::new(5).if_(|x| *x < 10);
        assert!(check.to_result().is_err());
        assert!(check.to_result().is_err());
        assert_eq!(check.error_count(), 1);
    }

    #[test]
    fn test_to_result_on_clean_chain_is_ok() {
        let check = Check::new(5).if_(|x| *x > 10);
        assert!(check.to_result().is_ok());
        assert!(check.to_result_first().is_ok());
        assert_eq!(check.render(), None);
        assert_eq!(check.render_first(), None);
    }

    #[test]
    fn test_render_numbering() {
        let check = Check::new(1)
            .if_msg(|x| *x == 1, "A")
            .if_msg(|x| *x == 1, "B");
        assert_eq!(check.render().unwrap(), "Errors: 1) A, 2) B.");
    }

    #[test]
    fn test_render_first_uses_first_message_only() {
        let check = Check::new(1)
            .if_msg(|x| *x == 1, "A")
            .if_msg(|x| *x == 1, "B");
        assert_eq!(check.render_first().unwrap(), "Errors: A.");
    }

    #[test]
    fn test_from_option_conversion() {
        let check: Check<i32> = Some(3).into();
        assert!(check.is_valid());
        let check: Check<i32> = None.into();
        assert!(!check.is_valid());
    }

    #[test]
    fn test_into_inner_returns_subject() {
        let check = Check::new(String::from("abc")).if_(|s| s.is_empty());
        assert_eq!(check.into_inner(), Some(String::from("abc")));
    }

    #[test]
    fn test_check_macro_captures_label_and_location() {
        let user_name = "ada";
        let check = check!(user_name);
        assert_eq!(check.label(), "user_name <&str>");
        let location = check.location().unwrap_or("");
        assert!(location.starts_with("in check.rs:line "));
    }
}
