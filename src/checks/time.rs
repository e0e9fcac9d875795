//! Calendar checks for `chrono` date-time subjects
//!
//! Available behind the `time` feature. The relative checks
//! ([`TimeChecks::if_in_past`], [`TimeChecks::if_in_future`]) compare against
//! `Utc::now()` at the moment the check runs.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::check::Check;

/// Checks for `DateTime<Utc>` subjects.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use guardrail::prelude::*;
///
/// let launch = Utc.with_ymd_and_hms(2019, 7, 20, 20, 17, 0).unwrap();
/// let check = Check::new(launch).if_in_past();
/// assert!(check.has_errors());
/// ```
pub trait TimeChecks: Sized {
    /// Record an error if the date is before `other`.
    fn if_before(self, other: DateTime<Utc>) -> Self {
        self.if_before_msg(other, "")
    }

    /// [`TimeChecks::if_before`] with a custom message.
    fn if_before_msg(self, other: DateTime<Utc>, msg: &str) -> Self;

    /// Record an error if the date is after `other`.
    fn if_after(self, other: DateTime<Utc>) -> Self {
        self.if_after_msg(other, "")
    }

    /// [`TimeChecks::if_after`] with a custom message.
    fn if_after_msg(self, other: DateTime<Utc>, msg: &str) -> Self;

    /// Record an error if the date lies in the past.
    fn if_in_past(self) -> Self {
        self.if_in_past_msg("")
    }

    /// [`TimeChecks::if_in_past`] with a custom message.
    fn if_in_past_msg(self, msg: &str) -> Self;

    /// Record an error if the date lies in the future.
    fn if_in_future(self) -> Self {
        self.if_in_future_msg("")
    }

    /// [`TimeChecks::if_in_future`] with a custom message.
    fn if_in_future_msg(self, msg: &str) -> Self;

    /// Record an error if the date falls on `day`.
    fn if_day_of_week(self, day: Weekday) -> Self {
        self.if_day_of_week_msg(day, "")
    }

    /// [`TimeChecks::if_day_of_week`] with a custom message.
    fn if_day_of_week_msg(self, day: Weekday, msg: &str) -> Self;

    /// Record an error if the date does not fall on `day`.
    fn if_not_day_of_week(self, day: Weekday) -> Self {
        self.if_not_day_of_week_msg(day, "")
    }

    /// [`TimeChecks::if_not_day_of_week`] with a custom message.
    fn if_not_day_of_week_msg(self, day: Weekday, msg: &str) -> Self;
}

impl TimeChecks for Check<DateTime<Utc>> {
    fn if_before_msg(mut self, other: DateTime<Utc>, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v < other) {
            self.fail_with(|| format!("The date is before '{other}'"), msg);
        }
        self
    }

    fn if_after_msg(mut self, other: DateTime<Utc>, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if *v > other) {
            self.fail_with(|| format!("The date is after '{other}'"), msg);
        }
        self
    }

    fn if_in_past_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let now = Utc::now();
        if matches!(self.value(), Some(v) if *v < now) {
            self.fail("The date is in the past", msg);
        }
        self
    }

    fn if_in_future_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let now = Utc::now();
        if matches!(self.value(), Some(v) if *v > now) {
            self.fail("The date is in the future", msg);
        }
        self
    }

    fn if_day_of_week_msg(mut self, day: Weekday, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.weekday() == day) {
            self.fail_with(|| format!("The date falls on a {day}"), msg);
        }
        self
    }

    fn if_not_day_of_week_msg(mut self, day: Weekday, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.weekday() != day) {
            self.fail_with(|| format!("The date does not fall on a {day}"), msg);
        }
        self
    }
}
