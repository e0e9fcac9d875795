//! String checks
//!
//! Shape, length, comparison and pattern checks for string subjects. The
//! email and URL patterns are compiled once into statics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::check::Check;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
    )
    .expect("email pattern is well formed")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?|ftp|file)://[0-9a-z]([-.\w]*[0-9a-z])*(:[0-9]+)?(/?)([a-z0-9\-.?,'/\\+&%$#_=~]*)?$",
    )
    .expect("url pattern is well formed")
});

/// Checks for string subjects.
///
/// Implemented for any `Check<S>` where `S: AsRef<str>`, so `String`, `&str`
/// and `Cow<str>` subjects all get the same surface.
///
/// # Example
///
/// ```
/// use guardrail::prelude::*;
///
/// let check = Check::new("not-an-email").if_not_email();
/// assert_eq!(
///     check.errors(),
///     ["String 'not-an-email' is not an email address"]
/// );
/// ```
pub trait StringChecks: Sized {
    /// Record an error if the string is empty.
    fn if_empty(self) -> Self {
        self.if_empty_msg("")
    }

    /// [`StringChecks::if_empty`] with a custom message.
    fn if_empty_msg(self, msg: &str) -> Self;

    /// Record an error if the string is not empty.
    fn if_not_empty(self) -> Self {
        self.if_not_empty_msg("")
    }

    /// [`StringChecks::if_not_empty`] with a custom message.
    fn if_not_empty_msg(self, msg: &str) -> Self;

    /// Record an error if the string consists entirely of whitespace.
    ///
    /// The empty string is not whitespace; use
    /// [`StringChecks::if_empty_or_whitespace`] to reject both.
    fn if_whitespace(self) -> Self {
        self.if_whitespace_msg("")
    }

    /// [`StringChecks::if_whitespace`] with a custom message.
    fn if_whitespace_msg(self, msg: &str) -> Self;

    /// Record an error if the string is empty or entirely whitespace.
    fn if_empty_or_whitespace(self) -> Self {
        self.if_empty_or_whitespace_msg("")
    }

    /// [`StringChecks::if_empty_or_whitespace`] with a custom message.
    fn if_empty_or_whitespace_msg(self, msg: &str) -> Self;

    /// Record an error if the string equals `other`.
    fn if_equals(self, other: &str) -> Self {
        self.if_equals_msg(other, "")
    }

    /// [`StringChecks::if_equals`] with a custom message.
    fn if_equals_msg(self, other: &str, msg: &str) -> Self;

    /// Record an error if the string does not equal `other`.
    fn if_not_equals(self, other: &str) -> Self {
        self.if_not_equals_msg(other, "")
    }

    /// [`StringChecks::if_not_equals`] with a custom message.
    fn if_not_equals_msg(self, other: &str, msg: &str) -> Self;

    /// Record an error if the string is longer than `length` characters.
    fn if_length_greater_than(self, length: usize) -> Self {
        self.if_length_greater_than_msg(length, "")
    }

    /// [`StringChecks::if_length_greater_than`] with a custom message.
    fn if_length_greater_than_msg(self, length: usize, msg: &str) -> Self;

    /// Record an error if the string is shorter than `length` characters.
    fn if_length_less_than(self, length: usize) -> Self {
        self.if_length_less_than_msg(length, "")
    }

    /// [`StringChecks::if_length_less_than`] with a custom message.
    fn if_length_less_than_msg(self, length: usize, msg: &str) -> Self;

    /// Record an error if the string is not exactly `length` characters.
    fn if_not_length(self, length: usize) -> Self {
        self.if_not_length_msg(length, "")
    }

    /// [`StringChecks::if_not_length`] with a custom message.
    fn if_not_length_msg(self, length: usize, msg: &str) -> Self;

    /// Record an error if the string contains `part`.
    fn if_contains(self, part: &str) -> Self {
        self.if_contains_msg(part, "")
    }

    /// [`StringChecks::if_contains`] with a custom message.
    fn if_contains_msg(self, part: &str, msg: &str) -> Self;

    /// Record an error if the string does not contain `part`.
    fn if_not_contains(self, part: &str) -> Self {
        self.if_not_contains_msg(part, "")
    }

    /// [`StringChecks::if_not_contains`] with a custom message.
    fn if_not_contains_msg(self, part: &str, msg: &str) -> Self;

    /// Record an error if the string matches `pattern`.
    fn if_matches(self, pattern: &Regex) -> Self {
        self.if_matches_msg(pattern, "")
    }

    /// [`StringChecks::if_matches`] with a custom message.
    fn if_matches_msg(self, pattern: &Regex, msg: &str) -> Self;

    /// Record an error if the string does not match `pattern`.
    fn if_not_matches(self, pattern: &Regex) -> Self {
        self.if_not_matches_msg(pattern, "")
    }

    /// [`StringChecks::if_not_matches`] with a custom message.
    fn if_not_matches_msg(self, pattern: &Regex, msg: &str) -> Self;

    /// Record an error if the string is not an email address.
    fn if_not_email(self) -> Self {
        self.if_not_email_msg("")
    }

    /// [`StringChecks::if_not_email`] with a custom message.
    fn if_not_email_msg(self, msg: &str) -> Self;

    /// Record an error if the string is not a URL.
    fn if_not_url(self) -> Self {
        self.if_not_url_msg("")
    }

    /// [`StringChecks::if_not_url`] with a custom message.
    fn if_not_url_msg(self, msg: &str) -> Self;
}

impl<S: AsRef<str>> StringChecks for Check<S> {
    fn if_empty_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.as_ref().is_empty()) {
            self.fail("String is empty", msg);
        }
        self
    }

    fn if_not_empty_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if !v.as_ref().is_empty()) {
            self.fail("String is not empty", msg);
        }
        self
    }

    fn if_whitespace_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = matches!(
            self.value(),
            Some(v) if !v.as_ref().is_empty() && v.as_ref().chars().all(char::is_whitespace)
        );
        if fired {
            self.fail("String is whitespace", msg);
        }
        self
    }

    fn if_empty_or_whitespace_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.as_ref().trim().is_empty()) {
            self.fail("String is empty or whitespace", msg);
        }
        self
    }

    fn if_equals_msg(mut self, other: &str, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.as_ref() == other) {
            self.fail_with(|| format!("String should not be equal to '{other}'"), msg);
        }
        self
    }

    fn if_not_equals_msg(mut self, other: &str, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.as_ref() != other) {
            self.fail_with(|| format!("String should be equal to '{other}'"), msg);
        }
        self
    }

    fn if_length_greater_than_msg(mut self, length: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = matches!(self.value(), Some(v) if v.as_ref().chars().count() > length);
        if fired {
            self.fail_with(
                || format!("String has exceeded the character limit of {length} characters"),
                msg,
            );
        }
        self
    }

    fn if_length_less_than_msg(mut self, length: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = matches!(self.value(), Some(v) if v.as_ref().chars().count() < length);
        if fired {
            self.fail_with(
                || format!("String does not meet the minimum character length of {length} characters"),
                msg,
            );
        }
        self
    }

    fn if_not_length_msg(mut self, length: usize, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = matches!(self.value(), Some(v) if v.as_ref().chars().count() != length);
        if fired {
            self.fail_with(
                || format!("String length should equal {length} characters"),
                msg,
            );
        }
        self
    }

    fn if_contains_msg(mut self, part: &str, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if v.as_ref().contains(part)) {
            self.fail_with(|| format!("String should not contain '{part}'"), msg);
        }
        self
    }

    fn if_not_contains_msg(mut self, part: &str, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if !v.as_ref().contains(part)) {
            self.fail_with(|| format!("String should contain '{part}'"), msg);
        }
        self
    }

    fn if_matches_msg(mut self, pattern: &Regex, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if pattern.is_match(v.as_ref())) {
            self.fail_with(
                || format!("String should not match the pattern '{pattern}'"),
                msg,
            );
        }
        self
    }

    fn if_not_matches_msg(mut self, pattern: &Regex, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        if matches!(self.value(), Some(v) if !pattern.is_match(v.as_ref())) {
            self.fail_with(
                || format!("String should match the pattern '{pattern}'"),
                msg,
            );
        }
        self
    }

    fn if_not_email_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) => !EMAIL.is_match(v.as_ref()),
            None => false,
        };
        if fired {
            let text = self
                .value()
                .map(|v| v.as_ref().to_string())
                .unwrap_or_default();
            self.fail_with(|| format!("String '{text}' is not an email address"), msg);
        }
        self
    }

    fn if_not_url_msg(mut self, msg: &str) -> Self {
        if self.skip_content_check() {
            return self;
        }
        let fired = match self.value() {
            Some(v) => !URL.is_match(v.as_ref()),
            None => false,
        };
        if fired {
            let text = self
                .value()
                .map(|v| v.as_ref().to_string())
                .unwrap_or_default();
            self.fail_with(|| format!("String '{text}' is not a URL"), msg);
        }
        self
    }
}
