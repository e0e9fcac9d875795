//! Rendering accumulated check failures into strings and errors
//!
//! A [`Report`] is a transient view over a check session's messages plus the
//! diagnostic metadata (label, source location) captured at construction. It
//! renders either every message as a numbered list or just the first one, in
//! plain or verbose form, controlled by [`ReportOptions`].
//!
//! The format is stable and testable: `"{start_text}1) {m0}, 2) {m1}."` —
//! numbered from 1 in insertion order, comma-space separators, one closing
//! period, and in verbose mode the source location before the period plus the
//! label appended as the offending-parameter identifier.

use crate::error::CheckError;

/// Configuration for rendering a [`Report`].
///
/// # Example
///
/// ```
/// use guardrail::{Check, ReportOptions};
///
/// let options = ReportOptions::new().start_text("Validation failed: ");
/// let rendered = Check::new(0)
///     .if_msg(|x| *x == 0, "zero not allowed")
///     .render_with(&options)
///     .unwrap();
/// assert_eq!(rendered, "Validation failed: 1) zero not allowed.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportOptions {
    verbose: bool,
    start_text: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            verbose: false,
            start_text: String::from("Errors: "),
        }
    }
}

impl ReportOptions {
    /// Default options: not verbose, `"Errors: "` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the source location and the subject's label in the output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the `"Errors: "` prefix. An empty string omits the prefix
    /// entirely.
    pub fn start_text(mut self, text: impl Into<String>) -> Self {
        self.start_text = text.into();
        self
    }

    /// Whether verbose output is requested.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.start_text
    }
}

/// A transient, renderable view of a failed check session.
///
/// Only constructible with at least one message, so the first-error forms
/// are total. Built by [`Check::report`](crate::Check::report) and consumed
/// by the terminal methods; not meant to outlive the formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    messages: Vec<String>,
    label: String,
    location: Option<String>,
    options: ReportOptions,
}

impl Report {
    /// Build a report, or `None` when there is nothing to report.
    pub fn new(
        messages: Vec<String>,
        label: String,
        location: Option<String>,
        options: ReportOptions,
    ) -> Option<Self> {
        if messages.is_empty() {
            return None;
        }
        Some(Report {
            messages,
            label,
            location,
            options,
        })
    }

    /// The messages under report, in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Render every message as a numbered list.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail::{Report, ReportOptions};
    ///
    /// let report = Report::new(
    ///     vec!["A".into(), "B".into()],
    ///     "value <i32>".into(),
    ///     None,
    ///     ReportOptions::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(report.render_all(), "Errors: 1) A, 2) B.");
    /// ```
    pub fn render_all(&self) -> String {
        self.finish(self.numbered_body())
    }

    /// Render only the first message, unnumbered.
    pub fn render_first(&self) -> String {
        self.finish(self.messages[0].clone())
    }

    /// Consume the report into the aggregate [`CheckError`].
    pub fn into_aggregate_error(self) -> CheckError {
        let message = self.render_body_all();
        let label = self.verbose_label();
        CheckError::Aggregate { message, label }
    }

    /// Consume the report into the first-failure [`CheckError`].
    pub fn into_first_error(self) -> CheckError {
        let message = self.render_body_first();
        let label = self.verbose_label();
        CheckError::First { message, label }
    }

    // The rendered string forms append the label; the error forms carry it
    // as a separate field so Display can do the same.
    fn finish(&self, body: String) -> String {
        let rendered = self.close(body);
        match self.verbose_label() {
            Some(label) => format!("{rendered} (parameter '{label}')"),
            None => rendered,
        }
    }

    fn render_body_all(&self) -> String {
        self.close(self.numbered_body())
    }

    fn numbered_body(&self) -> String {
        let mut body = String::new();
        for (i, msg) in self.messages.iter().enumerate() {
            if i > 0 {
                body.push_str(", ");
            }
            body.push_str(&format!("{}) {}", i + 1, msg));
        }
        body
    }

    fn render_body_first(&self) -> String {
        self.close(self.messages[0].clone())
    }

    fn close(&self, body: String) -> String {
        match (self.options.is_verbose(), self.location.as_deref()) {
            (true, Some(location)) => {
                format!("{}{}, {}.", self.options.prefix(), body, location)
            }
            _ => format!("{}{}.", self.options.prefix(), body),
        }
    }

    fn verbose_label(&self) -> Option<String> {
        if self.options.is_verbose() {
            Some(self.label.clone())
        } else {
            None
        }
    }
}
