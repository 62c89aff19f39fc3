//! Transient notices shown in the footer.
//!
//! One notice is visible at a time and the latest one wins. A notice hides
//! itself once its timeout has elapsed.

use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a notice stays visible by default.
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_millis(6000);

/// Severity of a notice, which selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An action completed.
    Success,
    /// Neutral status.
    Info,
    /// Something was refused or skipped.
    Warning,
    /// An operation failed.
    Error,
}

/// A message with its severity and the instant it was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text shown in the footer.
    pub message: String,
    /// Selects the footer color.
    pub severity: Severity,
    /// Instant the notice was raised; the timeout counts from here.
    pub shown_at: Instant,
}

/// Notice context owned by the application root.
#[derive(Debug, Clone)]
pub struct Notices {
    current: Option<Notice>,
    timeout: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TIMEOUT)
    }
}

impl Notices {
    /// Create a context whose notices hide after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    /// Show a success notice raised at `now`.
    pub fn show_success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message.into(), Severity::Success, now);
    }

    /// Show an informational notice raised at `now`.
    pub fn show_info(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message.into(), Severity::Info, now);
    }

    /// Show a warning notice raised at `now`.
    pub fn show_warning(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message.into(), Severity::Warning, now);
    }

    /// Show an error notice raised at `now`.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message.into(), Severity::Error, now);
    }

    /// Show `err` as an error notice raised at `now` and log it.
    pub fn report_error(&mut self, err: &dyn Error, now: Instant) {
        warn!(error = %err, "reported to user");
        self.show_error(err.to_string(), now);
    }

    fn show(&mut self, message: String, severity: Severity, now: Instant) {
        info!(?severity, %message, "notice shown");
        self.current = Some(Notice {
            message,
            severity,
            shown_at: now,
        });
    }

    /// Hide the current notice.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the notice if its timeout has elapsed at `now`.
    ///
    /// Returns true when a notice was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.timeout);
        if expired {
            self.current = None;
        }
        expired
    }

    /// The visible notice, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Instant at which the current notice will hide.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.shown_at + self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputError;

    #[test]
    fn latest_notice_wins() {
        let t0 = Instant::now();
        let mut notices = Notices::default();
        notices.show_info("first", t0);
        notices.show_warning("second", t0 + Duration::from_millis(10));
        let current = notices.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Warning);
    }

    #[test]
    fn notice_expires_after_timeout() {
        let t0 = Instant::now();
        let mut notices = Notices::new(Duration::from_millis(100));
        notices.show_success("saved", t0);

        assert!(!notices.expire(t0 + Duration::from_millis(99)));
        assert!(notices.current().is_some());
        assert!(notices.expire(t0 + Duration::from_millis(100)));
        assert!(notices.current().is_none());
    }

    #[test]
    fn timeout_counts_from_the_given_instant() {
        let raised = Instant::now() + Duration::from_secs(30);
        let mut notices = Notices::default();
        notices.show_info("x", raised);

        assert_eq!(notices.current().unwrap().shown_at, raised);
        assert_eq!(notices.deadline(), Some(raised + Duration::from_millis(6000)));
        assert!(!notices.expire(raised + Duration::from_millis(5999)));
        assert!(notices.expire(raised + Duration::from_millis(6000)));
    }

    #[test]
    fn dismiss_hides_immediately() {
        let t0 = Instant::now();
        let mut notices = Notices::default();
        notices.show_error("boom", t0);
        notices.dismiss();
        assert!(notices.current().is_none());
        assert!(!notices.expire(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn report_error_uses_error_message() {
        let t0 = Instant::now();
        let mut notices = Notices::default();
        notices.report_error(&InputError::NoInput, t0);
        let current = notices.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert!(current.message.contains("No input source"));
        assert_eq!(current.shown_at, t0);
    }
}
