//! State for the change-password modal.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use staffdesk_states::State;

/// How long the success note stays visible before the modal closes itself.
pub const PASSWORD_CLOSE_DELAY_MS: i64 = 1200;

#[derive(Default)]
pub struct PasswordChangeState {
    pub open: bool,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    /// Whether the change request is in flight.
    pub in_progress: bool,
    /// Inline alert: validation or backend failure.
    pub alert: Option<String>,
    /// Success message shown until the auto-close deadline.
    pub success: Option<String>,
    close_at: Option<DateTime<Utc>>,
}

impl State for PasswordChangeState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PasswordChangeState {
    pub fn open_modal(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close_modal(&mut self) {
        *self = Self::default();
    }

    /// Three non-empty fields and a new/confirm match.
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("All fields are required".to_owned());
        }
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match".to_owned());
        }
        Ok(())
    }

    pub fn begin_submit(&mut self) {
        self.in_progress = true;
        self.alert = None;
    }

    pub fn submit_failed(&mut self, message: String) {
        self.alert = Some(message);
        self.in_progress = false;
    }

    /// Record success and schedule the auto-close.
    pub fn submit_succeeded(&mut self, message: String, now: DateTime<Utc>) {
        self.success = Some(message);
        self.alert = None;
        self.in_progress = false;
        self.close_at = Some(now + Duration::milliseconds(PASSWORD_CLOSE_DELAY_MS));
    }

    /// True once the post-success delay has elapsed; the caller closes the
    /// modal.
    pub fn should_auto_close(&self, now: DateTime<Utc>) -> bool {
        matches!(self.close_at, Some(deadline) if now >= deadline)
    }

    /// Auto-close deadline, for repaint scheduling.
    pub fn close_deadline(&self) -> Option<DateTime<Utc>> {
        self.close_at
    }
}
