//! # Reminder Service
//!
//! Statutory due dates merged with the caller's own reminders.

use std::sync::Arc;

use chrono::NaiveDate;
use smartassist_core::reminder::{merge_reminders, upcoming};
use smartassist_core::time::nanos_from_date;
use smartassist_core::validation::validate_required;
use smartassist_core::Reminder;
use tracing::debug;

use crate::backend::Backend;
use crate::clock::Clock;
use crate::error::ClientResult;

pub struct ReminderService {
    backend: Arc<dyn Backend>,
    clock: Arc<dyn Clock>,
}

impl ReminderService {
    pub fn new(backend: Arc<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        ReminderService { backend, clock }
    }

    /// Every reminder, soonest first.
    pub async fn all(&self) -> ClientResult<Vec<Reminder>> {
        let statutory = self.backend.get_upcoming_due_dates().await?;
        let custom = self.backend.get_user_custom_reminders().await?;
        debug!(
            statutory = statutory.len(),
            custom = custom.len(),
            "Merging reminders"
        );
        Ok(merge_reminders(statutory, custom))
    }

    /// The next `limit` reminders that are not yet past.
    pub async fn upcoming(&self, limit: usize) -> ClientResult<Vec<Reminder>> {
        let all = self.all().await?;
        Ok(upcoming(&all, self.clock.now_nanos(), limit))
    }

    /// Creates a reminder due at midnight UTC on `due_date`.
    pub async fn create_custom(
        &self,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        reminder_enabled: bool,
    ) -> ClientResult<Reminder> {
        let title = validate_required("title", title)?;
        let reminder = self
            .backend
            .create_custom_reminder(
                &title,
                description.trim(),
                nanos_from_date(due_date),
                reminder_enabled,
            )
            .await?;
        debug!(title = %reminder.title, %due_date, "Custom reminder created");
        Ok(reminder)
    }
}
