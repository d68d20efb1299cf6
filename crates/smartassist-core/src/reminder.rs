//! # Reminder Ordering
//!
//! Statutory due dates (shared by all users) and a user's own reminders are
//! shown as one list, soonest first.

use crate::time::NANOS_PER_DAY;
use crate::types::Reminder;

/// Combines statutory and custom reminders, sorted by due date.
///
/// The sort is stable: reminders due at the same instant keep statutory
/// entries before custom ones, each in their original order.
pub fn merge_reminders(statutory: Vec<Reminder>, custom: Vec<Reminder>) -> Vec<Reminder> {
    let mut all = statutory;
    all.extend(custom);
    all.sort_by_key(|r| r.due_date);
    all
}

/// The first `limit` reminders due at or after `now_nanos`, soonest first.
pub fn upcoming(reminders: &[Reminder], now_nanos: i64, limit: usize) -> Vec<Reminder> {
    let mut pending: Vec<Reminder> = reminders
        .iter()
        .filter(|r| r.due_date >= now_nanos)
        .cloned()
        .collect();
    pending.sort_by_key(|r| r.due_date);
    pending.truncate(limit);
    pending
}

/// Whole days from `now_nanos` until `due_nanos`; negative once overdue.
///
/// ## Example
/// ```rust
/// use smartassist_core::reminder::days_until;
/// use smartassist_core::time::NANOS_PER_DAY;
///
/// assert_eq!(days_until(3 * NANOS_PER_DAY, 0), 3);
/// assert_eq!(days_until(0, NANOS_PER_DAY / 2), -1);
/// ```
pub fn days_until(due_nanos: i64, now_nanos: i64) -> i64 {
    due_nanos
        .saturating_sub(now_nanos)
        .div_euclid(NANOS_PER_DAY)
}

/// Human phrasing for a deadline ("in 3 days", "today", "2 days ago").
pub fn describe_due(due_nanos: i64, now_nanos: i64) -> String {
    match days_until(due_nanos, now_nanos) {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}
