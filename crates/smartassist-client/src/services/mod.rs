//! # Services
//!
//! One service per screen. Each validates input, applies plan rules, then
//! calls the backend.
//!
//! ```text
//! services/
//! ├── calculator.rs  ◄─── GST preview, saved calculations
//! ├── invoice.rs     ◄─── quota, creation behind the free-tier gate
//! ├── reminder.rs    ◄─── statutory + custom due dates
//! ├── learning.rs    ◄─── lessons, quizzes, on-device progress
//! └── support.rs     ◄─── tax tips, CA queries (premium)
//! ```
//!
//! Collaborators are passed in explicitly; nothing here reaches for a global.

pub mod calculator;
pub mod invoice;
pub mod learning;
pub mod reminder;
pub mod support;

pub use calculator::CalculatorService;
pub use invoice::InvoiceService;
pub use learning::{CategoryView, LearningService, QuizOutcome};
pub use reminder::ReminderService;
pub use support::{SupportService, TipView};

use smartassist_core::UserProfile;

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};

/// The caller's profile, or [`ClientError::ProfileNotFound`].
pub(crate) async fn require_profile(backend: &dyn Backend) -> ClientResult<UserProfile> {
    backend
        .get_caller_user_profile()
        .await?
        .ok_or(ClientError::ProfileNotFound)
}
