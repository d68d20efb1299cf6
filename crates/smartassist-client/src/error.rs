//! # Client Error Types
//!
//! Error type for every service call in this crate.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  User-facing    │  │   Plan gate     │  │     Infrastructure      │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Validation     │  │  InvoiceLimit-  │  │  Backend                │ │
//! │  │  ProfileNotFound│  │    Reached      │  │  Storage                │ │
//! │  │  NotFound       │  │  UpgradeRequired│  │  Config                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  User-facing and plan-gate errors are shown as-is; infrastructure      │
//! │  errors become a generic "try again" toast.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use smartassist_core::{CoreError, UpgradeContext, ValidationError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // User-facing Errors
    // =========================================================================
    /// The caller has not completed profile setup.
    #[error("Profile not found. Complete profile setup first.")]
    ProfileNotFound,

    /// Form input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist (or belongs to someone else).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    // =========================================================================
    // Plan Gate Errors
    // =========================================================================
    /// Free-tier invoice quota for the current period is used up.
    #[error("Invoice limit reached: {used} of {limit} invoices used this period")]
    InvoiceLimitReached { used: usize, limit: usize },

    /// The feature is premium-only.
    #[error("{} requires the Premium plan", .0.title())]
    UpgradeRequired(UpgradeContext),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    /// The backend actor call failed.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Reading or writing local storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvoiceLimitReached { used, limit } => {
                ClientError::InvoiceLimitReached { used, limit }
            }
            CoreError::UpgradeRequired(context) => ClientError::UpgradeRequired(context),
            CoreError::Validation(e) => ClientError::Validation(e),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if the message can be shown to the user verbatim.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ClientError::ProfileNotFound
                | ClientError::Validation(_)
                | ClientError::NotFound { .. }
                | ClientError::InvoiceLimitReached { .. }
                | ClientError::UpgradeRequired(_)
        )
    }

    /// The upgrade prompt to show, if this error is a plan refusal.
    pub fn upgrade_context(&self) -> Option<UpgradeContext> {
        match self {
            ClientError::InvoiceLimitReached { .. } => Some(UpgradeContext::InvoiceLimit),
            ClientError::UpgradeRequired(context) => Some(*context),
            _ => None,
        }
    }

    pub(crate) fn not_found(entity: &str, id: impl ToString) -> Self {
        ClientError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}
