//! # Error Types
//!
//! Domain-specific error types for smartassist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  smartassist-core errors (this file)                                   │
//! │  ├── CoreError        - Business rule refusals                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  smartassist-client errors (separate crate)                            │
//! │  └── ClientError      - Backend, storage and config failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → Frontend toast      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT Here
//! The GST engine and the entitlement gate are total functions. They have no
//! error path at all, so nothing in this file is produced by them.

use thiserror::Error;

use crate::entitlement::UpgradeContext;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule refusals.
///
/// These are decisions, not faults: the caller asked for something the
/// user's plan or current state does not permit.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The free-tier invoice quota for the current period is used up.
    ///
    /// ## User Workflow
    /// ```text
    /// Create Invoice
    ///      │
    ///      ▼
    /// Gate: 3 invoices already this period (free plan)
    ///      │
    ///      ▼
    /// InvoiceLimitReached { used: 3, limit: 3 }
    ///      │
    ///      ▼
    /// UI shows the "Invoice Limit Reached" upgrade prompt
    /// ```
    #[error("Invoice limit reached: {used} of {limit} invoices used this period")]
    InvoiceLimitReached { used: usize, limit: usize },

    /// The feature needs the premium plan.
    #[error("{} requires the Premium plan", .0.title())]
    UpgradeRequired(UpgradeContext),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by [`crate::validation`] before any calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (not a number, malformed GSTIN, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
