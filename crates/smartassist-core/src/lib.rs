//! # smartassist-core: Pure Business Logic for SmartAssist GST
//!
//! This crate holds the rules of the application as pure functions with
//! zero I/O dependencies: GST arithmetic, the free/premium invoice gate,
//! the record types the backend actor stores, and input validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SmartAssist GST Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web Frontend (TypeScript)                      │   │
//! │  │   Calculator ─► Invoices ─► Reminders ─► Learn ─► Upgrade      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ts-rs bindings                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               smartassist-client (services)                     │   │
//! │  │   CalculatorService, InvoiceService, ReminderService, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ smartassist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌─────────────┐  ┌───────────┐   │   │
//! │  │   │   slab   │  │   gst    │  │ entitlement │  │ validation│   │   │
//! │  │   │ GstSlab  │  │ compute_ │  │ Plan, quota │  │  parsers  │   │   │
//! │  │   │ 5/12/18/ │  │   gst    │  │  30d bucket │  │  checks   │   │   │
//! │  │   └──────────┘  └──────────┘  └─────────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO BACKEND CALLS • NO FILES • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`slab`] - The four legal GST rate slabs
//! - [`gst`] - GST breakdown (CGST/SGST split, inclusive/exclusive)
//! - [`entitlement`] - Free/premium gating and the invoice quota
//! - [`money`] - Paise rounding and rupee display
//! - [`types`] - Records stored by the backend actor
//! - [`invoice`] - Invoice line totals and numbering
//! - [`reminder`] - Due-date ordering
//! - [`learning`] - Learning progress and quiz checks
//! - [`time`] - Nanosecond timestamp helpers
//! - [`validation`] - Boundary validation of user input
//! - [`error`] - Domain error types
//!
//! ## Totality
//!
//! The calculation engine and the entitlement gate never fail. They accept
//! any numeric input and propagate it mathematically (NaN in, NaN out).
//! Rejecting bad input is the job of [`validation`], which callers run first.
//!
//! ## Example Usage
//!
//! ```rust
//! use smartassist_core::gst::compute_gst;
//!
//! let breakdown = compute_gst(1000.0, 18.0, false);
//! assert_eq!(breakdown.gst_amount, 180.0);
//! assert_eq!(breakdown.cgst, 90.0);
//! assert_eq!(breakdown.sgst, 90.0);
//! assert_eq!(breakdown.total_amount, 1180.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entitlement;
pub mod error;
pub mod gst;
pub mod invoice;
pub mod learning;
pub mod money;
pub mod reminder;
pub mod slab;
pub mod time;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use entitlement::{
    current_period_invoice_count, is_invoice_limit_reached, is_invoice_limit_reached_at,
    CreatedAt, Feature, InvoiceQuota, Plan, UpgradeContext,
};
pub use error::{CoreError, ValidationError};
pub use gst::{compute_gst, GstBreakdown, TaxMode};
pub use slab::GstSlab;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity on a single invoice line.
///
/// Guards against typing 10000 instead of 10 in the invoice form.
pub const MAX_INVOICE_QUANTITY: u64 = 9_999;

/// Maximum length of free-text fields (names, titles).
pub const MAX_TEXT_LEN: usize = 200;

/// Maximum length of long-form text (a query to a CA).
pub const MAX_QUERY_LEN: usize = 5_000;
