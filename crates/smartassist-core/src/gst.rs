//! # GST Calculation Engine
//!
//! Computes the GST breakdown of an amount for a given rate.
//!
//! ## The Two Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXCLUSIVE (tax added on top)        │  INCLUSIVE (tax already inside)  │
//! │  ─────────────────────────────       │  ──────────────────────────────  │
//! │  base   = 1000.00                    │  base   = 1180.00                │
//! │  gst    = base × r        = 180.00   │  gst    = base × r / (1 + r)     │
//! │  total  = base + gst      = 1180.00  │         = 180.00                 │
//! │                                      │  total  = base    = 1180.00      │
//! │                                                                         │
//! │  Both modes:  cgst = sgst = gst / 2  = 90.00                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the intra-state split (CGST + SGST) is modelled. Inter-state IGST is
//! not.
//!
//! ## Rounding
//! The four outputs are rounded to paise independently, each from its own
//! unrounded value. `cgst` and `sgst` come from the same unrounded half, so
//! they are always equal. Their sum can differ from the rounded `gst_amount`
//! by one paisa when the tax has an odd number of paise:
//!
//! ```text
//! gst = 0.01   →  half = 0.005  →  cgst = sgst = 0.01  →  sum 0.02
//! ```
//!
//! ## Totality
//! No validation happens here. Zero, negative and non-finite inputs produce
//! mathematically consistent (if meaningless) results.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round_to_paise;
use crate::slab::GstSlab;

// =============================================================================
// Tax Mode
// =============================================================================

/// Whether the quoted amount already contains GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// GST is added on top of the amount.
    #[default]
    Exclusive,
    /// The amount is the tax-inclusive total.
    Inclusive,
}

impl TaxMode {
    #[inline]
    pub const fn from_inclusive(inclusive: bool) -> Self {
        if inclusive {
            TaxMode::Inclusive
        } else {
            TaxMode::Exclusive
        }
    }

    #[inline]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, TaxMode::Inclusive)
    }
}

// =============================================================================
// GST Breakdown
// =============================================================================

/// Result of a GST computation, every field rounded to paise.
///
/// Ephemeral: it has no identity and is never stored as-is. The persisted
/// form is [`crate::types::GstCalculation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GstBreakdown {
    /// Total GST.
    pub gst_amount: f64,
    /// Central GST, half of the tax.
    pub cgst: f64,
    /// State GST, half of the tax.
    pub sgst: f64,
    /// Amount payable including GST.
    pub total_amount: f64,
}

impl GstBreakdown {
    /// The value before tax (`total - gst`), rounded to paise.
    ///
    /// ## Example
    /// ```rust
    /// use smartassist_core::gst::compute_gst;
    ///
    /// let b = compute_gst(1180.0, 18.0, true);
    /// assert_eq!(b.taxable_value(), 1000.0);
    /// ```
    pub fn taxable_value(&self) -> f64 {
        round_to_paise(self.total_amount - self.gst_amount)
    }
}

/// Computes the GST breakdown for `base_amount` at `rate_percent`.
///
/// ## Arguments
/// * `base_amount` - The quoted amount in rupees
/// * `rate_percent` - The rate as a percentage (18.0 for 18%)
/// * `inclusive` - `true` when `base_amount` already contains the tax
///
/// ## Example
/// ```rust
/// use smartassist_core::gst::compute_gst;
///
/// let b = compute_gst(100.0, 5.0, false);
/// assert_eq!(b.gst_amount, 5.0);
/// assert_eq!(b.cgst, 2.5);
/// assert_eq!(b.sgst, 2.5);
/// assert_eq!(b.total_amount, 105.0);
/// ```
///
/// ## User Workflow
/// ```text
/// Calculator form: amount "1180", slab 18%, inclusive ✓
///      │
///      ▼
/// validation::parse_amount ─► 1180.0
///      │
///      ▼
/// compute_gst(1180.0, 18.0, true) ← THIS FUNCTION
///      │
///      ▼
/// GST 180.00 | CGST 90.00 | SGST 90.00 | Total 1180.00
/// ```
pub fn compute_gst(base_amount: f64, rate_percent: f64, inclusive: bool) -> GstBreakdown {
    let rate = rate_percent / 100.0;

    let (gst_amount, total_amount) = if inclusive {
        (base_amount * rate / (1.0 + rate), base_amount)
    } else {
        let gst = base_amount * rate;
        (gst, base_amount + gst)
    };

    let half = gst_amount / 2.0;

    GstBreakdown {
        gst_amount: round_to_paise(gst_amount),
        cgst: round_to_paise(half),
        sgst: round_to_paise(half),
        total_amount: round_to_paise(total_amount),
    }
}

/// Typed convenience over [`compute_gst`].
pub fn compute_gst_for_slab(base_amount: f64, slab: GstSlab, mode: TaxMode) -> GstBreakdown {
    compute_gst(
        base_amount,
        f64::from(slab.percentage()),
        mode.is_inclusive(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
