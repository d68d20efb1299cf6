//! # Money Module
//!
//! Rounding and display helpers for rupee amounts.
//!
//! ## Why Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RUPEES CROSS THE BOUNDARY AS REAL NUMBERS                              │
//! │                                                                         │
//! │  The backend actor stores amounts as Float (f64). The calculator        │
//! │  takes whatever the user typed ("1180", "99.5") and the invoice         │
//! │  form multiplies quantity by price. So the engine works in f64 and      │
//! │  pins every OUTPUT to whole paise:                                      │
//! │                                                                         │
//! │    180.00000000000003  ──round_to_paise──►  180.00                     │
//! │    0.075               ──round_to_paise──►  0.08                       │
//! │                                                                         │
//! │  Rounding happens once, at the end, on each value independently.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Half-up at the paisa: an exact half rounds toward positive infinity, so
//! `2.345 → 2.35` (when the float really is the half) and `-0.005 → 0.00`.
//! This matches how the web frontend has always rounded displayed amounts.

/// Paise in one rupee.
pub const PAISE_PER_RUPEE: f64 = 100.0;

/// Rounds an amount to two decimal places (whole paise), half-up.
///
/// Total over all `f64` values: NaN stays NaN, infinities stay infinite.
///
/// ## Example
/// ```rust
/// use smartassist_core::money::round_to_paise;
///
/// assert_eq!(round_to_paise(180.00000000000003), 180.0);
/// assert_eq!(round_to_paise(2.5), 2.5);
/// assert_eq!(round_to_paise(0.125), 0.13);
/// assert!(round_to_paise(f64::NAN).is_nan());
/// ```
pub fn round_to_paise(amount: f64) -> f64 {
    round_half_up(amount * PAISE_PER_RUPEE) / PAISE_PER_RUPEE
}

/// Rounds to the nearest integer, exact halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // For NaN and ±inf the difference is NaN and the comparison is false.
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Converts an amount to integer paise, or `None` for non-finite input.
///
/// ## Example
/// ```rust
/// use smartassist_core::money::to_paise;
///
/// assert_eq!(to_paise(1180.0), Some(118_000));
/// assert_eq!(to_paise(2.5), Some(250));
/// assert_eq!(to_paise(f64::INFINITY), None);
/// ```
pub fn to_paise(amount: f64) -> Option<i64> {
    if !amount.is_finite() {
        return None;
    }
    let paise = round_half_up(amount * PAISE_PER_RUPEE);
    if paise.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(paise as i64)
}

/// Formats an amount as rupees with two decimals (`₹1180.00`).
///
/// ## Note
/// For debugging and plain-text output. The frontend does its own
/// locale-aware formatting (lakh/crore grouping).
pub fn format_inr(amount: f64) -> String {
    let rounded = round_to_paise(amount);
    if rounded.is_nan() {
        return "₹NaN".to_string();
    }
    if rounded < 0.0 {
        format!("-₹{:.2}", -rounded)
    } else {
        format!("₹{:.2}", rounded.abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
