//! # GST Slabs
//!
//! The four legal GST rate tiers and their conversions.
//!
//! ## Slab Table
//! ```text
//! ┌──────────┬────────────┬──────────────────────────────────────────────┐
//! │  Slab    │  Wire name │  Typical goods / services                    │
//! ├──────────┼────────────┼──────────────────────────────────────────────┤
//! │   5%     │  slab5     │  Essentials, transport                       │
//! │  12%     │  slab12    │  Processed food, business services           │
//! │  18%     │  slab18    │  Most services (DEFAULT)                     │
//! │  28%     │  slab28    │  Luxury and sin goods                        │
//! └──────────┴────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! ## Two Ways In
//! - [`GstSlab::from_percentage`] is lenient: anything that is not exactly
//!   5, 12, 18 or 28 becomes the 18% slab. Used where a number has already
//!   been chosen from the slab picker.
//! - [`GstSlab::from_str`](std::str::FromStr) is strict and rejects unknown
//!   input. Used by [`crate::validation`] on raw user input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// A GST rate slab.
///
/// The mapping to percentages is total and bijective over these four values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum GstSlab {
    #[serde(rename = "slab5")]
    Slab5,
    #[serde(rename = "slab12")]
    Slab12,
    #[serde(rename = "slab18")]
    #[default]
    Slab18,
    #[serde(rename = "slab28")]
    Slab28,
}

impl GstSlab {
    /// All slabs in ascending order of rate.
    pub const ALL: [GstSlab; 4] = [
        GstSlab::Slab5,
        GstSlab::Slab12,
        GstSlab::Slab18,
        GstSlab::Slab28,
    ];

    /// The slab substituted for any unrecognized percentage.
    pub const DEFAULT: GstSlab = GstSlab::Slab18;

    /// Returns the slab's rate as a whole percentage.
    ///
    /// ## Example
    /// ```rust
    /// use smartassist_core::GstSlab;
    ///
    /// assert_eq!(GstSlab::Slab5.percentage(), 5);
    /// assert_eq!(GstSlab::Slab28.percentage(), 28);
    /// ```
    #[inline]
    pub const fn percentage(self) -> u32 {
        match self {
            GstSlab::Slab5 => 5,
            GstSlab::Slab12 => 12,
            GstSlab::Slab18 => 18,
            GstSlab::Slab28 => 28,
        }
    }

    /// Maps a percentage to its slab, falling back to 18%.
    ///
    /// ## Fallback Policy
    /// Any value other than exactly 5, 12, 18 or 28 (including 0, negative,
    /// fractional and NaN) silently yields [`GstSlab::Slab18`]. This never
    /// fails. Callers holding raw user input should use the strict
    /// [`FromStr`] parser instead.
    ///
    /// ## Example
    /// ```rust
    /// use smartassist_core::GstSlab;
    ///
    /// assert_eq!(GstSlab::from_percentage(12.0), GstSlab::Slab12);
    /// assert_eq!(GstSlab::from_percentage(7.0), GstSlab::Slab18);
    /// assert_eq!(GstSlab::from_percentage(-5.0), GstSlab::Slab18);
    /// ```
    pub fn from_percentage(percentage: f64) -> GstSlab {
        GstSlab::ALL
            .into_iter()
            .find(|slab| f64::from(slab.percentage()) == percentage)
            .unwrap_or(GstSlab::DEFAULT)
    }

    /// Returns the rate as a fraction (`0.18` for the 18% slab).
    #[inline]
    pub fn rate(self) -> f64 {
        f64::from(self.percentage()) / 100.0
    }

    /// Returns the backend's wire name (`"slab18"`).
    pub const fn wire_name(self) -> &'static str {
        match self {
            GstSlab::Slab5 => "slab5",
            GstSlab::Slab12 => "slab12",
            GstSlab::Slab18 => "slab18",
            GstSlab::Slab28 => "slab28",
        }
    }
}

impl fmt::Display for GstSlab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

impl FromStr for GstSlab {
    type Err = ValidationError;

    /// Strict parse of `"18"`, `"18%"` or `"slab18"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s.strip_suffix('%').unwrap_or(s).trim();

        GstSlab::ALL
            .into_iter()
            .find(|slab| slab.wire_name() == s || number == slab.percentage().to_string())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "gst slab".to_string(),
                allowed: GstSlab::ALL.iter().map(|s| s.percentage().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
