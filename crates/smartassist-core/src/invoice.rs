//! # Invoice Math
//!
//! Line totals for the single-item invoice form, and invoice numbering.
//!
//! Invoice GST is always added on top of the price (exclusive mode):
//!
//! ```text
//! quantity 3 × price 250.00 ──► item total   750.00
//!                               GST @ 18%    135.00
//!                               grand total  885.00
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round_to_paise;
use crate::slab::GstSlab;

/// What the user submits from the invoice form, after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub item_name: String,
    pub quantity: u64,
    pub price: f64,
    pub gst_slab: GstSlab,
}

/// Computed totals for one invoice line, rounded to paise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub item_total: f64,
    pub gst_amount: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Computes totals for `quantity` units at `price` each.
    ///
    /// ## Example
    /// ```rust
    /// use smartassist_core::invoice::InvoiceTotals;
    /// use smartassist_core::GstSlab;
    ///
    /// let totals = InvoiceTotals::compute(3, 250.0, GstSlab::Slab18);
    /// assert_eq!(totals.item_total, 750.0);
    /// assert_eq!(totals.gst_amount, 135.0);
    /// assert_eq!(totals.grand_total, 885.0);
    /// ```
    pub fn compute(quantity: u64, price: f64, slab: GstSlab) -> Self {
        let item_total = quantity as f64 * price;
        let gst_amount = item_total * (f64::from(slab.percentage()) / 100.0);
        InvoiceTotals {
            item_total: round_to_paise(item_total),
            gst_amount: round_to_paise(gst_amount),
            grand_total: round_to_paise(item_total + gst_amount),
        }
    }
}

impl InvoiceDraft {
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::compute(self.quantity, self.price, self.gst_slab)
    }
}

/// Formats the `sequence`-th invoice number (`INV-000042`).
pub fn invoice_number(sequence: u64) -> String {
    format!("INV-{:06}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_per_slab() {
        let t = InvoiceTotals::compute(1, 100.0, GstSlab::Slab5);
        assert_eq!((t.item_total, t.gst_amount, t.grand_total), (100.0, 5.0, 105.0));

        let t = InvoiceTotals::compute(2, 1000.0, GstSlab::Slab28);
        assert_eq!((t.item_total, t.gst_amount, t.grand_total), (2000.0, 560.0, 2560.0));
    }

    #[test]
    fn test_totals_round_to_paise() {
        let t = InvoiceTotals::compute(3, 33.33, GstSlab::Slab12);
        assert_eq!(t.item_total, 99.99);
        assert_eq!(t.gst_amount, 12.0);
        assert_eq!(t.grand_total, 111.99);
    }

    #[test]
    fn test_draft_totals() {
        let draft = InvoiceDraft {
            customer_name: "Ravi Traders".to_string(),
            customer_phone: "9876543210".to_string(),
            item_name: "Steel rods".to_string(),
            quantity: 10,
            price: 45.5,
            gst_slab: GstSlab::Slab18,
        };
        assert_eq!(draft.totals().grand_total, 536.9);
    }

    #[test]
    fn test_invoice_number() {
        assert_eq!(invoice_number(1), "INV-000001");
        assert_eq!(invoice_number(1_234_567), "INV-1234567");
    }
}
