//! # Invoice Service
//!
//! Invoice creation behind the free-tier gate.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create(form)                                                           │
//! │     │                                                                   │
//! │     ├── validate fields ──────────────► Err(Validation)                 │
//! │     ├── load profile ─────────────────► Err(ProfileNotFound)            │
//! │     ├── count this period's invoices                                    │
//! │     │   gate says limit reached ──────► Err(InvoiceLimitReached)        │
//! │     ├── backend.create_invoice                                          │
//! │     │   backend refuses (None) ───────► Err(InvoiceLimitReached)        │
//! │     ▼                                                                   │
//! │  Ok(Invoice)                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use smartassist_core::entitlement::FREE_TIER_INVOICE_LIMIT;
use smartassist_core::invoice::InvoiceDraft;
use smartassist_core::validation::{
    parse_amount, parse_quantity, parse_slab, validate_phone, validate_required,
};
use smartassist_core::{Invoice, InvoiceQuota};
use tracing::{info, warn};

use super::require_profile;
use crate::backend::Backend;
use crate::clock::Clock;
use crate::error::{ClientError, ClientResult};

/// Raw invoice form fields, as typed.
#[derive(Debug, Clone, Default)]
pub struct InvoiceForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub item_name: String,
    pub quantity: String,
    pub price: String,
    pub gst_slab: String,
}

impl InvoiceForm {
    /// Validates every field into a draft.
    pub fn validate(&self) -> ClientResult<InvoiceDraft> {
        Ok(InvoiceDraft {
            customer_name: validate_required("customer name", &self.customer_name)?,
            customer_phone: validate_phone(&self.customer_phone)?,
            item_name: validate_required("item name", &self.item_name)?,
            quantity: parse_quantity(&self.quantity)?,
            price: parse_amount("price", &self.price)?,
            gst_slab: parse_slab(&self.gst_slab)?,
        })
    }
}

pub struct InvoiceService {
    backend: Arc<dyn Backend>,
    clock: Arc<dyn Clock>,
}

impl InvoiceService {
    pub fn new(backend: Arc<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        InvoiceService { backend, clock }
    }

    /// The caller's invoice usage in the current billing period.
    pub async fn quota(&self) -> ClientResult<InvoiceQuota> {
        let profile = require_profile(self.backend.as_ref()).await?;
        let invoices = self.backend.get_user_invoices(&profile.email).await?;
        Ok(InvoiceQuota::compute(
            &invoices,
            profile.plan,
            self.clock.now_nanos(),
        ))
    }

    pub async fn create(&self, form: &InvoiceForm) -> ClientResult<Invoice> {
        let draft = form.validate()?;
        let profile = require_profile(self.backend.as_ref()).await?;

        let invoices = self.backend.get_user_invoices(&profile.email).await?;
        let quota = InvoiceQuota::compute(&invoices, profile.plan, self.clock.now_nanos());
        if quota.is_exhausted() {
            info!(email = %profile.email, %quota, "Invoice blocked by plan gate");
            return Err(limit_error(&quota));
        }

        match self.backend.create_invoice(&profile.email, &draft).await? {
            Some(invoice) => {
                info!(
                    email = %profile.email,
                    number = %invoice.invoice_number,
                    grand_total = invoice.grand_total,
                    "Invoice created"
                );
                Ok(invoice)
            }
            None => {
                warn!(email = %profile.email, "Backend refused invoice creation");
                Err(refusal_error(&quota))
            }
        }
    }

    /// The caller's invoices, newest first.
    pub async fn list(&self) -> ClientResult<Vec<Invoice>> {
        let profile = require_profile(self.backend.as_ref()).await?;
        let mut invoices = self.backend.get_user_invoices(&profile.email).await?;
        invoices.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(invoices)
    }

    pub async fn delete(&self, invoice_number: &str) -> ClientResult<()> {
        if self.backend.delete_invoice(invoice_number).await? {
            Ok(())
        } else {
            Err(ClientError::not_found("Invoice", invoice_number))
        }
    }
}

fn limit_error(quota: &InvoiceQuota) -> ClientError {
    ClientError::InvoiceLimitReached {
        used: quota.used,
        limit: quota.limit.unwrap_or(quota.used),
    }
}

/// The backend only refuses once its own count has hit the limit, which
/// can be ahead of the count taken here.
fn refusal_error(quota: &InvoiceQuota) -> ClientError {
    let limit = quota.limit.unwrap_or(FREE_TIER_INVOICE_LIMIT);
    ClientError::InvoiceLimitReached { used: limit, limit }
}
