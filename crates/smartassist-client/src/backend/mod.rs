//! # Backend Actor
//!
//! The remote actor that owns all persistent records. Every call is made on
//! behalf of an authenticated caller; "caller" methods act on that identity.
//!
//! ## Call Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Backend (trait)                                 │
//! │                                                                         │
//! │  Profile        get_caller_user_profile / save_caller_user_profile      │
//! │  Calculator     create_gst_calculation / get_calculations_by_user /     │
//! │                 delete_calculation                                      │
//! │  Invoices       create_invoice (None = refused by the plan gate) /      │
//! │                 get_user_invoices / delete_invoice                      │
//! │  Reminders      create_custom_reminder / get_upcoming_due_dates /       │
//! │                 get_user_custom_reminders                               │
//! │  Content        get_tax_tips / get_all_learning_content /               │
//! │                 get_learning_content_by_category                        │
//! │  CA support     submit_ca_lead / get_user_ca_leads /                    │
//! │                 update_ca_lead_status                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`memory::InMemoryBackend`] is a complete in-process implementation.

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use smartassist_core::invoice::InvoiceDraft;
use smartassist_core::{
    CaLead, Category, GstCalculation, GstSlab, Invoice, LeadStatus, LearningTopic, Reminder,
    TaxTip, UserProfile,
};

use crate::error::ClientResult;

pub use memory::InMemoryBackend;

#[async_trait]
pub trait Backend: Send + Sync {
    // =========================================================================
    // Profile
    // =========================================================================

    async fn get_caller_user_profile(&self) -> ClientResult<Option<UserProfile>>;

    async fn save_caller_user_profile(&self, profile: UserProfile) -> ClientResult<()>;

    // =========================================================================
    // Calculator
    // =========================================================================

    /// Computes and stores a calculation; the stored record is returned.
    async fn create_gst_calculation(
        &self,
        user_email: &str,
        base_amount: f64,
        gst_slab: GstSlab,
        is_inclusive: bool,
    ) -> ClientResult<GstCalculation>;

    async fn get_calculations_by_user(&self, user_email: &str)
        -> ClientResult<Vec<GstCalculation>>;

    /// Returns false if no such calculation exists.
    async fn delete_calculation(&self, user_email: &str, timestamp: i64) -> ClientResult<bool>;

    // =========================================================================
    // Invoices
    // =========================================================================

    /// Returns `None` when the user's plan does not allow another invoice.
    async fn create_invoice(
        &self,
        user_email: &str,
        draft: &InvoiceDraft,
    ) -> ClientResult<Option<Invoice>>;

    async fn get_user_invoices(&self, user_email: &str) -> ClientResult<Vec<Invoice>>;

    async fn delete_invoice(&self, invoice_number: &str) -> ClientResult<bool>;

    // =========================================================================
    // Reminders
    // =========================================================================

    async fn create_custom_reminder(
        &self,
        title: &str,
        description: &str,
        due_date: i64,
        reminder_enabled: bool,
    ) -> ClientResult<Reminder>;

    /// Statutory due dates shared by all users.
    async fn get_upcoming_due_dates(&self) -> ClientResult<Vec<Reminder>>;

    async fn get_user_custom_reminders(&self) -> ClientResult<Vec<Reminder>>;

    // =========================================================================
    // Content
    // =========================================================================

    async fn get_tax_tips(&self) -> ClientResult<Vec<TaxTip>>;

    async fn get_all_learning_content(&self) -> ClientResult<Vec<LearningTopic>>;

    async fn get_learning_content_by_category(
        &self,
        category: Category,
    ) -> ClientResult<Vec<LearningTopic>>;

    // =========================================================================
    // CA Support
    // =========================================================================

    async fn submit_ca_lead(
        &self,
        name: &str,
        phone: &str,
        query_description: &str,
        file_upload: Option<String>,
    ) -> ClientResult<CaLead>;

    async fn get_user_ca_leads(&self) -> ClientResult<Vec<CaLead>>;

    /// Returns false if no lead has this key.
    async fn update_ca_lead_status(&self, lead_id: &str, status: LeadStatus)
        -> ClientResult<bool>;
}
