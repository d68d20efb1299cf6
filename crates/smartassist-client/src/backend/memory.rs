//! # In-Memory Backend
//!
//! A complete [`Backend`] held in process memory, for offline use and tests.
//!
//! ## Sharing State Between Callers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   InMemoryBackend { caller: "asha" } ──┐                                │
//! │                                        ├──► Arc<RwLock<State>>          │
//! │   InMemoryBackend { caller: "ravi" } ──┘    profiles, invoices,         │
//! │        (created with for_caller)            calculations, content ...   │
//! │                                                                         │
//! │   Each handle acts as one authenticated caller.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invoice creation runs the same free-tier gate the UI runs, so a client
//! that skips its own check still cannot exceed the quota.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use smartassist_core::entitlement::is_invoice_limit_reached_at;
use smartassist_core::gst::compute_gst_for_slab;
use smartassist_core::invoice::{invoice_number, InvoiceDraft};
use smartassist_core::time::date_from_nanos;
use smartassist_core::{
    CaLead, Category, GstCalculation, GstSlab, Invoice, LeadStatus, LearningTopic, Plan,
    Reminder, TaxMode, TaxTip, UserProfile,
};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{seed, Backend};
use crate::clock::Clock;
use crate::config::ClientConfig;
use crate::error::ClientResult;

const INVOICE_STATUS_GENERATED: &str = "generated";

#[derive(Debug, Default)]
struct State {
    /// Keyed by caller identity.
    profiles: HashMap<String, UserProfile>,
    calculations: Vec<GstCalculation>,
    last_calculation_ts: i64,
    invoices: Vec<Invoice>,
    invoice_sequence: u64,
    statutory_dates: Vec<Reminder>,
    /// (owner caller, reminder)
    custom_reminders: Vec<(String, Reminder)>,
    tax_tips: Vec<TaxTip>,
    learning: Vec<LearningTopic>,
    /// Keyed by lead id; value is (owner caller, lead).
    ca_leads: BTreeMap<String, (String, CaLead)>,
}

impl State {
    fn seeded(fiscal_year: i32) -> Self {
        State {
            statutory_dates: seed::statutory_due_dates(fiscal_year),
            tax_tips: seed::tax_tips(),
            learning: seed::learning_content(),
            ..State::default()
        }
    }

    fn plan_for_email(&self, email: &str) -> Plan {
        self.profiles
            .values()
            .find(|p| p.email == email)
            .map(|p| p.plan)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    caller: String,
    state: Arc<RwLock<State>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryBackend {
    /// An empty backend with no preloaded content.
    pub fn new(caller: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self::with_state(caller.into(), State::default(), clock)
    }

    /// A backend preloaded with due dates for `fiscal_year`, tips and lessons.
    pub fn seeded(caller: impl Into<String>, clock: Arc<dyn Clock>, fiscal_year: i32) -> Self {
        Self::with_state(caller.into(), State::seeded(fiscal_year), clock)
    }

    /// Builds a backend as the configuration describes.
    pub fn from_config(
        config: &ClientConfig,
        caller: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        if !config.backend.seed_content {
            return Self::new(caller, clock);
        }
        let fiscal_year = config
            .backend
            .fiscal_year
            .unwrap_or_else(|| seed::fiscal_year_of(date_from_nanos(clock.now_nanos())));
        Self::seeded(caller, clock, fiscal_year)
    }

    fn with_state(caller: String, state: State, clock: Arc<dyn Clock>) -> Self {
        info!(caller = %caller, "In-memory backend created");
        InMemoryBackend {
            caller,
            state: Arc::new(RwLock::new(state)),
            clock,
        }
    }

    /// A handle for another caller over the same data.
    pub fn for_caller(&self, caller: impl Into<String>) -> Self {
        InMemoryBackend {
            caller: caller.into(),
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    async fn caller_email(&self) -> Option<String> {
        let state = self.state.read().await;
        state.profiles.get(&self.caller).map(|p| p.email.clone())
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    // =========================================================================
    // Profile
    // =========================================================================

    async fn get_caller_user_profile(&self) -> ClientResult<Option<UserProfile>> {
        let state = self.state.read().await;
        Ok(state.profiles.get(&self.caller).cloned())
    }

    async fn save_caller_user_profile(&self, profile: UserProfile) -> ClientResult<()> {
        debug!(caller = %self.caller, email = %profile.email, plan = %profile.plan, "Saving profile");
        let mut state = self.state.write().await;
        state.profiles.insert(self.caller.clone(), profile);
        Ok(())
    }

    // =========================================================================
    // Calculator
    // =========================================================================

    async fn create_gst_calculation(
        &self,
        user_email: &str,
        base_amount: f64,
        gst_slab: GstSlab,
        is_inclusive: bool,
    ) -> ClientResult<GstCalculation> {
        let result =
            compute_gst_for_slab(base_amount, gst_slab, TaxMode::from_inclusive(is_inclusive));

        let mut state = self.state.write().await;
        // Timestamps key the records, so they must be unique.
        let timestamp = self.clock.now_nanos().max(state.last_calculation_ts + 1);
        state.last_calculation_ts = timestamp;

        let record = GstCalculation {
            user_email: user_email.to_string(),
            base_amount,
            gst_slab,
            is_inclusive,
            gst_amount: result.gst_amount,
            cgst: result.cgst,
            sgst: result.sgst,
            total_amount: result.total_amount,
            timestamp,
            is_saved: true,
        };
        state.calculations.push(record.clone());

        debug!(email = %user_email, timestamp, "GST calculation stored");
        Ok(record)
    }

    async fn get_calculations_by_user(
        &self,
        user_email: &str,
    ) -> ClientResult<Vec<GstCalculation>> {
        let state = self.state.read().await;
        Ok(state
            .calculations
            .iter()
            .filter(|c| c.user_email == user_email)
            .cloned()
            .collect())
    }

    async fn delete_calculation(&self, user_email: &str, timestamp: i64) -> ClientResult<bool> {
        let mut state = self.state.write().await;
        let before = state.calculations.len();
        state
            .calculations
            .retain(|c| !(c.user_email == user_email && c.timestamp == timestamp));
        Ok(state.calculations.len() < before)
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    async fn create_invoice(
        &self,
        user_email: &str,
        draft: &InvoiceDraft,
    ) -> ClientResult<Option<Invoice>> {
        let now = self.clock.now_nanos();
        let mut state = self.state.write().await;

        let plan = state.plan_for_email(user_email);
        let existing = state.invoices.iter().filter(|i| i.user_email == user_email);
        if is_invoice_limit_reached_at(existing, plan, now) {
            info!(email = %user_email, %plan, "Invoice refused: period limit reached");
            return Ok(None);
        }

        state.invoice_sequence += 1;
        let totals = draft.totals();
        let invoice = Invoice {
            invoice_number: invoice_number(state.invoice_sequence),
            user_email: user_email.to_string(),
            customer_name: draft.customer_name.clone(),
            customer_phone: draft.customer_phone.clone(),
            item_name: draft.item_name.clone(),
            quantity: draft.quantity,
            price: draft.price,
            gst_slab: draft.gst_slab,
            item_total: totals.item_total,
            gst_amount: totals.gst_amount,
            grand_total: totals.grand_total,
            status: INVOICE_STATUS_GENERATED.to_string(),
            pdf_link: None,
            created_date: now,
        };
        state.invoices.push(invoice.clone());

        info!(email = %user_email, number = %invoice.invoice_number, "Invoice created");
        Ok(Some(invoice))
    }

    async fn get_user_invoices(&self, user_email: &str) -> ClientResult<Vec<Invoice>> {
        let state = self.state.read().await;
        Ok(state
            .invoices
            .iter()
            .filter(|i| i.user_email == user_email)
            .cloned()
            .collect())
    }

    async fn delete_invoice(&self, number: &str) -> ClientResult<bool> {
        let Some(email) = self.caller_email().await else {
            return Ok(false);
        };
        let mut state = self.state.write().await;
        let before = state.invoices.len();
        state
            .invoices
            .retain(|i| !(i.invoice_number == number && i.user_email == email));
        Ok(state.invoices.len() < before)
    }

    // =========================================================================
    // Reminders
    // =========================================================================

    async fn create_custom_reminder(
        &self,
        title: &str,
        description: &str,
        due_date: i64,
        reminder_enabled: bool,
    ) -> ClientResult<Reminder> {
        let email = self.caller_email().await;
        let reminder = Reminder {
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            due_date_type: smartassist_core::DueDateType::Custom,
            reminder_enabled,
            user_email: email,
            notification_date: None,
        };

        let mut state = self.state.write().await;
        state
            .custom_reminders
            .push((self.caller.clone(), reminder.clone()));
        Ok(reminder)
    }

    async fn get_upcoming_due_dates(&self) -> ClientResult<Vec<Reminder>> {
        let state = self.state.read().await;
        Ok(state.statutory_dates.clone())
    }

    async fn get_user_custom_reminders(&self) -> ClientResult<Vec<Reminder>> {
        let state = self.state.read().await;
        Ok(state
            .custom_reminders
            .iter()
            .filter(|(owner, _)| *owner == self.caller)
            .map(|(_, r)| r.clone())
            .collect())
    }

    // =========================================================================
    // Content
    // =========================================================================

    async fn get_tax_tips(&self) -> ClientResult<Vec<TaxTip>> {
        let state = self.state.read().await;
        Ok(state.tax_tips.clone())
    }

    async fn get_all_learning_content(&self) -> ClientResult<Vec<LearningTopic>> {
        let state = self.state.read().await;
        Ok(state.learning.clone())
    }

    async fn get_learning_content_by_category(
        &self,
        category: Category,
    ) -> ClientResult<Vec<LearningTopic>> {
        let state = self.state.read().await;
        Ok(state
            .learning
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect())
    }

    // =========================================================================
    // CA Support
    // =========================================================================

    async fn submit_ca_lead(
        &self,
        name: &str,
        phone: &str,
        query_description: &str,
        file_upload: Option<String>,
    ) -> ClientResult<CaLead> {
        let email = self.caller_email().await.unwrap_or_default();
        let lead = CaLead {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            query_description: query_description.to_string(),
            user_email: email,
            file_upload,
            status: LeadStatus::Pending,
            created_date: self.clock.now_nanos(),
        };

        let mut state = self.state.write().await;
        state
            .ca_leads
            .insert(lead.id.clone(), (self.caller.clone(), lead.clone()));

        info!(lead_id = %lead.id, "CA lead submitted");
        Ok(lead)
    }

    async fn get_user_ca_leads(&self) -> ClientResult<Vec<CaLead>> {
        let state = self.state.read().await;
        let mut leads: Vec<CaLead> = state
            .ca_leads
            .values()
            .filter(|(owner, _)| *owner == self.caller)
            .map(|(_, lead)| lead.clone())
            .collect();
        leads.sort_by_key(|l| l.created_date);
        Ok(leads)
    }

    async fn update_ca_lead_status(&self, lead_id: &str, status: LeadStatus) -> ClientResult<bool> {
        let mut state = self.state.write().await;
        match state.ca_leads.get_mut(lead_id) {
            Some((_, lead)) => {
                debug!(lead_id, status = status.label(), "CA lead status updated");
                lead.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use smartassist_core::entitlement::BILLING_PERIOD_MS;
    use smartassist_core::time::NANOS_PER_MILLI;

    const NOW: i64 = 700 * BILLING_PERIOD_MS * NANOS_PER_MILLI;

    fn backend() -> (InMemoryBackend, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(NOW));
        let backend = InMemoryBackend::seeded("principal-asha", clock.clone(), 2025);
        (backend, clock)
    }

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            customer_name: "Ravi Traders".to_string(),
            customer_phone: "9876543210".to_string(),
            item_name: "Steel rods".to_string(),
            quantity: 4,
            price: 250.0,
            gst_slab: GstSlab::Slab18,
        }
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let (backend, _) = backend();
        assert!(backend.get_caller_user_profile().await.unwrap().is_none());

        let profile = UserProfile::new_free("Asha", "asha@example.in");
        backend.save_caller_user_profile(profile.clone()).await.unwrap();
        assert_eq!(backend.get_caller_user_profile().await.unwrap(), Some(profile));

        let other = backend.for_caller("principal-ravi");
        assert!(other.get_caller_user_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_calculation_timestamps_are_unique() {
        let (backend, _) = backend();
        let a = backend
            .create_gst_calculation("asha@example.in", 1000.0, GstSlab::Slab18, false)
            .await
            .unwrap();
        let b = backend
            .create_gst_calculation("asha@example.in", 1180.0, GstSlab::Slab18, true)
            .await
            .unwrap();

        assert_eq!(a.total_amount, 1180.0);
        assert_eq!(b.gst_amount, 180.0);
        assert!(b.timestamp > a.timestamp);

        assert!(backend
            .delete_calculation("asha@example.in", a.timestamp)
            .await
            .unwrap());
        assert!(!backend
            .delete_calculation("asha@example.in", a.timestamp)
            .await
            .unwrap());
        assert_eq!(
            backend
                .get_calculations_by_user("asha@example.in")
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_free_plan_invoice_refused_after_three() {
        let (backend, clock) = backend();
        backend
            .save_caller_user_profile(UserProfile::new_free("Asha", "asha@example.in"))
            .await
            .unwrap();

        for n in 1..=3 {
            let invoice = backend
                .create_invoice("asha@example.in", &draft())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(invoice.invoice_number, invoice_number(n));
            assert_eq!(invoice.grand_total, 1180.0);
        }
        assert!(backend
            .create_invoice("asha@example.in", &draft())
            .await
            .unwrap()
            .is_none());

        // Next billing period resets the quota.
        clock.advance(BILLING_PERIOD_MS * NANOS_PER_MILLI);
        assert!(backend
            .create_invoice("asha@example.in", &draft())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_premium_plan_is_unlimited() {
        let (backend, _) = backend();
        let mut profile = UserProfile::new_free("Asha", "asha@example.in");
        profile.plan = Plan::Premium;
        backend.save_caller_user_profile(profile).await.unwrap();

        for _ in 0..5 {
            assert!(backend
                .create_invoice("asha@example.in", &draft())
                .await
                .unwrap()
                .is_some());
        }
    }

    #[tokio::test]
    async fn test_delete_invoice_only_own() {
        let (backend, _) = backend();
        backend
            .save_caller_user_profile(UserProfile::new_free("Asha", "asha@example.in"))
            .await
            .unwrap();
        let invoice = backend
            .create_invoice("asha@example.in", &draft())
            .await
            .unwrap()
            .unwrap();

        let ravi = backend.for_caller("principal-ravi");
        ravi.save_caller_user_profile(UserProfile::new_free("Ravi", "ravi@example.in"))
            .await
            .unwrap();
        assert!(!ravi.delete_invoice(&invoice.invoice_number).await.unwrap());
        assert!(backend.delete_invoice(&invoice.invoice_number).await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_reminders_are_per_caller() {
        let (backend, _) = backend();
        backend
            .create_custom_reminder("Pay rent", "", NOW, true)
            .await
            .unwrap();

        assert_eq!(backend.get_user_custom_reminders().await.unwrap().len(), 1);
        let ravi = backend.for_caller("principal-ravi");
        assert!(ravi.get_user_custom_reminders().await.unwrap().is_empty());
        assert_eq!(backend.get_upcoming_due_dates().await.unwrap().len(), 29);
    }

    #[tokio::test]
    async fn test_ca_lead_lifecycle() {
        let (backend, _) = backend();
        let lead = backend
            .submit_ca_lead("Asha", "9876543210", "ITC mismatch in GSTR-2B", None)
            .await
            .unwrap();
        assert_eq!(lead.status, LeadStatus::Pending);

        assert!(backend
            .update_ca_lead_status(&lead.id, LeadStatus::Assigned)
            .await
            .unwrap());
        assert!(!backend
            .update_ca_lead_status("no-such-lead", LeadStatus::Closed)
            .await
            .unwrap());

        let leads = backend.get_user_ca_leads().await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].status, LeadStatus::Assigned);
    }

    #[tokio::test]
    async fn test_unseeded_backend_is_empty() {
        let backend = InMemoryBackend::new("principal-asha", Arc::new(FixedClock::new(NOW)));
        assert!(backend.get_tax_tips().await.unwrap().is_empty());
        assert!(backend.get_all_learning_content().await.unwrap().is_empty());
    }
}
