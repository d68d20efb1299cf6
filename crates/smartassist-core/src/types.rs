//! # Domain Types
//!
//! Records owned and stored by the backend actor, as this application
//! sees them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  UserProfile    │   │    Invoice      │   │ GstCalculation  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  email (key)    │   │  invoice_number │   │  timestamp (key)│       │
//! │  │  plan           │   │  gst_slab       │   │  base_amount    │       │
//! │  │  gstin          │   │  grand_total    │   │  cgst / sgst    │       │
//! │  │  role           │   │  created_date   │   │  is_inclusive   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Reminder      │   │  LearningTopic  │   │    CaLead       │       │
//! │  │  due_date       │   │  category       │   │  status         │       │
//! │  │  due_date_type  │   │  quiz_question  │   │  query          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  TaxTip { title, short_description, full_content, is_premium_only }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All timestamps are nanoseconds since the epoch (`i64`), the backend's
//! native time representation. All amounts are rupees (`f64`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entitlement::Plan;
use crate::slab::GstSlab;

// =============================================================================
// User Profile
// =============================================================================

/// Role stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Access-control role of the calling principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

/// A business owner's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Email address. Invoices and calculations are keyed by it.
    pub email: String,
    pub business_name: Option<String>,
    /// 15-character GST identification number.
    pub gstin: Option<String>,
    pub plan: Plan,
    pub role: Role,
    /// When the premium subscription lapses.
    pub subscription_expiry: Option<i64>,
}

impl UserProfile {
    /// A fresh free-plan profile, as created on first sign-in.
    pub fn new_free(name: impl Into<String>, email: impl Into<String>) -> Self {
        UserProfile {
            name: name.into(),
            email: email.into(),
            business_name: None,
            gstin: None,
            plan: Plan::Free,
            role: Role::User,
            subscription_expiry: None,
        }
    }

    #[inline]
    pub fn is_premium(&self) -> bool {
        self.plan.is_premium()
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A single-line tax invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    pub user_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub item_name: String,
    pub quantity: u64,
    /// Unit price before tax.
    pub price: f64,
    pub gst_slab: GstSlab,
    /// `quantity × price`.
    pub item_total: f64,
    pub gst_amount: f64,
    pub grand_total: f64,
    pub status: String,
    pub pdf_link: Option<String>,
    /// Creation time; drives the free-tier quota.
    pub created_date: i64,
}

// =============================================================================
// GST Calculation
// =============================================================================

/// A saved calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GstCalculation {
    pub user_email: String,
    pub base_amount: f64,
    pub gst_slab: GstSlab,
    pub is_inclusive: bool,
    pub gst_amount: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total_amount: f64,
    /// Creation time; doubles as the record key for deletion.
    pub timestamp: i64,
    pub is_saved: bool,
}

// =============================================================================
// Reminders
// =============================================================================

/// Kind of deadline a reminder tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DueDateType {
    GstFiling,
    AdvanceTax,
    Custom,
}

impl DueDateType {
    pub const fn label(self) -> &'static str {
        match self {
            DueDateType::GstFiling => "GST Filing",
            DueDateType::AdvanceTax => "Advance Tax",
            DueDateType::Custom => "Custom",
        }
    }
}

/// A statutory due date or a user's own reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub title: String,
    pub description: String,
    pub due_date: i64,
    pub due_date_type: DueDateType,
    pub reminder_enabled: bool,
    /// Owner; `None` for statutory dates shared by everyone.
    pub user_email: Option<String>,
    pub notification_date: Option<i64>,
}

// =============================================================================
// Content
// =============================================================================

/// A tax-saving tip. Some are reserved for premium users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxTip {
    pub title: String,
    pub short_description: String,
    pub full_content: String,
    pub is_premium_only: bool,
}

/// Learning section a topic belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    GstBasics,
    Itc,
    Filing,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::GstBasics, Category::Itc, Category::Filing];

    pub const fn label(self) -> &'static str {
        match self {
            Category::GstBasics => "GST Basics",
            Category::Itc => "Input Tax Credit",
            Category::Filing => "Filing",
        }
    }
}

/// One lesson, optionally followed by a one-question quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LearningTopic {
    pub topic_title: String,
    pub description: String,
    pub category: Category,
    pub display_order: u32,
    pub quiz_question: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

// =============================================================================
// CA Support
// =============================================================================

/// Progress of a support query through the CA desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum LeadStatus {
    #[default]
    Pending,
    Assigned,
    Closed,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::Assigned => "Assigned",
            LeadStatus::Closed => "Closed",
        }
    }
}

/// A query raised with a chartered accountant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CaLead {
    /// Backend-assigned key (UUID v4), used to update the status.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub query_description: String,
    pub user_email: String,
    pub file_upload: Option<String>,
    pub status: LeadStatus,
    pub created_date: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
