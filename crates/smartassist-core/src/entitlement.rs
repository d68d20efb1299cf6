//! # Entitlement Gate
//!
//! Decides what a user's plan lets them do, chiefly whether they may create
//! another invoice in the current period.
//!
//! ## The Free-Tier Invoice Quota
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Epoch-Anchored 30-Day Periods                          │
//! │                                                                         │
//! │  period_index = ⌊ (created_nanos / 1_000_000) / 2_592_000_000 ⌋        │
//! │                                                                         │
//! │  1970-01-01                                                             │
//! │  │◄── period 0 ──►│◄── period 1 ──►│ ... │◄─ period N ─►│◄─ N+1 ─►│     │
//! │                                          ▲          ▲                   │
//! │                                    invoice A    now                     │
//! │                                                                         │
//! │  Free plan:    count invoices with period_index == index(now)           │
//! │                blocked when count >= 3                                  │
//! │  Premium plan: never blocked                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Calendar Months
//! Periods are exactly 30 days long and anchored to the Unix epoch, so they
//! drift against calendar months and reset at an arbitrary time of day.
//! An invoice made an hour before a period boundary does not count after
//! it, even though it is far less than 30 days old.
//!
//! ## Totality
//! Every function here is total. An empty invoice list means "none this
//! period"; there is no separate "not loaded yet" state, so callers must not
//! consult the gate before the invoice list has arrived.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::time::{nanos_to_millis, now_nanos};
use crate::types::{Invoice, TaxTip};

// =============================================================================
// Constants
// =============================================================================

/// Length of one quota period: 30 × 24 × 3600 × 1000 milliseconds.
pub const BILLING_PERIOD_MS: i64 = 2_592_000_000;

/// Invoices a free-plan user may create per period.
pub const FREE_TIER_INVOICE_LIMIT: usize = 3;

// =============================================================================
// Plan
// =============================================================================

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Plan {
    #[default]
    Free,
    Premium,
}

impl Plan {
    #[inline]
    pub const fn is_premium(self) -> bool {
        matches!(self, Plan::Premium)
    }

    #[inline]
    pub const fn from_premium(is_premium: bool) -> Self {
        if is_premium {
            Plan::Premium
        } else {
            Plan::Free
        }
    }

    /// Per-period invoice cap, `None` when unlimited.
    pub const fn invoice_limit(self) -> Option<usize> {
        match self {
            Plan::Free => Some(FREE_TIER_INVOICE_LIMIT),
            Plan::Premium => None,
        }
    }

    /// Whether the plan includes `feature` at all.
    ///
    /// Invoice generation is allowed on both plans; the free plan's cap is
    /// enforced separately by [`is_invoice_limit_reached_at`].
    pub const fn allows(self, feature: Feature) -> bool {
        match feature {
            Feature::GstCalculator
            | Feature::InvoiceGeneration
            | Feature::DueDateReminders
            | Feature::LearningContent
            | Feature::BasicTaxTips => true,
            Feature::AdvancedTaxTips | Feature::CaSupport | Feature::AdFree => self.is_premium(),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Free => write!(f, "free"),
            Plan::Premium => write!(f, "premium"),
        }
    }
}

/// Product features, as listed on the upgrade page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    GstCalculator,
    InvoiceGeneration,
    DueDateReminders,
    LearningContent,
    BasicTaxTips,
    AdvancedTaxTips,
    CaSupport,
    AdFree,
}

/// Whether `tip` can be opened on `plan`.
pub fn can_view_tip(tip: &TaxTip, plan: Plan) -> bool {
    !tip.is_premium_only || plan.allows(Feature::AdvancedTaxTips)
}

// =============================================================================
// Upgrade Prompts
// =============================================================================

/// Where an upgrade prompt is shown, and what it says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradeContext {
    InvoiceLimit,
    PremiumContent,
    CaSupport,
}

impl UpgradeContext {
    pub const fn title(self) -> &'static str {
        match self {
            UpgradeContext::InvoiceLimit => "Invoice Limit Reached",
            UpgradeContext::PremiumContent => "Premium Content",
            UpgradeContext::CaSupport => "CA Support Access",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            UpgradeContext::InvoiceLimit => {
                "You've reached the 3 invoices per month limit on the Free plan. \
                 Upgrade to Premium for unlimited invoices."
            }
            UpgradeContext::PremiumContent => {
                "This content is available exclusively for Premium members. \
                 Upgrade to access advanced tax tips and strategies."
            }
            UpgradeContext::CaSupport => {
                "Connect with expert Chartered Accountants for personalized tax guidance. \
                 Available only on Premium plan."
            }
        }
    }
}

// =============================================================================
// Creation Timestamps
// =============================================================================

/// Anything with a creation time in epoch nanoseconds.
///
/// The gate needs nothing else from an invoice record.
pub trait CreatedAt {
    fn created_at_nanos(&self) -> i64;
}

impl CreatedAt for Invoice {
    #[inline]
    fn created_at_nanos(&self) -> i64 {
        self.created_date
    }
}

impl CreatedAt for i64 {
    #[inline]
    fn created_at_nanos(&self) -> i64 {
        *self
    }
}

impl<T: CreatedAt + ?Sized> CreatedAt for &T {
    #[inline]
    fn created_at_nanos(&self) -> i64 {
        (**self).created_at_nanos()
    }
}

// =============================================================================
// Gate
// =============================================================================

/// The 30-day period a timestamp falls in, counted from the epoch.
///
/// Floors toward negative infinity, so pre-1970 timestamps land in
/// negative periods rather than sharing period 0.
#[inline]
pub const fn billing_period_index(nanos: i64) -> i64 {
    nanos_to_millis(nanos).div_euclid(BILLING_PERIOD_MS)
}

/// Counts the invoices created in the same period as `now_nanos`.
///
/// ## Example
/// ```rust
/// use smartassist_core::entitlement::{current_period_invoice_count, BILLING_PERIOD_MS};
///
/// let period = BILLING_PERIOD_MS * 1_000_000; // one period in nanoseconds
/// let now = 600 * period + 5;
/// let created = [600 * period, 600 * period + 1, 599 * period];
///
/// assert_eq!(current_period_invoice_count(&created, now), 2);
/// ```
pub fn current_period_invoice_count<I>(invoices: I, now_nanos: i64) -> usize
where
    I: IntoIterator,
    I::Item: CreatedAt,
{
    let current = billing_period_index(now_nanos);
    invoices
        .into_iter()
        .filter(|invoice| billing_period_index(invoice.created_at_nanos()) == current)
        .count()
}

/// Whether creating another invoice at `now_nanos` is blocked.
///
/// Premium is never blocked. Free is blocked once the current period holds
/// [`FREE_TIER_INVOICE_LIMIT`] invoices.
pub fn is_invoice_limit_reached_at<I>(invoices: I, plan: Plan, now_nanos: i64) -> bool
where
    I: IntoIterator,
    I::Item: CreatedAt,
{
    match plan.invoice_limit() {
        None => false,
        Some(limit) => current_period_invoice_count(invoices, now_nanos) >= limit,
    }
}

/// [`is_invoice_limit_reached_at`] evaluated at the current system time.
pub fn is_invoice_limit_reached<I>(invoices: I, plan: Plan) -> bool
where
    I: IntoIterator,
    I::Item: CreatedAt,
{
    is_invoice_limit_reached_at(invoices, plan, now_nanos())
}

// =============================================================================
// Invoice Quota
// =============================================================================

/// Snapshot of the invoice allowance, for the "2 of 3 used" banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuota {
    pub plan: Plan,
    /// Invoices created this period.
    pub used: usize,
    /// Cap for the plan, `None` when unlimited.
    pub limit: Option<usize>,
    /// What is left, `None` when unlimited.
    pub remaining: Option<usize>,
}

impl InvoiceQuota {
    pub fn compute<I>(invoices: I, plan: Plan, now_nanos: i64) -> Self
    where
        I: IntoIterator,
        I::Item: CreatedAt,
    {
        let used = current_period_invoice_count(invoices, now_nanos);
        let limit = plan.invoice_limit();
        InvoiceQuota {
            plan,
            used,
            limit,
            remaining: limit.map(|l| l.saturating_sub(used)),
        }
    }

    /// Same decision as [`is_invoice_limit_reached_at`].
    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }
}

impl fmt::Display for InvoiceQuota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            Some(limit) => write!(f, "{} of {} invoices used this period", self.used, limit),
            None => write!(f, "Unlimited invoices"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
