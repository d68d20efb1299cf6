//! # Support Service
//!
//! Tax tips (some premium-only) and queries to a chartered accountant
//! (premium-only).

use std::sync::Arc;

use serde::Serialize;
use smartassist_core::entitlement::can_view_tip;
use smartassist_core::validation::{validate_phone, validate_required, validate_text};
use smartassist_core::{CaLead, Feature, TaxTip, UpgradeContext, MAX_QUERY_LEN};
use tracing::info;

use super::require_profile;
use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};

/// A tip as shown to the current user.
///
/// Locked tips keep their title and teaser but not the full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipView {
    pub tip: TaxTip,
    pub locked: bool,
}

pub struct SupportService {
    backend: Arc<dyn Backend>,
}

impl SupportService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        SupportService { backend }
    }

    /// Every tip, with premium content withheld from free users.
    pub async fn visible_tips(&self) -> ClientResult<Vec<TipView>> {
        let plan = require_profile(self.backend.as_ref()).await?.plan;
        let tips = self.backend.get_tax_tips().await?;

        Ok(tips
            .into_iter()
            .map(|mut tip| {
                let locked = !can_view_tip(&tip, plan);
                if locked {
                    tip.full_content.clear();
                }
                TipView { tip, locked }
            })
            .collect())
    }

    /// Raises a query with a CA. Premium only.
    pub async fn submit_query(
        &self,
        name: &str,
        phone: &str,
        query: &str,
        file_upload: Option<String>,
    ) -> ClientResult<CaLead> {
        let profile = require_profile(self.backend.as_ref()).await?;
        if !profile.plan.allows(Feature::CaSupport) {
            return Err(ClientError::UpgradeRequired(UpgradeContext::CaSupport));
        }

        let name = validate_required("name", name)?;
        let phone = validate_phone(phone)?;
        let query = validate_text("query", query, MAX_QUERY_LEN)?;

        let lead = self
            .backend
            .submit_ca_lead(&name, &phone, &query, file_upload)
            .await?;
        info!(email = %profile.email, lead_id = %lead.id, "CA query submitted");
        Ok(lead)
    }

    pub async fn my_queries(&self) -> ClientResult<Vec<CaLead>> {
        self.backend.get_user_ca_leads().await
    }
}
