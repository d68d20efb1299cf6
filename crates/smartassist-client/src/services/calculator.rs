//! # Calculator Service
//!
//! ```text
//! "1000" + "18" + exclusive
//!     │
//!     ▼  parse_amount / parse_slab
//! 1000.0, Slab18
//!     │
//!     ├──► preview()  ─► compute_gst        (no backend call)
//!     │
//!     └──► save()     ─► profile lookup ─► backend.create_gst_calculation
//! ```

use std::sync::Arc;

use smartassist_core::gst::compute_gst_for_slab;
use smartassist_core::validation::{parse_amount, parse_slab};
use smartassist_core::{GstBreakdown, GstCalculation, TaxMode};
use tracing::{debug, info};

use super::require_profile;
use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};

pub struct CalculatorService {
    backend: Arc<dyn Backend>,
}

impl CalculatorService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        CalculatorService { backend }
    }

    /// Validates the form and computes the breakdown locally.
    pub fn preview(&self, amount: &str, slab: &str, inclusive: bool) -> ClientResult<GstBreakdown> {
        let base = parse_amount("amount", amount)?;
        let slab = parse_slab(slab)?;
        Ok(compute_gst_for_slab(base, slab, TaxMode::from_inclusive(inclusive)))
    }

    /// Validates the form and stores the calculation for the caller.
    pub async fn save(
        &self,
        amount: &str,
        slab: &str,
        inclusive: bool,
    ) -> ClientResult<GstCalculation> {
        let base = parse_amount("amount", amount)?;
        let slab = parse_slab(slab)?;
        let profile = require_profile(self.backend.as_ref()).await?;

        let record = self
            .backend
            .create_gst_calculation(&profile.email, base, slab, inclusive)
            .await?;
        info!(email = %profile.email, total = record.total_amount, "Calculation saved");
        Ok(record)
    }

    /// The caller's saved calculations, newest first.
    pub async fn history(&self) -> ClientResult<Vec<GstCalculation>> {
        let profile = require_profile(self.backend.as_ref()).await?;
        let mut records = self.backend.get_calculations_by_user(&profile.email).await?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(email = %profile.email, count = records.len(), "Loaded calculation history");
        Ok(records)
    }

    pub async fn delete(&self, timestamp: i64) -> ClientResult<()> {
        let profile = require_profile(self.backend.as_ref()).await?;
        if self
            .backend
            .delete_calculation(&profile.email, timestamp)
            .await?
        {
            Ok(())
        } else {
            Err(ClientError::not_found("Calculation", timestamp))
        }
    }
}
