//! Headline numbers shown on the dashboard cards.

use serde::{Deserialize, Serialize};
use smdash_core::Table;

use crate::stats::{round2, Samples};

/// The five KPI cards for one filtered table.
///
/// Sums over an empty table are zero. Averages are `None` when no record
/// carried a value, which the cards display as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub posts: usize,
    pub total_engagement: u64,
    /// Mean engagement rate in percent, rounded to two decimals.
    pub avg_engagement_rate: Option<f64>,
    pub total_ad_spend: f64,
    pub total_revenue: f64,
    /// Mean ROI, rounded to two decimals.
    pub avg_roi: Option<f64>,
}

#[must_use]
pub fn compute_kpis(table: &Table) -> KpiSummary {
    let mut engagement_rate = Samples::default();
    let mut ad_spend = Samples::default();
    let mut revenue = Samples::default();
    let mut roi = Samples::default();
    let mut total_engagement = 0u64;

    for record in table {
        total_engagement = total_engagement.saturating_add(record.engagement);
        engagement_rate.push(record.engagement_rate);
        ad_spend.push(record.ad_spend);
        revenue.push(record.revenue_generated);
        roi.push(record.roi);
    }

    KpiSummary {
        posts: table.len(),
        total_engagement,
        avg_engagement_rate: engagement_rate.mean().map(round2),
        total_ad_spend: ad_spend.sum(),
        total_revenue: revenue.sum(),
        avg_roi: roi.mean().map(round2),
    }
}
