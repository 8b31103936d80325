//! Columns computed from the source data after load.

use smdash_core::Table;

/// `ad_spend * (1 + roi)`. Missing on either side propagates as missing.
#[must_use]
pub fn revenue_generated(ad_spend: Option<f64>, roi: Option<f64>) -> Option<f64> {
    Some(ad_spend? * (1.0 + roi?))
}

/// Returns the table with `revenue_generated` filled in on every record.
#[must_use]
pub fn with_revenue(table: Table) -> Table {
    table
        .into_records()
        .into_iter()
        .map(|mut record| {
            record.revenue_generated = revenue_generated(record.ad_spend, record.roi);
            record
        })
        .collect()
}
