//! Filtering and aggregation behind the smdash dashboard.
//!
//! Everything here is a pure function of a loaded [`smdash_core::Table`] and
//! a [`FilterSelection`]. [`DashboardSession`] holds the current selection and
//! recomputes the whole [`Dashboard`] whenever it changes.

pub mod dashboard;
pub mod filter;
pub mod kpi;
pub mod series;
pub mod views;

mod stats;

#[cfg(test)]
mod testutil;

pub use dashboard::{Dashboard, DashboardSession};
pub use filter::{filter_table, FilterOptions, FilterSelection};
pub use kpi::{compute_kpis, KpiSummary};
pub use series::{ChartKind, Series, SeriesPoint};
pub use stats::round2;
pub use views::{
    campaign_summary, content_performance, hourly_engagement, platform_engagement, CampaignRow,
    CampaignSummary, ContentPerformance, ContentRow, HourRow, HourlyEngagement,
    PlatformEngagement, PlatformRow,
};
