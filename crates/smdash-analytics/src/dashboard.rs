//! Filter -> aggregate pipeline and the session state that drives it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smdash_core::Table;

use crate::filter::{filter_table, FilterOptions, FilterSelection};
use crate::kpi::{compute_kpis, KpiSummary};
use crate::views::{
    campaign_summary, content_performance, hourly_engagement, platform_engagement,
    CampaignSummary, ContentPerformance, HourlyEngagement, PlatformEngagement,
};

/// Everything the presentation layer shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub selection: FilterSelection,
    pub kpis: KpiSummary,
    pub platform_engagement: PlatformEngagement,
    pub content_performance: ContentPerformance,
    pub campaign_summary: CampaignSummary,
    pub hourly_engagement: HourlyEngagement,
}

impl Dashboard {
    /// Filter `table` by `selection` and aggregate every view.
    #[must_use]
    pub fn compute(table: &Table, selection: &FilterSelection) -> Self {
        let filtered = filter_table(table, selection);
        Self {
            selection: selection.clone(),
            kpis: compute_kpis(&filtered),
            platform_engagement: platform_engagement(&filtered),
            content_performance: content_performance(&filtered),
            campaign_summary: campaign_summary(&filtered),
            hourly_engagement: hourly_engagement(&filtered),
        }
    }
}

/// Holds the loaded table and the user's current selection.
///
/// Filter options are taken once from the unfiltered table, and the
/// selection starts with every option chosen. Each setter is followed by a
/// fresh [`DashboardSession::render`].
#[derive(Debug, Clone)]
pub struct DashboardSession {
    table: Arc<Table>,
    options: FilterOptions,
    selection: FilterSelection,
}

impl DashboardSession {
    #[must_use]
    pub fn new(table: Arc<Table>) -> Self {
        let options = FilterOptions::from_table(&table);
        let selection = options.select_all();
        Self {
            table,
            options,
            selection,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn set_platforms<I>(&mut self, platforms: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.selection.platforms = platforms.into_iter().map(Into::into).collect();
    }

    pub fn set_content_types<I>(&mut self, content_types: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.selection.content_types = content_types.into_iter().map(Into::into).collect();
    }

    pub fn set_years<I>(&mut self, years: I)
    where
        I: IntoIterator<Item = i32>,
    {
        self.selection.years = years.into_iter().collect();
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Back to every option selected.
    pub fn reset(&mut self) {
        self.selection = self.options.select_all();
    }

    /// Swap in a freshly loaded table. Options are recomputed from it and the
    /// selection is reset. A no-op when `table` is the one already held.
    pub fn replace_table(&mut self, table: Arc<Table>) {
        if Arc::ptr_eq(&self.table, &table) {
            return;
        }
        *self = Self::new(table);
    }

    /// Recompute the dashboard for the current selection.
    #[must_use]
    pub fn render(&self) -> Dashboard {
        Dashboard::compute(&self.table, &self.selection)
    }
}
