//! Terminal presentation of a computed [`Dashboard`].

mod markdown;
mod text;

use serde_json::json;
use smdash_analytics::{Dashboard, FilterOptions};
use smdash_core::AppConfig;

use crate::OutputFormat;

/// Which part of the dashboard to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    All,
    Summary,
    Engagement,
    Content,
    Campaigns,
    Timing,
}

impl View {
    pub(crate) fn parse(name: &str) -> Option<Self> {
        match name {
            "all" | "dashboard" => Some(View::All),
            "summary" | "kpis" => Some(View::Summary),
            "engagement" => Some(View::Engagement),
            "content" => Some(View::Content),
            "campaigns" | "campaign" => Some(View::Campaigns),
            "timing" | "time" => Some(View::Timing),
            _ => None,
        }
    }

    fn shows_summary(self) -> bool {
        matches!(self, View::All | View::Summary)
    }

    fn shows(self, other: View) -> bool {
        self == View::All || self == other
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Renderer {
    format: OutputFormat,
    currency_symbol: String,
    chart_width: usize,
}

impl Renderer {
    pub(crate) fn new(format: OutputFormat, config: &AppConfig) -> Self {
        Self {
            format,
            currency_symbol: config.currency_symbol.clone(),
            chart_width: config.chart_width,
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub(crate) fn render(&self, dashboard: &Dashboard, view: View) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Text => text::render(self, dashboard, view)?,
            OutputFormat::Markdown => markdown::render(self, dashboard, view)?,
            OutputFormat::Json => {
                let mut value = serde_json::to_string_pretty(&view_json(dashboard, view))?;
                value.push('\n');
                value
            }
        })
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub(crate) fn options(&self, options: &FilterOptions) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Text => text::options(options)?,
            OutputFormat::Markdown => markdown::options(options)?,
            OutputFormat::Json => {
                let mut value = serde_json::to_string_pretty(options)?;
                value.push('\n');
                value
            }
        })
    }
}

fn view_json(dashboard: &Dashboard, view: View) -> serde_json::Value {
    match view {
        View::All => json!({
            "dashboard": dashboard,
            "charts": [
                dashboard.platform_engagement.series(),
                dashboard.content_performance.engagement_series(),
                dashboard.campaign_summary.revenue_series(),
                dashboard.campaign_summary.roi_series(),
                dashboard.hourly_engagement.series(),
            ],
        }),
        View::Summary => json!({ "kpis": dashboard.kpis }),
        View::Engagement => json!({
            "platform_engagement": dashboard.platform_engagement,
            "charts": [dashboard.platform_engagement.series()],
        }),
        View::Content => json!({
            "content_performance": dashboard.content_performance,
            "charts": [dashboard.content_performance.engagement_series()],
        }),
        View::Campaigns => json!({
            "campaign_summary": dashboard.campaign_summary,
            "charts": [
                dashboard.campaign_summary.revenue_series(),
                dashboard.campaign_summary.roi_series(),
            ],
        }),
        View::Timing => json!({
            "hourly_engagement": dashboard.hourly_engagement,
            "charts": [dashboard.hourly_engagement.series()],
        }),
    }
}

/// The five KPI cards as (title, value) pairs, in display order.
fn kpi_cards(renderer: &Renderer, dashboard: &Dashboard) -> [(&'static str, String); 5] {
    let kpis = &dashboard.kpis;
    [
        ("Total Engagement", kpis.total_engagement.to_string()),
        ("Avg Engagement Rate", format_percent(kpis.avg_engagement_rate)),
        (
            "Ad Spend",
            format_currency(&renderer.currency_symbol, kpis.total_ad_spend),
        ),
        (
            "Revenue Generated",
            format_currency(&renderer.currency_symbol, kpis.total_revenue),
        ),
        ("Average ROI", format_ratio(kpis.avg_roi)),
    ]
}

/// Whole currency units, truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol} {}", amount.trunc() as i64)
}

fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "0%".to_string(), |v| format!("{v:.2}%"))
}

fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "0".to_string(), |v| format!("{v:.2}"))
}

/// Two decimals for chart and table cells; `-` when missing.
fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn best_platform_banner(dashboard: &Dashboard) -> String {
    match &dashboard.platform_engagement.best_platform {
        Some(platform) => format!("Best Platform: {platform}"),
        None => "Best Platform: no data".to_string(),
    }
}

fn best_hour_banner(dashboard: &Dashboard) -> String {
    match dashboard.hourly_engagement.best_hour {
        Some(hour) => format!("Best Posting Time: {hour}:00 hrs"),
        None => "Best Posting Time: no data".to_string(),
    }
}
