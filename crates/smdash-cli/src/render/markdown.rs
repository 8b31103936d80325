//! Markdown report output.

use std::fmt::{self, Write};

use chrono::Utc;
use smdash_analytics::{Dashboard, FilterOptions, Series};

use super::{best_hour_banner, best_platform_banner, format_cell, kpi_cards, Renderer, View};

pub(super) fn render(
    renderer: &Renderer,
    dashboard: &Dashboard,
    view: View,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let selection = &dashboard.selection;
    let years: Vec<String> = selection.years.iter().map(ToString::to_string).collect();

    writeln!(out, "# Social Media Analytics Report")?;
    writeln!(out)?;
    writeln!(out, "**Generated**: {now}")?;
    writeln!(out, "**Platforms**: {}", joined(selection.platforms.iter().cloned()))?;
    writeln!(
        out,
        "**Content types**: {}",
        joined(selection.content_types.iter().cloned())
    )?;
    writeln!(out, "**Years**: {}", joined(years.into_iter()))?;
    writeln!(out, "**Posts**: {}", dashboard.kpis.posts)?;
    writeln!(out)?;
    writeln!(out, "---")?;

    if view.shows_summary() {
        writeln!(out)?;
        writeln!(out, "## Key Metrics")?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|--------|-------|")?;
        for (title, value) in kpi_cards(renderer, dashboard) {
            writeln!(out, "| {title} | {value} |")?;
        }
    }

    if view.shows(View::Engagement) {
        writeln!(out)?;
        writeln!(out, "## Platform Engagement")?;
        writeln!(out)?;
        series_table(&mut out, &dashboard.platform_engagement.series())?;
        writeln!(out)?;
        writeln!(out, "**{}**", best_platform_banner(dashboard))?;
    }

    if view.shows(View::Content) {
        writeln!(out)?;
        writeln!(out, "## Content Performance")?;
        writeln!(out)?;
        writeln!(out, "| Content Type | Posts | Likes | Comments | Shares | Engagement |")?;
        writeln!(out, "|--------------|-------|-------|----------|--------|------------|")?;
        for row in &dashboard.content_performance.rows {
            writeln!(
                out,
                "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |",
                row.content_type, row.posts, row.likes, row.comments, row.shares, row.engagement
            )?;
        }
        writeln!(out)?;
        series_table(&mut out, &dashboard.content_performance.engagement_series())?;
    }

    if view.shows(View::Campaigns) {
        writeln!(out)?;
        writeln!(out, "## Campaign ROI & Revenue")?;
        writeln!(out)?;
        writeln!(out, "| Campaign | Posts | Ad Spend | Revenue | ROI |")?;
        writeln!(out, "|----------|-------|----------|---------|-----|")?;
        for row in &dashboard.campaign_summary.rows {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                row.campaign_name,
                row.posts,
                format_cell(row.ad_spend),
                format_cell(row.revenue_generated),
                format_cell(row.roi)
            )?;
        }
        writeln!(out)?;
        series_table(&mut out, &dashboard.campaign_summary.revenue_series())?;
        writeln!(out)?;
        series_table(&mut out, &dashboard.campaign_summary.roi_series())?;
    }

    if view.shows(View::Timing) {
        writeln!(out)?;
        writeln!(out, "## Optimal Posting Time")?;
        writeln!(out)?;
        series_table(&mut out, &dashboard.hourly_engagement.series())?;
        writeln!(out)?;
        writeln!(out, "**{}**", best_hour_banner(dashboard))?;
    }

    Ok(out)
}

pub(super) fn options(options: &FilterOptions) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "## Filter Options")?;
    writeln!(out)?;
    writeln!(out, "- **Platforms**: {}", options.platforms.join(", "))?;
    writeln!(out, "- **Content types**: {}", options.content_types.join(", "))?;
    let years: Vec<String> = options.years.iter().map(ToString::to_string).collect();
    writeln!(out, "- **Years**: {}", years.join(", "))?;
    Ok(out)
}

fn joined(values: impl Iterator<Item = String>) -> String {
    let values: Vec<String> = values.collect();
    if values.is_empty() {
        "_none_".to_string()
    } else {
        values.join(", ")
    }
}

/// Markdown has no charts; the series is rendered as a titled two-column table.
fn series_table(out: &mut String, series: &Series) -> fmt::Result {
    writeln!(out, "### {}", series.title)?;
    writeln!(out)?;
    writeln!(out, "| {} | {} |", series.x_label, series.y_label)?;
    writeln!(out, "|---|---|")?;
    for point in &series.points {
        writeln!(out, "| {} | {:.2} |", point.label, point.value)?;
    }
    Ok(())
}
