//! Plain terminal output: cards, aligned tables and horizontal bar charts.

use std::fmt::{self, Write};

use smdash_analytics::{ChartKind, Dashboard, FilterOptions, FilterSelection, Series};

use super::{best_hour_banner, best_platform_banner, format_cell, kpi_cards, Renderer, View};

const RULE: &str = "------------------------------------------------------------";

pub(super) fn render(
    renderer: &Renderer,
    dashboard: &Dashboard,
    view: View,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Social Media Analytics Dashboard")?;
    write_selection(&mut out, &dashboard.selection)?;
    writeln!(out, "Posts matched: {}", dashboard.kpis.posts)?;
    writeln!(out, "{RULE}")?;

    if view.shows_summary() {
        for (title, value) in kpi_cards(renderer, dashboard) {
            writeln!(out, "{title:<22}{value}")?;
        }
        writeln!(out, "{RULE}")?;
    }

    if view.shows(View::Engagement) {
        writeln!(out, "[Engagement]")?;
        chart(&mut out, &dashboard.platform_engagement.series(), renderer.chart_width)?;
        writeln!(out, "{}", best_platform_banner(dashboard))?;
        writeln!(out)?;
    }

    if view.shows(View::Content) {
        let content = &dashboard.content_performance;
        writeln!(out, "[Content Performance]")?;
        writeln!(
            out,
            "{:<18}{:>8}{:>12}{:>12}{:>12}{:>12}",
            "CONTENT TYPE", "POSTS", "LIKES", "COMMENTS", "SHARES", "ENGAGEMENT"
        )?;
        for row in &content.rows {
            writeln!(
                out,
                "{:<18}{:>8}{:>12.2}{:>12.2}{:>12.2}{:>12.2}",
                row.content_type, row.posts, row.likes, row.comments, row.shares, row.engagement
            )?;
        }
        if content.rows.is_empty() {
            writeln!(out, "(no data)")?;
        }
        writeln!(out)?;
        chart(&mut out, &content.engagement_series(), renderer.chart_width)?;
        writeln!(out)?;
    }

    if view.shows(View::Campaigns) {
        let campaigns = &dashboard.campaign_summary;
        writeln!(out, "[Campaign ROI & Revenue]")?;
        writeln!(
            out,
            "{:<24}{:>8}{:>14}{:>14}{:>10}",
            "CAMPAIGN", "POSTS", "AD SPEND", "REVENUE", "ROI"
        )?;
        for row in &campaigns.rows {
            writeln!(
                out,
                "{:<24}{:>8}{:>14}{:>14}{:>10}",
                row.campaign_name,
                row.posts,
                format_cell(row.ad_spend),
                format_cell(row.revenue_generated),
                format_cell(row.roi)
            )?;
        }
        if campaigns.rows.is_empty() {
            writeln!(out, "(no data)")?;
        }
        writeln!(out)?;
        chart(&mut out, &campaigns.revenue_series(), renderer.chart_width)?;
        writeln!(out)?;
        chart(&mut out, &campaigns.roi_series(), renderer.chart_width)?;
        writeln!(out)?;
    }

    if view.shows(View::Timing) {
        writeln!(out, "[Optimal Posting Time]")?;
        chart(&mut out, &dashboard.hourly_engagement.series(), renderer.chart_width)?;
        writeln!(out, "{}", best_hour_banner(dashboard))?;
    }

    Ok(out)
}

pub(super) fn options(options: &FilterOptions) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Platforms:     {}", options.platforms.join(", "))?;
    writeln!(out, "Content types: {}", options.content_types.join(", "))?;
    let years: Vec<String> = options.years.iter().map(ToString::to_string).collect();
    writeln!(out, "Years:         {}", years.join(", "))?;
    Ok(out)
}

fn write_selection(out: &mut String, selection: &FilterSelection) -> fmt::Result {
    let years: Vec<String> = selection.years.iter().map(ToString::to_string).collect();
    writeln!(
        out,
        "Filters: platform [{}] | content type [{}] | year [{}]",
        list_or_none(selection.platforms.iter().map(String::as_str)),
        list_or_none(selection.content_types.iter().map(String::as_str)),
        list_or_none(years.iter().map(String::as_str)),
    )
}

fn list_or_none<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

fn chart(out: &mut String, series: &Series, width: usize) -> fmt::Result {
    writeln!(out, "{} ({} by {})", series.title, series.y_label, series.x_label)?;
    if series.is_empty() {
        return writeln!(out, "  (no data)");
    }

    let label_width = series
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max_value().unwrap_or(0.0);

    for point in &series.points {
        let len = bar_len(point.value, max, width);
        match series.kind {
            ChartKind::Bar => writeln!(
                out,
                "  {:<label_width$} | {} {:.2}",
                point.label,
                "█".repeat(len),
                point.value
            )?,
            ChartKind::Line => writeln!(
                out,
                "  {:>label_width$} | {}● {:.2}",
                point.label,
                " ".repeat(len),
                point.value
            )?,
        }
    }
    Ok(())
}

/// Bar length proportional to `value / max`. Zero and negative values get
/// no bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}
