//! Ordered (category, value) series handed to chart renderers.

use serde::{Deserialize, Serialize};

use crate::views::{CampaignSummary, ContentPerformance, HourlyEngagement, PlatformEngagement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One chart's worth of data. Categories whose value is missing are left
/// out, so every point is plottable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    fn new<I>(title: &str, kind: ChartKind, x_label: &str, y_label: &str, points: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<f64>)>,
    {
        Self {
            title: title.to_string(),
            kind,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            points: points
                .into_iter()
                .filter_map(|(label, value)| Some(SeriesPoint { label, value: value? }))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, or `None` if it has no points.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

impl PlatformEngagement {
    #[must_use]
    pub fn series(&self) -> Series {
        Series::new(
            "Platform Engagement Comparison",
            ChartKind::Bar,
            "platform",
            "engagement_rate",
            self.rows
                .iter()
                .map(|r| (r.platform.clone(), r.engagement_rate)),
        )
    }
}

impl ContentPerformance {
    #[must_use]
    pub fn engagement_series(&self) -> Series {
        Series::new(
            "Engagement by Content Type",
            ChartKind::Bar,
            "content_type",
            "engagement",
            self.rows
                .iter()
                .map(|r| (r.content_type.clone(), Some(r.engagement))),
        )
    }
}

impl CampaignSummary {
    #[must_use]
    pub fn revenue_series(&self) -> Series {
        Series::new(
            "Revenue by Campaign",
            ChartKind::Bar,
            "campaign_name",
            "revenue_generated",
            self.rows
                .iter()
                .map(|r| (r.campaign_name.clone(), r.revenue_generated)),
        )
    }

    #[must_use]
    pub fn roi_series(&self) -> Series {
        Series::new(
            "ROI by Campaign",
            ChartKind::Bar,
            "campaign_name",
            "roi",
            self.rows.iter().map(|r| (r.campaign_name.clone(), r.roi)),
        )
    }
}

impl HourlyEngagement {
    #[must_use]
    pub fn series(&self) -> Series {
        Series::new(
            "Engagement by Posting Hour",
            ChartKind::Line,
            "post_hour",
            "engagement",
            self.rows
                .iter()
                .map(|r| (r.post_hour.to_string(), Some(r.engagement))),
        )
    }
}
