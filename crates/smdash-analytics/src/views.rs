//! The four grouped dashboard views.
//!
//! Groups only exist for keys present in the input table, and rows come back
//! sorted ascending by key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smdash_core::Table;

use crate::stats::{arg_max, Samples};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRow {
    pub platform: String,
    pub posts: usize,
    /// `None` when no post on the platform carried an engagement rate.
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformEngagement {
    pub rows: Vec<PlatformRow>,
    /// Platform with the highest mean engagement rate; ties go to the first
    /// platform in sort order. `None` when there is no data.
    pub best_platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    pub content_type: String,
    pub posts: usize,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPerformance {
    pub rows: Vec<ContentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub campaign_name: String,
    pub posts: usize,
    pub ad_spend: Option<f64>,
    pub revenue_generated: Option<f64>,
    pub roi: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub rows: Vec<CampaignRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRow {
    pub post_hour: u8,
    pub posts: usize,
    pub engagement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyEngagement {
    pub rows: Vec<HourRow>,
    /// Hour with the highest mean engagement; ties go to the earliest hour.
    pub best_hour: Option<u8>,
}

/// Mean engagement rate per platform plus the best platform.
#[must_use]
pub fn platform_engagement(table: &Table) -> PlatformEngagement {
    let mut groups: BTreeMap<&str, (usize, Samples)> = BTreeMap::new();
    for record in table {
        let (posts, rates) = groups.entry(record.platform.as_str()).or_default();
        *posts += 1;
        rates.push(record.engagement_rate);
    }

    let rows: Vec<PlatformRow> = groups
        .into_iter()
        .map(|(platform, (posts, rates))| PlatformRow {
            platform: platform.to_string(),
            posts,
            engagement_rate: rates.mean(),
        })
        .collect();

    let best_platform = arg_max(
        rows.iter()
            .map(|row| (row.platform.clone(), row.engagement_rate)),
    );
    if best_platform.is_none() {
        tracing::warn!(platforms = rows.len(), "no engagement rate data for best platform");
    }

    PlatformEngagement {
        rows,
        best_platform,
    }
}

/// Mean likes, comments, shares and engagement per content type.
#[must_use]
pub fn content_performance(table: &Table) -> ContentPerformance {
    #[derive(Default)]
    struct Acc {
        posts: usize,
        likes: Samples,
        comments: Samples,
        shares: Samples,
        engagement: Samples,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for record in table {
        let acc = groups.entry(record.content_type.as_str()).or_default();
        acc.posts += 1;
        acc.likes.push_count(record.likes);
        acc.comments.push_count(record.comments);
        acc.shares.push_count(record.shares);
        acc.engagement.push_count(record.engagement);
    }

    let rows = groups
        .into_iter()
        .map(|(content_type, acc)| ContentRow {
            content_type: content_type.to_string(),
            posts: acc.posts,
            likes: acc.likes.mean().unwrap_or_default(),
            comments: acc.comments.mean().unwrap_or_default(),
            shares: acc.shares.mean().unwrap_or_default(),
            engagement: acc.engagement.mean().unwrap_or_default(),
        })
        .collect();

    ContentPerformance { rows }
}

/// Mean ad spend, revenue and ROI per named campaign. Records without a
/// campaign are skipped.
#[must_use]
pub fn campaign_summary(table: &Table) -> CampaignSummary {
    #[derive(Default)]
    struct Acc {
        posts: usize,
        ad_spend: Samples,
        revenue: Samples,
        roi: Samples,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for record in table {
        let Some(name) = record.campaign_name.as_deref() else {
            continue;
        };
        let acc = groups.entry(name).or_default();
        acc.posts += 1;
        acc.ad_spend.push(record.ad_spend);
        acc.revenue.push(record.revenue_generated);
        acc.roi.push(record.roi);
    }

    let rows = groups
        .into_iter()
        .map(|(campaign_name, acc)| CampaignRow {
            campaign_name: campaign_name.to_string(),
            posts: acc.posts,
            ad_spend: acc.ad_spend.mean(),
            revenue_generated: acc.revenue.mean(),
            roi: acc.roi.mean(),
        })
        .collect();

    CampaignSummary { rows }
}

/// Mean engagement per posting hour plus the best hour.
#[must_use]
pub fn hourly_engagement(table: &Table) -> HourlyEngagement {
    let mut groups: BTreeMap<u8, (usize, Samples)> = BTreeMap::new();
    for record in table {
        let (posts, engagement) = groups.entry(record.post_hour).or_default();
        *posts += 1;
        engagement.push_count(record.engagement);
    }

    let rows: Vec<HourRow> = groups
        .into_iter()
        .map(|(post_hour, (posts, engagement))| HourRow {
            post_hour,
            posts,
            engagement: engagement.mean().unwrap_or_default(),
        })
        .collect();

    let best_hour = arg_max(rows.iter().map(|row| (row.post_hour, Some(row.engagement))));
    if best_hour.is_none() {
        tracing::warn!("no posts for best posting hour");
    }

    HourlyEngagement { rows, best_hour }
}
