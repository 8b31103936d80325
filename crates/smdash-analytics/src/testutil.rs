use chrono::NaiveDate;
use smdash_core::PostRecord;

/// A record with neutral values; tests override the fields they care about
/// with struct update syntax.
pub(crate) fn post(platform: &str, content_type: &str, year: i32) -> PostRecord {
    PostRecord {
        date: NaiveDate::from_ymd_opt(year, 1, 15).unwrap(),
        platform: platform.to_owned(),
        content_type: content_type.to_owned(),
        campaign_name: None,
        year,
        post_hour: 12,
        likes: 0,
        comments: 0,
        shares: 0,
        engagement: 0,
        engagement_rate: None,
        ad_spend: None,
        roi: None,
        revenue_generated: None,
    }
}
