use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the engagement dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub date: NaiveDate,
    /// Social network the post was published on, e.g. `"Instagram"`.
    pub platform: String,
    /// Post format, e.g. `"Reel"` or `"Carousel"`.
    pub content_type: String,
    /// Paid campaign the post belongs to. `None` for organic posts.
    pub campaign_name: Option<String>,
    pub year: i32,
    /// Hour of day the post went live, always in `0..=23`.
    pub post_hour: u8,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub engagement: u64,
    /// Engagement as a percentage of reach. `None` when the source cell was
    /// empty or not a number.
    pub engagement_rate: Option<f64>,
    pub ad_spend: Option<f64>,
    /// Return multiplier: `0.5` means every unit spent returned 1.5 units.
    pub roi: Option<f64>,
    /// `ad_spend * (1 + roi)`, filled in by the derived-field pass after
    /// load. Never read from the source file.
    #[serde(default)]
    pub revenue_generated: Option<f64>,
}

/// The in-memory dataset: every post record in source order.
///
/// A `Table` is never mutated after it has been loaded and enriched;
/// filtering produces a new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    records: Vec<PostRecord>,
}

impl Table {
    #[must_use]
    pub fn new(records: Vec<PostRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PostRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostRecord> {
        self.records.iter()
    }
}

impl FromIterator<PostRecord> for Table {
    fn from_iter<I: IntoIterator<Item = PostRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a PostRecord;
    type IntoIter = std::slice::Iter<'a, PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
