//! Platform / content type / year membership filtering.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use smdash_core::{PostRecord, Table};

/// Distinct values available for each filter dimension, in order of first
/// appearance in the table they were taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub platforms: Vec<String>,
    pub content_types: Vec<String>,
    pub years: Vec<i32>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let mut options = Self::default();
        let mut seen_platforms = HashSet::new();
        let mut seen_content = HashSet::new();
        let mut seen_years = HashSet::new();

        for record in table {
            if seen_platforms.insert(record.platform.as_str()) {
                options.platforms.push(record.platform.clone());
            }
            if seen_content.insert(record.content_type.as_str()) {
                options.content_types.push(record.content_type.clone());
            }
            if seen_years.insert(record.year) {
                options.years.push(record.year);
            }
        }

        options
    }

    /// Selection with every available value chosen.
    #[must_use]
    pub fn select_all(&self) -> FilterSelection {
        FilterSelection {
            platforms: self.platforms.iter().cloned().collect(),
            content_types: self.content_types.iter().cloned().collect(),
            years: self.years.iter().copied().collect(),
        }
    }
}

/// The chosen values for each dimension. An empty set selects nothing for
/// that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub platforms: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl FilterSelection {
    pub fn new<P, C, Y>(platforms: P, content_types: C, years: Y) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        Y: IntoIterator<Item = i32>,
    {
        Self {
            platforms: platforms.into_iter().map(Into::into).collect(),
            content_types: content_types.into_iter().map(Into::into).collect(),
            years: years.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn matches(&self, record: &PostRecord) -> bool {
        self.platforms.contains(&record.platform)
            && self.content_types.contains(&record.content_type)
            && self.years.contains(&record.year)
    }
}

/// Records matching every dimension of `selection`, in source order.
#[must_use]
pub fn filter_table(table: &Table, selection: &FilterSelection) -> Table {
    let filtered: Table = table
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect();
    tracing::debug!(
        rows_in = table.len(),
        rows_out = filtered.len(),
        "filter applied"
    );
    filtered
}
