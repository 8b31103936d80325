//! Filter flags shared by the one-shot commands and the REPL.

use std::collections::BTreeSet;

use anyhow::Context;
use clap::Args;
use smdash_analytics::DashboardSession;

/// Each flag is repeatable and accepts comma-separated values. Leaving a flag
/// out keeps every value; passing it with an empty value selects nothing.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    #[arg(long = "platform", value_delimiter = ',', global = true)]
    pub platforms: Option<Vec<String>>,

    #[arg(long = "content-type", value_delimiter = ',', global = true)]
    pub content_types: Option<Vec<String>>,

    #[arg(long = "year", value_delimiter = ',', global = true)]
    pub years: Option<Vec<String>>,
}

impl FilterArgs {
    /// Narrow the session's selection to the dimensions given on the command
    /// line.
    ///
    /// # Errors
    ///
    /// Returns an error if a year is not an integer.
    pub(crate) fn apply(&self, session: &mut DashboardSession) -> anyhow::Result<()> {
        let options = session.options();
        let mut selection = session.selection().clone();

        if let Some(platforms) = &self.platforms {
            let platforms = clean_values(platforms);
            warn_unknown("platform", &platforms, &options.platforms);
            selection.platforms = platforms.into_iter().collect();
        }
        if let Some(content_types) = &self.content_types {
            let content_types = clean_values(content_types);
            warn_unknown("content_type", &content_types, &options.content_types);
            selection.content_types = content_types.into_iter().collect();
        }
        if let Some(years) = &self.years {
            let years = parse_years(years)?;
            if let Some(missing) = years.iter().find(|y| !options.years.contains(y)) {
                tracing::warn!(year = missing, "year not present in dataset");
            }
            selection.years = years.into_iter().collect();
        }

        session.set_selection(selection);
        Ok(())
    }
}

/// Trim, drop empties and de-duplicate.
pub(crate) fn clean_values(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|v| v.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// # Errors
///
/// Returns an error naming the first value that is not an integer.
pub(crate) fn parse_years(raw: &[String]) -> anyhow::Result<Vec<i32>> {
    clean_values(raw)
        .iter()
        .map(|v| {
            v.parse::<i32>()
                .with_context(|| format!("invalid year '{v}'"))
        })
        .collect()
}

fn warn_unknown(dimension: &str, selected: &[String], available: &[String]) {
    for value in selected.iter().filter(|v| !available.contains(v)) {
        tracing::warn!(dimension, value = %value, "filter value not present in dataset");
    }
}
