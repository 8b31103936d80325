//! Delimited-file reader for the engagement export.
//!
//! Header names are matched exactly after trimming; column order is free and
//! unknown columns are ignored. Every row is validated against the record
//! invariants as it is read, so a returned [`Table`] never carries a missing
//! category, a missing year, or an out-of-range posting hour.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use smdash_core::{PostRecord, Table};

use crate::derive::with_revenue;
use crate::error::DataLoadError;

/// Every column the loader needs, in no particular order.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "date",
    "platform",
    "content_type",
    "campaign_name",
    "year",
    "post_hour",
    "likes",
    "comments",
    "shares",
    "engagement",
    "engagement_rate",
    "ad_spend",
    "roi",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Cell spellings treated as a missing float.
const MISSING_MARKERS: &[&str] = &["nan", "na", "n/a", "null", "none"];

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read the source file and add the derived revenue column.
///
/// # Errors
///
/// Returns [`DataLoadError`] if the file is missing or unreadable, lacks a
/// required column, or contains a row that violates the record invariants.
pub fn load_dataset(path: &Path, options: &CsvOptions) -> Result<Table, DataLoadError> {
    let started = Instant::now();
    let table = with_revenue(read_dataset(path, options)?);
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(table)
}

/// Read the source file into a table without derived columns.
///
/// # Errors
///
/// See [`load_dataset`].
pub fn read_dataset(path: &Path, options: &CsvOptions) -> Result<Table, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_records(file, options, &path.display().to_string())
}

/// Parse delimited records from any reader. `source` names the input in
/// error messages.
///
/// # Errors
///
/// See [`load_dataset`].
pub fn parse_records<R: Read>(
    reader: R,
    options: &CsvOptions,
    source: &str,
) -> Result<Table, DataLoadError> {
    let csv_error = |e: csv::Error| DataLoadError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let columns = ColumnMap::resolve(&headers, source)?;

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for (idx, result) in rdr.records().enumerate() {
        let row = result.map_err(csv_error)?;
        let (record, row_coerced) = columns.parse_row(&row, idx + 1)?;
        coerced += row_coerced;
        records.push(record);
    }

    if coerced > 0 {
        tracing::warn!(
            source,
            cells = coerced,
            "non-numeric float cells treated as missing"
        );
    }

    Ok(Table::new(records))
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Date,
    Platform,
    ContentType,
    CampaignName,
    Year,
    PostHour,
    Likes,
    Comments,
    Shares,
    Engagement,
    EngagementRate,
    AdSpend,
    Roi,
}

impl Column {
    const ALL: [Column; 13] = [
        Column::Date,
        Column::Platform,
        Column::ContentType,
        Column::CampaignName,
        Column::Year,
        Column::PostHour,
        Column::Likes,
        Column::Comments,
        Column::Shares,
        Column::Engagement,
        Column::EngagementRate,
        Column::AdSpend,
        Column::Roi,
    ];

    fn name(self) -> &'static str {
        REQUIRED_COLUMNS[self as usize]
    }
}

/// Position of every required column in the source header.
struct ColumnMap([usize; REQUIRED_COLUMNS.len()]);

impl ColumnMap {
    fn resolve(headers: &StringRecord, source: &str) -> Result<Self, DataLoadError> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();

        for column in Column::ALL {
            match headers.iter().position(|h| h == column.name()) {
                Some(pos) => positions[column as usize] = pos,
                None => missing.push(column.name().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns {
                path: source.to_string(),
                columns: missing,
            });
        }

        Ok(Self(positions))
    }

    fn cell<'r>(&self, row: &'r StringRecord, column: Column) -> &'r str {
        row.get(self.0[column as usize]).unwrap_or("")
    }

    /// Returns the parsed record and how many float cells were coerced to
    /// missing because they were not numbers.
    fn parse_row(
        &self,
        row: &StringRecord,
        row_no: usize,
    ) -> Result<(PostRecord, usize), DataLoadError> {
        let mut coerced = 0usize;
        let mut float = |column: Column| {
            let (value, was_coerced) = parse_optional_float(self.cell(row, column));
            coerced += usize::from(was_coerced);
            value
        };
        let engagement_rate = float(Column::EngagementRate);
        let ad_spend = float(Column::AdSpend);
        let roi = float(Column::Roi);

        let campaign_name = Some(self.cell(row, Column::CampaignName))
            .filter(|s| !s.is_empty() && !is_missing_marker(s))
            .map(str::to_string);

        let record = PostRecord {
            date: parse_date(row_no, self.cell(row, Column::Date))?,
            platform: required_text(row_no, Column::Platform, self.cell(row, Column::Platform))?,
            content_type: required_text(
                row_no,
                Column::ContentType,
                self.cell(row, Column::ContentType),
            )?,
            campaign_name,
            year: parse_year(row_no, self.cell(row, Column::Year))?,
            post_hour: parse_hour(row_no, self.cell(row, Column::PostHour))?,
            likes: parse_count(row_no, Column::Likes, self.cell(row, Column::Likes))?,
            comments: parse_count(row_no, Column::Comments, self.cell(row, Column::Comments))?,
            shares: parse_count(row_no, Column::Shares, self.cell(row, Column::Shares))?,
            engagement: parse_count(
                row_no,
                Column::Engagement,
                self.cell(row, Column::Engagement),
            )?,
            engagement_rate,
            ad_spend,
            roi,
            revenue_generated: None,
        };

        Ok((record, coerced))
    }
}

fn is_missing_marker(raw: &str) -> bool {
    MISSING_MARKERS
        .iter()
        .any(|marker| raw.eq_ignore_ascii_case(marker))
}

fn invalid(row: usize, column: Column, value: &str, reason: impl Into<String>) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column: column.name(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn required_text(row: usize, column: Column, raw: &str) -> Result<String, DataLoadError> {
    if raw.is_empty() || is_missing_marker(raw) {
        return Err(DataLoadError::MissingValue {
            row,
            column: column.name(),
        });
    }
    Ok(raw.to_string())
}

/// Parses a whole number, accepting integral floats such as `12.0` that
/// spreadsheet exports produce for integer columns.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_whole(row: usize, column: Column, raw: &str) -> Result<i64, DataLoadError> {
    if raw.is_empty() {
        return Err(DataLoadError::MissingValue {
            row,
            column: column.name(),
        });
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    let value = raw
        .parse::<f64>()
        .map_err(|_| invalid(row, column, raw, "not a number"))?;
    let in_range = value.abs() <= i64::MAX as f64;
    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(invalid(row, column, raw, "not a whole number"));
    }
    Ok(value as i64)
}

fn parse_count(row: usize, column: Column, raw: &str) -> Result<u64, DataLoadError> {
    let value = parse_whole(row, column, raw)?;
    u64::try_from(value).map_err(|_| invalid(row, column, raw, "must be non-negative"))
}

fn parse_year(row: usize, raw: &str) -> Result<i32, DataLoadError> {
    let value = parse_whole(row, Column::Year, raw)?;
    i32::try_from(value).map_err(|_| invalid(row, Column::Year, raw, "year out of range"))
}

fn parse_hour(row: usize, raw: &str) -> Result<u8, DataLoadError> {
    let value = parse_whole(row, Column::PostHour, raw)?;
    u8::try_from(value)
        .ok()
        .filter(|hour| *hour <= 23)
        .ok_or_else(|| invalid(row, Column::PostHour, raw, "hour must be between 0 and 23"))
}

fn parse_date(row: usize, raw: &str) -> Result<NaiveDate, DataLoadError> {
    if raw.is_empty() {
        return Err(DataLoadError::MissingValue {
            row,
            column: Column::Date.name(),
        });
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| invalid(row, Column::Date, raw, "unrecognized date format"))
}

/// Returns the parsed value and whether a non-empty, non-numeric cell was
/// coerced to missing.
fn parse_optional_float(raw: &str) -> (Option<f64>, bool) {
    if raw.is_empty() || is_missing_marker(raw) {
        return (None, false);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_nan() => (None, false),
        Ok(value) => (Some(value), false),
        Err(_) => (None, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,platform,content_type,campaign_name,year,post_hour,likes,comments,shares,engagement,engagement_rate,ad_spend,roi";

    fn parse(body: &str) -> Result<Table, DataLoadError> {
        let input = format!("{HEADER}\n{body}");
        parse_records(input.as_bytes(), &CsvOptions::default(), "inline")
    }

    #[test]
    fn parses_a_complete_row() {
        let table =
            parse("2023-05-04,Instagram,Reel,Spring Sale,2023,18,120,14,9,143,5.25,250.0,0.8\n")
                .unwrap();
        assert_eq!(table.len(), 1);
        let r = &table.records()[0];
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2023, 5, 4).unwrap());
        assert_eq!(r.platform, "Instagram");
        assert_eq!(r.content_type, "Reel");
        assert_eq!(r.campaign_name.as_deref(), Some("Spring Sale"));
        assert_eq!(r.year, 2023);
        assert_eq!(r.post_hour, 18);
        assert_eq!((r.likes, r.comments, r.shares, r.engagement), (120, 14, 9, 143));
        assert_eq!(r.engagement_rate, Some(5.25));
        assert_eq!(r.ad_spend, Some(250.0));
        assert_eq!(r.roi, Some(0.8));
        assert!(r.revenue_generated.is_none());
    }

    #[test]
    fn column_order_is_free_and_extra_columns_ignored() {
        let input = "post_id,roi,ad_spend,engagement_rate,engagement,shares,comments,likes,post_hour,year,campaign_name,content_type,platform,date\n\
                     p-1,0.5,100,3.5,10,1,2,7,8,2024,,Story,TikTok,2024-01-02\n";
        let table = parse_records(input.as_bytes(), &CsvOptions::default(), "inline").unwrap();
        let r = &table.records()[0];
        assert_eq!(r.platform, "TikTok");
        assert_eq!(r.content_type, "Story");
        assert_eq!(r.ad_spend, Some(100.0));
        assert_eq!(r.roi, Some(0.5));
        assert!(r.campaign_name.is_none());
    }

    #[test]
    fn reports_every_missing_column() {
        let input = "date,platform,year\n2024-01-01,X,2024\n";
        let err = parse_records(input.as_bytes(), &CsvOptions::default(), "inline").unwrap_err();
        match err {
            DataLoadError::MissingColumns { columns, path } => {
                assert_eq!(path, "inline");
                assert!(columns.contains(&"content_type".to_string()));
                assert!(columns.contains(&"roi".to_string()));
                assert!(!columns.contains(&"platform".to_string()));
                assert_eq!(columns.len(), REQUIRED_COLUMNS.len() - 3);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let header = HEADER.replace(',', " , ");
        let input = format!("{header}\n2023-01-01,X,Reel,,2023,1,1,1,1,3,1.0,1.0,1.0\n");
        let table = parse_records(input.as_bytes(), &CsvOptions::default(), "inline").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_float_cells_are_missing_not_zero() {
        let table = parse("2023-01-01,X,Reel,,2023,1,1,1,1,3,,,\n").unwrap();
        let r = &table.records()[0];
        assert!(r.engagement_rate.is_none());
        assert!(r.ad_spend.is_none());
        assert!(r.roi.is_none());
    }

    #[test]
    fn nan_and_non_numeric_floats_are_missing() {
        let table = parse("2023-01-01,X,Reel,,2023,1,1,1,1,3,NaN,n/a,abc\n").unwrap();
        let r = &table.records()[0];
        assert!(r.engagement_rate.is_none());
        assert!(r.ad_spend.is_none());
        assert!(r.roi.is_none());
    }

    #[test]
    fn integral_float_counts_are_accepted() {
        let table = parse("2023-01-01,X,Reel,,2023.0,7.0,12.0,3.0,1.0,16.0,1.0,1.0,1.0\n").unwrap();
        let r = &table.records()[0];
        assert_eq!(r.year, 2023);
        assert_eq!(r.post_hour, 7);
        assert_eq!(r.likes, 12);
        assert_eq!(r.engagement, 16);
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err = parse("2023-01-01,X,Reel,,2023,7,12.5,3,1,16,1.0,1.0,1.0\n").unwrap_err();
        assert!(
            matches!(err, DataLoadError::InvalidValue { row: 1, column: "likes", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = parse("2023-01-01,X,Reel,,2023,7,1,-3,1,16,1.0,1.0,1.0\n").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: "comments", .. }));
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let err = parse("2023-01-01,X,Reel,,2023,24,1,1,1,3,1.0,1.0,1.0\n").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: "post_hour", .. }));
    }

    #[test]
    fn missing_platform_is_rejected_with_row_number() {
        let err = parse(concat!(
            "2023-01-01,X,Reel,,2023,1,1,1,1,3,1.0,1.0,1.0\n",
            "2023-01-02,,Reel,,2023,1,1,1,1,3,1.0,1.0,1.0\n",
        ))
        .unwrap_err();
        assert!(
            matches!(err, DataLoadError::MissingValue { row: 2, column: "platform" }),
            "got {err:?}"
        );
    }

    #[test]
    fn missing_year_is_rejected() {
        let err = parse("2023-01-01,X,Reel,,,1,1,1,1,3,1.0,1.0,1.0\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingValue { column: "year", .. }));
    }

    #[test]
    fn accepts_several_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
        for raw in [
            "2023-02-14",
            "2023/02/14",
            "02/14/2023",
            "14-02-2023",
            "2023-02-14 08:30:00",
            "2023-02-14T08:30:00",
            "2023-02-14 08:30",
            "2023-02-14T08:30",
            "2023-02-14 08:30:00.000",
            "2023-02-14T08:30:00.250",
            "2023-02-14T08:30:00Z",
            "2023-02-14T08:30:00+05:30",
        ] {
            assert_eq!(parse_date(1, raw).unwrap(), expected, "format {raw}");
        }
    }

    #[test]
    fn unparsable_date_is_rejected() {
        let err = parse("yesterday,X,Reel,,2023,1,1,1,1,3,1.0,1.0,1.0\n").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: "date", .. }));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let err = parse("2023-01-01,X,Reel\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Csv { .. }), "got {err:?}");
    }

    #[test]
    fn custom_delimiter() {
        let input = format!(
            "{}\n2023-01-01;X;Reel;;2023;1;1;1;1;3;1.5;1.0;1.0\n",
            HEADER.replace(',', ";")
        );
        let options = CsvOptions { delimiter: b';' };
        let table = parse_records(input.as_bytes(), &options, "inline").unwrap();
        assert_eq!(table.records()[0].engagement_rate, Some(1.5));
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let table = parse("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn quoted_campaign_with_delimiter() {
        let table =
            parse("2023-01-01,X,Reel,\"Launch, Phase 2\",2023,1,1,1,1,3,1.0,1.0,1.0\n").unwrap();
        assert_eq!(
            table.records()[0].campaign_name.as_deref(),
            Some("Launch, Phase 2")
        );
    }
}
