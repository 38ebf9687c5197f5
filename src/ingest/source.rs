//! CSV record source: reading rows and parsing fields

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::core::record::{TemporalRecord, DATE_FORMAT};
use crate::error::Result;
use crate::ingest::report::{LoadIssue, RowField};

/// Fields per data row: `start,end,delete,key,value`.
const FIELD_COUNT: usize = 5;

/// CSV reader over any byte source, skipping the header row.
///
/// `flexible` lets rows with the wrong field count through to
/// [`parse_row`], which classifies them, instead of failing the read.
pub fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

/// Open a CSV file as a record source.
pub fn open(path: &Path) -> Result<csv::Reader<File>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}

/// Parse one data row into a record.
///
/// `line` is the 1-based input line the row started on, carried into any
/// issue so the caller can point at the offending input.
pub fn parse_row(row: &StringRecord, line: u64) -> std::result::Result<TemporalRecord, LoadIssue> {
    if row.len() != FIELD_COUNT {
        return Err(LoadIssue::MalformedRow {
            line,
            raw: raw_row(row),
        });
    }

    let issue = |field: RowField, value: &str| LoadIssue::Parse {
        line,
        field,
        value: value.to_string(),
    };

    let start = NaiveDate::parse_from_str(&row[0], DATE_FORMAT)
        .map_err(|_| issue(RowField::StartDate, &row[0]))?;
    let end = if row[1].is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(&row[1], DATE_FORMAT)
                .map_err(|_| issue(RowField::EndDate, &row[1]))?,
        )
    };
    let tombstone = parse_bool(&row[2]).ok_or_else(|| issue(RowField::Delete, &row[2]))?;
    let key = row[3].to_string();
    let value = row[4]
        .parse::<i64>()
        .map_err(|_| issue(RowField::Value, &row[4]))?;

    Ok(TemporalRecord {
        key,
        start,
        end,
        value,
        tombstone,
    })
}

/// Rejoin a row's fields for issue messages.
pub fn raw_row(row: &StringRecord) -> String {
    row.iter().collect::<Vec<_>>().join(",")
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bounded_row() {
        let record =
            parse_row(&row(&["01-01-2023", "12-31-2023", "false", "A", "20"]), 2).unwrap();
        assert_eq!(record.key, "A");
        assert_eq!(record.start, date(2023, 1, 1));
        assert_eq!(record.end, Some(date(2023, 12, 31)));
        assert_eq!(record.value, 20);
        assert!(!record.tombstone);
    }

    #[test]
    fn test_empty_end_is_open_ended() {
        let record = parse_row(&row(&["06-01-2023", "", "true", "B", "-5"]), 3).unwrap();
        assert_eq!(record.end, None);
        assert!(record.tombstone);
        assert_eq!(record.value, -5);
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = parse_row(&row(&["01-01-2023", "false", "A", "20"]), 7).unwrap_err();
        assert_eq!(
            err,
            LoadIssue::MalformedRow {
                line: 7,
                raw: "01-01-2023,false,A,20".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_start_date() {
        let err = parse_row(&row(&["13-45-2023", "", "false", "A", "1"]), 2).unwrap_err();
        assert_eq!(
            err,
            LoadIssue::Parse {
                line: 2,
                field: RowField::StartDate,
                value: "13-45-2023".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_end_date() {
        let err = parse_row(&row(&["01-01-2023", "not-a-date", "false", "A", "1"]), 2).unwrap_err();
        assert!(matches!(
            err,
            LoadIssue::Parse {
                field: RowField::EndDate,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_boolean_literal() {
        let err = parse_row(&row(&["01-01-2023", "", "yes", "A", "1"]), 2).unwrap_err();
        assert!(matches!(
            err,
            LoadIssue::Parse {
                field: RowField::Delete,
                ..
            }
        ));
        // Case-insensitive literals are accepted.
        assert!(parse_row(&row(&["01-01-2023", "", "TRUE", "A", "1"]), 2).is_ok());
        assert!(parse_row(&row(&["01-01-2023", "", "False", "A", "1"]), 2).is_ok());
    }

    #[test]
    fn test_bad_value() {
        let err = parse_row(&row(&["01-01-2023", "", "false", "A", "ten"]), 2).unwrap_err();
        assert!(matches!(
            err,
            LoadIssue::Parse {
                field: RowField::Value,
                ..
            }
        ));
    }

    #[test]
    fn test_reader_skips_header() {
        let input = "StartDate,EndDate,Delete,Key,Value\n01-01-2023,,false,A,1\n";
        let mut reader = reader(input.as_bytes());
        let rows: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "A");
    }
}
