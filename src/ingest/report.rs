//! Load reports: ordered, non-fatal issues plus counters

use std::fmt;

use thiserror::Error;

/// A recoverable problem encountered during one load operation.
///
/// Issues are recorded in input order and surfaced after the load; none of
/// them halts processing of subsequent rows, except that a conflict poisons
/// its key for the remainder of the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadIssue {
    /// The row did not have exactly the expected number of fields
    #[error("invalid row format at line {line}: {raw}")]
    MalformedRow { line: u64, raw: String },

    /// A field failed to parse
    #[error("line {line}: cannot parse {field} '{value}'")]
    Parse {
        line: u64,
        field: RowField,
        value: String,
    },

    /// Two pending records for the same key overlap within this load
    #[error("date overlap for key '{key}' at line {line}: {raw}")]
    Conflict { key: String, line: u64, raw: String },
}

/// Which field of a row failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    StartDate,
    EndDate,
    Delete,
    Value,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartDate => "start date",
            Self::EndDate => "end date",
            Self::Delete => "delete flag",
            Self::Value => "value",
        };
        f.write_str(name)
    }
}

/// Summary of one load operation.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Issues in the order they were encountered
    pub issues: Vec<LoadIssue>,
    /// Data rows read from the source, header excluded
    pub rows_read: u64,
    /// Records accepted into pending groups
    pub rows_buffered: u64,
    /// Flushes performed, the end-of-stream flush included
    pub flushes: u64,
}

impl LoadReport {
    /// Whether any issue was recorded.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        let malformed = LoadIssue::MalformedRow {
            line: 3,
            raw: "01-01-2023,x,A".to_string(),
        };
        assert_eq!(
            malformed.to_string(),
            "invalid row format at line 3: 01-01-2023,x,A"
        );

        let parse = LoadIssue::Parse {
            line: 4,
            field: RowField::StartDate,
            value: "13-45-2023".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "line 4: cannot parse start date '13-45-2023'"
        );

        let conflict = LoadIssue::Conflict {
            key: "A".to_string(),
            line: 5,
            raw: "01-01-2023,,false,A,1".to_string(),
        };
        assert_eq!(
            conflict.to_string(),
            "date overlap for key 'A' at line 5: 01-01-2023,,false,A,1"
        );
    }

    #[test]
    fn test_report_has_issues() {
        let mut report = LoadReport::default();
        assert!(!report.has_issues());
        report.issues.push(LoadIssue::MalformedRow {
            line: 2,
            raw: String::new(),
        });
        assert!(report.has_issues());
    }
}
