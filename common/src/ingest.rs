//! CSV ingestion for bulk issuance.
//!
//! Uploaded files are decoded as UTF-8, parsed with a header row, and checked
//! for the three recipient columns before any row is handed to the issuer.
//! Column names are matched case-insensitively after trimming; the original
//! header spelling is kept for the output file.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use thiserror::Error;

pub const BADGE_CLASS: &str = "Badge Class";
pub const NAME: &str = "Name";
pub const EMAIL_ADDRESS: &str = "Email Address";
pub const BADGE_URL: &str = "Badge URL";

pub const REQUIRED_COLUMNS: [&str; 3] = [BADGE_CLASS, NAME, EMAIL_ADDRESS];

/// MIME type of the generated download.
pub const OUTPUT_MIME: &str = "text/csv;charset=utf-8;";
pub const OUTPUT_FILE_NAME: &str = "processed_badges.csv";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("Please upload a CSV file")]
    UnsupportedFileType,
    #[error("Error parsing CSV file: file is not valid UTF-8")]
    Encoding,
    #[error("Error parsing CSV file: {0}")]
    Parse(String),
    #[error("Invalid CSV format: No data found")]
    Empty,
    #[error("CSV must contain columns: Badge Class, Name, Email Address")]
    MissingColumns,
    #[error("Error writing CSV file: {0}")]
    Write(String),
}

/// Accepts `text/csv` and `text/plain`. Browsers report an empty type for
/// unknown extensions, in which case the `.csv` suffix decides.
pub fn check_file_type(mime: &str, file_name: &str) -> Result<(), IngestError> {
    let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    let accepted = match essence.as_str() {
        "text/csv" | "text/plain" => true,
        "" => file_name.to_ascii_lowercase().ends_with(".csv"),
        _ => false,
    };
    if accepted {
        Ok(())
    } else {
        Err(IngestError::UnsupportedFileType)
    }
}

fn same_column(header: &str, column: &str) -> bool {
    header.trim().eq_ignore_ascii_case(column)
}

/// A parsed upload: header row plus data rows of equal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parses and validates an upload. Checks run in the order the admin sees
    /// them: encoding and syntax, then emptiness, then required columns.
    pub fn parse(bytes: &[u8]) -> Result<Self, IngestError> {
        let text = std::str::from_utf8(bytes).map_err(|_| IngestError::Encoding)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| IngestError::Parse(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| IngestError::Parse(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let table = Self { headers, rows };
        if table.is_empty() {
            return Err(IngestError::Empty);
        }
        if !table.missing_columns().is_empty() {
            return Err(IngestError::MissingColumns);
        }
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Required columns that no header matches.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !self.headers.iter().any(|h| same_column(h, column)))
            .collect()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| same_column(h, column))
    }

    pub fn records(&self) -> impl Iterator<Item = CsvRecord<'_>> {
        self.rows.iter().map(|values| CsvRecord {
            headers: &self.headers,
            values,
        })
    }
}

/// One data row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct CsvRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> CsvRecord<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| same_column(h, column))?;
        self.values.get(idx).map(String::as_str)
    }

    /// Like [`get`](Self::get) but empty when the column is absent.
    pub fn value(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or_default()
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

/// Serializes a header row and data rows as CRLF-terminated CSV.
pub fn write_csv(headers: &[String], rows: &[Vec<String>]) -> Result<String, IngestError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| IngestError::Write(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| IngestError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| IngestError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| IngestError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_gate() {
        assert!(check_file_type("text/csv", "people.csv").is_ok());
        assert!(check_file_type("text/plain", "people.txt").is_ok());
        assert!(check_file_type("text/csv; charset=utf-8", "people.csv").is_ok());
        assert!(check_file_type("", "PEOPLE.CSV").is_ok());
        assert_eq!(
            check_file_type("application/pdf", "people.csv"),
            Err(IngestError::UnsupportedFileType)
        );
        assert_eq!(check_file_type("", "people.xlsx"), Err(IngestError::UnsupportedFileType));
    }

    #[test]
    fn parses_rows_and_matches_headers_loosely() {
        let data = "\u{feff} badge class ,NAME,Email Address,Cohort\r\n\
                    http://b.example/rust,Ada,ada@example.com,2024\r\n\
                    \r\n\
                    https://b.example/go,\"Grace, H.\",grace@example.com,2023\r\n";
        let table = CsvTable::parse(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers()[0], " badge class ");
        assert_eq!(table.column_index(BADGE_CLASS), Some(0));

        let names: Vec<&str> = table.records().map(|r| r.value(NAME)).collect();
        assert_eq!(names, ["Ada", "Grace, H."]);
        assert_eq!(table.records().next().unwrap().get("cohort"), Some("2024"));
        assert_eq!(table.records().next().unwrap().get("Missing"), None);
    }

    #[test]
    fn header_only_file_has_no_data() {
        let data = "Badge Class,Name,Email Address\n";
        assert_eq!(CsvTable::parse(data.as_bytes()), Err(IngestError::Empty));
        assert_eq!(CsvTable::parse(b""), Err(IngestError::Empty));
    }

    #[test]
    fn missing_column_is_reported() {
        let data = "Badge Class,Name\nhttp://b.example/rust,Ada\n";
        assert_eq!(CsvTable::parse(data.as_bytes()), Err(IngestError::MissingColumns));
        assert_eq!(
            IngestError::MissingColumns.to_string(),
            "CSV must contain columns: Badge Class, Name, Email Address"
        );
    }

    #[test]
    fn ragged_rows_are_parse_errors() {
        let data = "Badge Class,Name,Email Address\nhttp://b.example/rust,Ada\n";
        let err = CsvTable::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
        assert!(err.to_string().starts_with("Error parsing CSV file: "));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let data = b"Badge Class,Name,Email Address\n\xff\xfe,Ada,ada@example.com\n";
        assert_eq!(CsvTable::parse(data), Err(IngestError::Encoding));
    }

    #[test]
    fn writer_quotes_where_needed() {
        let headers = vec!["Name".to_string(), "Note".to_string()];
        let rows = vec![vec!["Grace, H.".to_string(), "said \"hi\"".to_string()]];
        let out = write_csv(&headers, &rows).unwrap();
        assert_eq!(out, "Name,Note\r\n\"Grace, H.\",\"said \"\"hi\"\"\"\r\n");
    }
}
