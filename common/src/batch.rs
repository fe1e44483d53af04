//! Bulk issuance: one `issue` call per CSV row, strictly in order.
//!
//! The first failing row aborts the run and nothing is written; there is no
//! partial output and no resumption. Each successful row gets its Badge Class
//! moved to `https:` and a `Badge URL` column appended.

use thiserror::Error;

use crate::config::PortalConfig;
use crate::ingest::{
    check_file_type, write_csv, CsvTable, IngestError, BADGE_CLASS, BADGE_URL, EMAIL_ADDRESS, NAME,
};
use crate::requests::IssueRequest;
use crate::service::{BadgeService, ServiceError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// `row` is 1-based and counts data rows only.
    #[error("Error processing row for {name}: {source}")]
    Row {
        row: usize,
        name: String,
        source: ServiceError,
    },
}

/// The augmented table produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl BatchOutput {
    pub fn total_records(&self) -> usize {
        self.rows.len()
    }

    /// Every processed row produced exactly one new badge.
    pub fn badges_created(&self) -> usize {
        self.rows.len()
    }

    pub fn to_csv(&self) -> Result<String, IngestError> {
        write_csv(&self.headers, &self.rows)
    }
}

/// Forces encrypted transport on a badge class URL (`http:` prefix only).
pub fn https_badge_class(raw: &str) -> String {
    match raw.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => raw.to_string(),
    }
}

/// Issues one badge per row. `progress` is called after each row with
/// `(done, total)`.
pub async fn issue_batch<S, P>(
    service: &S,
    config: &PortalConfig,
    table: &CsvTable,
    mut progress: P,
) -> Result<BatchOutput, BatchError>
where
    S: BadgeService + ?Sized,
    P: FnMut(usize, usize),
{
    let class_idx = table
        .column_index(BADGE_CLASS)
        .ok_or(IngestError::MissingColumns)?;
    let total = table.len();
    let mut rows = Vec::with_capacity(total);

    for (index, record) in table.records().enumerate() {
        let request = IssueRequest {
            recipient_email: record.value(EMAIL_ADDRESS).to_string(),
            recipient_name: record.value(NAME).to_string(),
            badge_class_url: record.value(BADGE_CLASS).to_string(),
        };

        let badge_id = match service.issue(&request).await {
            Ok(response) if !response.badge_id.trim().is_empty() => response.badge_id,
            Ok(_) => {
                let source = ServiceError::Decode("missing badge_id".into());
                return Err(row_error(index, &request, source));
            }
            Err(source) => return Err(row_error(index, &request, source)),
        };

        let mut values = record.values().to_vec();
        if let Some(class) = values.get_mut(class_idx) {
            *class = https_badge_class(class);
        }
        values.push(config.badge_page_url(&badge_id).to_string());
        rows.push(values);

        progress(index + 1, total);
    }

    let mut headers = table.headers().to_vec();
    headers.push(BADGE_URL.to_string());
    Ok(BatchOutput { headers, rows })
}

fn row_error(index: usize, request: &IssueRequest, source: ServiceError) -> BatchError {
    BatchError::Row {
        row: index + 1,
        name: request.recipient_name.clone(),
        source,
    }
}

/// Full admin pipeline for one uploaded file: type check, parse and
/// column validation, then issuance. Validation failures never reach the
/// service.
pub async fn process_upload<S, P>(
    service: &S,
    config: &PortalConfig,
    mime: &str,
    file_name: &str,
    bytes: &[u8],
    progress: P,
) -> Result<BatchOutput, BatchError>
where
    S: BadgeService + ?Sized,
    P: FnMut(usize, usize),
{
    check_file_type(mime, file_name)?;
    let table = CsvTable::parse(bytes)?;
    issue_batch(service, config, &table, progress).await
}
