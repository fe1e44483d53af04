use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Badge record as returned by `GET /badges/verify/{badge_id}`.
///
/// Every field is optional on the wire: the issuing service is free to omit
/// whatever it does not know, and the views fall back to placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub badge_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub recipient_email: Option<String>,
    /// Issuance timestamp as sent by the service (ISO 8601 flavours).
    #[serde(default)]
    pub issued_on: Option<String>,
    #[serde(default)]
    pub badge_class_url: Option<String>,
    #[serde(default)]
    pub badge_json: Option<BadgeJson>,
}

/// Nested assertion document; `badge` points at the hosted metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeJson {
    #[serde(default)]
    pub badge: Option<String>,
}

/// Externally hosted metadata document for a badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BadgeRecord {
    /// URL of the metadata document, if the record carries a usable one.
    pub fn metadata_url(&self) -> Option<&str> {
        self.badge_json
            .as_ref()?
            .badge
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn issued_date(&self) -> Option<NaiveDate> {
        self.issued_on.as_deref().and_then(parse_issued_on)
    }
}

/// A badge record merged with its (optional) metadata, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
    pub badge_id: String,
    pub record: BadgeRecord,
    pub metadata: Option<BadgeMetadata>,
}

const NOT_AVAILABLE: &str = "N/A";

impl BadgeView {
    pub fn new(badge_id: &str, record: BadgeRecord, metadata: Option<BadgeMetadata>) -> Self {
        Self {
            badge_id: badge_id.to_string(),
            record,
            metadata,
        }
    }

    fn metadata_field<'a>(&'a self, pick: fn(&'a BadgeMetadata) -> &'a Option<String>) -> Option<&'a str> {
        self.metadata
            .as_ref()
            .and_then(|m| pick(m).as_deref())
            .filter(|v| !v.trim().is_empty())
    }

    /// Metadata name, then the record's own name.
    pub fn badge_name(&self) -> Option<&str> {
        self.metadata_field(|m| &m.name)
            .or_else(|| self.record.name.as_deref().filter(|v| !v.trim().is_empty()))
    }

    pub fn display_name(&self) -> &str {
        self.badge_name().unwrap_or(NOT_AVAILABLE)
    }

    /// Metadata image, or `placeholder` when metadata is missing or has none.
    pub fn image_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.metadata_field(|m| &m.image).unwrap_or(placeholder)
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata_field(|m| &m.description)
    }

    pub fn recipient_name(&self) -> &str {
        self.record
            .recipient_name
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn issued_date(&self) -> Option<NaiveDate> {
        self.record.issued_date()
    }

    /// Human readable issue date, `N/A` when absent or unparseable.
    pub fn issued_label(&self) -> String {
        match self.issued_date() {
            Some(date) => format_date(date),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), date.format("%B"), date.year())
}

/// Parses the issuance timestamps the service is known to emit: RFC 3339,
/// naive ISO date-times (with or without fractional seconds) and bare dates.
pub fn parse_issued_on(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
