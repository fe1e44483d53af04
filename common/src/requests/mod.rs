use serde::{Deserialize, Serialize};

/// Request payload for `POST /badges/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
    pub recipient_email: String,
    pub recipient_name: String,
    pub badge_class_url: String,
}

/// Response payload of `POST /badges/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueResponse {
    pub badge_id: String,
}
