//! "Add to profile" deep link for LinkedIn certifications.

use chrono::Datelike;
use url::Url;

use crate::config::PortalConfig;
use crate::model::badge::BadgeView;

pub const LINKEDIN_ADD_TO_PROFILE: &str = "https://www.linkedin.com/profile/add/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDetails {
    pub name: String,
    pub organization_id: String,
    pub issue_year: i32,
    /// 1-based calendar month.
    pub issue_month: u32,
    pub cert_url: String,
    pub cert_id: String,
}

impl ShareDetails {
    /// `None` when the badge has no parseable issue date; the share action is
    /// disabled in that case.
    pub fn for_badge(config: &PortalConfig, view: &BadgeView) -> Option<Self> {
        let issued = view.issued_date()?;
        Some(Self {
            name: view.display_name().to_string(),
            organization_id: config.linkedin_org_id.clone(),
            issue_year: issued.year(),
            issue_month: issued.month(),
            cert_url: config.verification_url(&view.badge_id).to_string(),
            cert_id: view.badge_id.clone(),
        })
    }

    pub fn linkedin_url(&self) -> String {
        let year = self.issue_year.to_string();
        let month = self.issue_month.to_string();
        let pairs = [
            ("startTask", "CERTIFICATION_NAME"),
            ("name", self.name.as_str()),
            ("organizationId", self.organization_id.as_str()),
            ("issueYear", year.as_str()),
            ("issueMonth", month.as_str()),
            ("certUrl", self.cert_url.as_str()),
            ("certId", self.cert_id.as_str()),
        ];
        match Url::parse_with_params(LINKEDIN_ADD_TO_PROFILE, pairs) {
            Ok(url) => url.to_string(),
            Err(_) => LINKEDIN_ADD_TO_PROFILE.to_string(),
        }
    }
}
