//! Portal configuration.
//!
//! Values come from a key lookup so the frontend can feed build-time
//! constants (`option_env!`) while tests feed plain maps. Empty values count
//! as unset.

use thiserror::Error;
use url::Url;

use crate::auth::AdminCredentials;

pub const SERVICE_URL: &str = "BADGE_SERVICE_URL";
pub const PORTAL_URL: &str = "BADGE_PORTAL_URL";
pub const API_KEY: &str = "BADGE_API_KEY";
pub const ADMIN_USERNAME: &str = "BADGE_ADMIN_USERNAME";
pub const ADMIN_PASSWORD: &str = "BADGE_ADMIN_PASSWORD";
pub const LINKEDIN_ORG_ID: &str = "BADGE_LINKEDIN_ORG_ID";
pub const ISSUER_NAME: &str = "BADGE_ISSUER_NAME";
pub const ISSUER_URL: &str = "BADGE_ISSUER_URL";
pub const PLACEHOLDER_IMAGE: &str = "BADGE_PLACEHOLDER_IMAGE";

const DEFAULT_SERVICE_URL: &str = "https://zopencert.onrender.com";
const DEFAULT_PORTAL_URL: &str = "https://zcertify.zairza.co.in";
const DEFAULT_LINKEDIN_ORG_ID: &str = "13764293";
const DEFAULT_ISSUER_NAME: &str = "Zairza";
const DEFAULT_ISSUER_URL: &str = "https://www.zairza.co.in";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.jp/450x450.png";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    /// Base URL of the remote issuing service.
    pub service_url: Url,
    /// Public base URL of this portal, used for badge and verification links.
    pub portal_url: Url,
    pub api_key: String,
    pub admin: Option<AdminCredentials>,
    pub linkedin_org_id: String,
    pub issuer_name: String,
    pub issuer_url: String,
    pub placeholder_image: String,
}

impl PortalConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let service_url = parse_base_url(&or(SERVICE_URL, DEFAULT_SERVICE_URL))
            .ok_or(ConfigError::Invalid("BADGE_SERVICE_URL must be an absolute http(s) URL"))?;
        let portal_url = parse_base_url(&or(PORTAL_URL, DEFAULT_PORTAL_URL))
            .ok_or(ConfigError::Invalid("BADGE_PORTAL_URL must be an absolute http(s) URL"))?;

        // a half-set pair disables the admin view instead of the whole portal
        let admin = match (get(ADMIN_USERNAME), get(ADMIN_PASSWORD)) {
            (Some(username), Some(password)) => Some(AdminCredentials::new(username, password)),
            _ => None,
        };

        Ok(Self {
            service_url,
            portal_url,
            api_key: get(API_KEY).unwrap_or_default(),
            admin,
            linkedin_org_id: or(LINKEDIN_ORG_ID, DEFAULT_LINKEDIN_ORG_ID),
            issuer_name: or(ISSUER_NAME, DEFAULT_ISSUER_NAME),
            issuer_url: or(ISSUER_URL, DEFAULT_ISSUER_URL),
            placeholder_image: or(PLACEHOLDER_IMAGE, DEFAULT_PLACEHOLDER_IMAGE),
        })
    }

    /// `GET {service}/badges/verify/{badge_id}`
    pub fn verify_endpoint(&self, badge_id: &str) -> Url {
        with_segments(&self.service_url, &["badges", "verify", badge_id])
    }

    /// `POST {service}/badges/issue`
    pub fn issue_endpoint(&self) -> Url {
        with_segments(&self.service_url, &["badges", "issue"])
    }

    /// Public page that displays an issued badge.
    pub fn badge_page_url(&self, badge_id: &str) -> Url {
        with_segments(&self.portal_url, &["badges", badge_id])
    }

    /// Public page that verifies an issued badge.
    pub fn verification_url(&self, badge_id: &str) -> Url {
        with_segments(&self.portal_url, &["verify", badge_id])
    }
}

/// True when exactly one of the admin username and password is set. Such a
/// pair is treated as unset; callers use this to warn about it.
pub fn admin_pair_incomplete<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| lookup(key).is_some_and(|v| !v.trim().is_empty());
    set(ADMIN_USERNAME) != set(ADMIN_PASSWORD)
}

fn parse_base_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    let web = matches!(url.scheme(), "http" | "https");
    (web && !url.cannot_be_a_base()).then_some(url)
}

/// Appends path segments to `base`, percent-encoding each one.
fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authorize;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<PortalConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PortalConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.service_url.as_str(), "https://zopencert.onrender.com/");
        assert_eq!(cfg.linkedin_org_id, "13764293");
        assert_eq!(cfg.placeholder_image, "https://placehold.jp/450x450.png");
        assert_eq!(cfg.api_key, "");
        assert!(cfg.admin.is_none());
    }

    #[test]
    fn endpoints_are_joined_under_base_path() {
        let cfg = config(&[
            (SERVICE_URL, "http://127.0.0.1:8000/api/"),
            (PORTAL_URL, "https://badges.example.org"),
        ])
        .unwrap();
        assert_eq!(
            cfg.verify_endpoint("abc123").as_str(),
            "http://127.0.0.1:8000/api/badges/verify/abc123"
        );
        assert_eq!(cfg.issue_endpoint().as_str(), "http://127.0.0.1:8000/api/badges/issue");
        assert_eq!(
            cfg.badge_page_url("abc123").as_str(),
            "https://badges.example.org/badges/abc123"
        );
        assert_eq!(
            cfg.verification_url("abc123").as_str(),
            "https://badges.example.org/verify/abc123"
        );
    }

    #[test]
    fn badge_ids_are_escaped_as_one_segment() {
        let cfg = config(&[]).unwrap();
        assert_eq!(
            cfg.verify_endpoint("a/b c").as_str(),
            "https://zopencert.onrender.com/badges/verify/a%2Fb%20c"
        );
    }

    #[test]
    fn admin_pair_must_be_complete() {
        let cfg = config(&[(ADMIN_USERNAME, "admin"), (ADMIN_PASSWORD, "pw")]).unwrap();
        assert_eq!(cfg.admin, Some(AdminCredentials::new("admin", "pw")));

        let cfg = config(&[(ADMIN_USERNAME, "admin")]).unwrap();
        assert!(cfg.admin.is_none());
        let cfg = config(&[(ADMIN_USERNAME, " "), (ADMIN_PASSWORD, "pw")]).unwrap();
        assert!(cfg.admin.is_none());
    }

    #[test]
    fn half_set_admin_pair_keeps_public_config_and_denies_login() {
        let lookup = |key: &str| (key == ADMIN_USERNAME).then(|| "admin".to_string());
        assert!(admin_pair_incomplete(lookup));

        let cfg = PortalConfig::from_lookup(lookup).unwrap();
        assert_eq!(cfg.portal_url.as_str(), "https://zcertify.zairza.co.in/");
        assert!(!authorize(cfg.admin.as_ref(), "admin", ""));
        assert!(!authorize(cfg.admin.as_ref(), "admin", "admin"));
    }

    #[test]
    fn complete_or_empty_admin_pair_is_not_flagged() {
        assert!(!admin_pair_incomplete(|_| None));
        assert!(!admin_pair_incomplete(|key: &str| {
            [ADMIN_USERNAME, ADMIN_PASSWORD].contains(&key).then(|| "x".to_string())
        }));
    }

    #[test]
    fn rejects_non_web_urls() {
        assert!(config(&[(SERVICE_URL, "not a url")]).is_err());
        assert!(config(&[(PORTAL_URL, "mailto:someone@example.com")]).is_err());
        assert!(config(&[(SERVICE_URL, "ftp://files.example.com")]).is_err());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[(SERVICE_URL, "   "), (ISSUER_NAME, "")]).unwrap();
        assert_eq!(cfg.service_url.as_str(), "https://zopencert.onrender.com/");
        assert_eq!(cfg.issuer_name, "Zairza");
    }
}
