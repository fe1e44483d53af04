//! Build-time portal configuration.
//!
//! Values are captured with `option_env!` when the bundle is compiled, so
//! changing them requires a rebuild (`BADGE_SERVICE_URL=... trunk build`).

use std::rc::Rc;

use common::config::{self, ConfigError, PortalConfig};

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        config::SERVICE_URL => option_env!("BADGE_SERVICE_URL"),
        config::PORTAL_URL => option_env!("BADGE_PORTAL_URL"),
        config::API_KEY => option_env!("BADGE_API_KEY"),
        config::ADMIN_USERNAME => option_env!("BADGE_ADMIN_USERNAME"),
        config::ADMIN_PASSWORD => option_env!("BADGE_ADMIN_PASSWORD"),
        config::LINKEDIN_ORG_ID => option_env!("BADGE_LINKEDIN_ORG_ID"),
        config::ISSUER_NAME => option_env!("BADGE_ISSUER_NAME"),
        config::ISSUER_URL => option_env!("BADGE_ISSUER_URL"),
        config::PLACEHOLDER_IMAGE => option_env!("BADGE_PLACEHOLDER_IMAGE"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load() -> Result<Rc<PortalConfig>, ConfigError> {
    if config::admin_pair_incomplete(build_env) {
        gloo_console::warn!(
            "BADGE_ADMIN_USERNAME and BADGE_ADMIN_PASSWORD must be set together; admin login is disabled"
        );
    }
    PortalConfig::from_lookup(build_env).map(Rc::new)
}
