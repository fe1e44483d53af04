//! Admin gate for the bulk-issuance view.
//!
//! The configured pair is baked into the bundle at build time and compared in
//! the browser. There is no session or token: reloading the page logs out.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Grants access only when a pair is configured and both fields match.
pub fn authorize(configured: Option<&AdminCredentials>, username: &str, password: &str) -> bool {
    configured.is_some_and(|creds| creds.matches(username, password))
}
