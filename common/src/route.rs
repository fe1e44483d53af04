use percent_encoding::percent_decode_str;

/// Pages of the portal, keyed by browser path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/badges/{badge_id}`
    Badge(String),
    /// `/verify/{badge_id}`
    Verify(String),
    /// `/admin`
    Admin,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["badges", id] => decode_id(id).map_or(Route::NotFound, Route::Badge),
            ["verify", id] => decode_id(id).map_or(Route::NotFound, Route::Verify),
            ["admin"] => Route::Admin,
            _ => Route::NotFound,
        }
    }
}

fn decode_id(raw: &str) -> Option<String> {
    let id = percent_decode_str(raw).decode_utf8().ok()?;
    let id = id.trim();
    (!id.is_empty()).then(|| id.to_string())
}
