//! Fetch-then-merge sequence shared by the badge and verification pages.

use crate::model::badge::BadgeView;
use crate::service::{BadgeService, ServiceError};

/// Outcome of a successful load. A failed metadata fetch does not fail the
/// load; it is handed back so the caller can log it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBadge {
    pub view: BadgeView,
    pub metadata_error: Option<ServiceError>,
}

/// Fetches the badge record, then its metadata document when one is linked.
pub async fn load_badge<S>(service: &S, badge_id: &str) -> Result<LoadedBadge, ServiceError>
where
    S: BadgeService + ?Sized,
{
    let record = service.verify(badge_id).await?;

    let (metadata, metadata_error) = match record.metadata_url() {
        Some(url) => match service.fetch_metadata(url).await {
            Ok(metadata) => (Some(metadata), None),
            Err(err) => (None, Some(err)),
        },
        None => (None, None),
    };

    Ok(LoadedBadge {
        view: BadgeView::new(badge_id, record, metadata),
        metadata_error,
    })
}

/// What a badge page shows at any point of its life.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(BadgeView),
    NotFound,
    Failed(String),
}

impl LoadState {
    pub fn from_error(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => LoadState::NotFound,
            err => LoadState::Failed(err.to_string()),
        }
    }
}

impl From<Result<BadgeView, ServiceError>> for LoadState {
    fn from(result: Result<BadgeView, ServiceError>) -> Self {
        match result {
            Ok(view) => LoadState::Loaded(view),
            Err(err) => LoadState::from_error(err),
        }
    }
}
