//! `BadgeService` over the browser's `fetch`.

use std::rc::Rc;

use async_trait::async_trait;
use common::config::PortalConfig;
use common::model::badge::{BadgeMetadata, BadgeRecord};
use common::requests::{IssueRequest, IssueResponse};
use common::service::{BadgeService, ServiceError};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub struct HttpBadgeService {
    config: Rc<PortalConfig>,
}

impl HttpBadgeService {
    pub fn new(config: Rc<PortalConfig>) -> Self {
        Self { config }
    }
}

fn network(err: gloo_net::Error) -> ServiceError {
    ServiceError::Network(err.to_string())
}

/// Reads the body as text first so an empty or non-JSON body gets a readable
/// message instead of a bare JS exception.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let body = response.text().await.map_err(network)?;
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl BadgeService for HttpBadgeService {
    async fn verify(&self, badge_id: &str) -> Result<BadgeRecord, ServiceError> {
        let url = self.config.verify_endpoint(badge_id);
        let response = Request::get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        if !response.ok() {
            return Err(ServiceError::from_status(response.status()));
        }
        // the service answers `null` for ids it does not know
        decode::<Option<BadgeRecord>>(response)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    async fn fetch_metadata(&self, url: &str) -> Result<BadgeMetadata, ServiceError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        decode(response).await
    }

    async fn issue(&self, request: &IssueRequest) -> Result<IssueResponse, ServiceError> {
        let url = self.config.issue_endpoint();
        let response = Request::post(url.as_str())
            .header("Accept", "application/json")
            .header("X-API-Key", &self.config.api_key)
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        decode(response).await
    }
}
