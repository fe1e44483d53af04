//! Seam between the views and the remote issuing service.
//!
//! The browser build implements [`BadgeService`] over `fetch`; tests use
//! in-memory recorders. Futures are not required to be `Send` because the
//! browser runs everything on one event loop.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::badge::{BadgeMetadata, BadgeRecord};
use crate::requests::{IssueRequest, IssueResponse};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response (DNS, CORS, offline...).
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Badge not found")]
    NotFound,
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Maps a non-success status, treating 404 as a missing badge.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ServiceError::NotFound
        } else {
            ServiceError::Status(status)
        }
    }
}

#[async_trait(?Send)]
pub trait BadgeService {
    /// `GET /badges/verify/{badge_id}`
    async fn verify(&self, badge_id: &str) -> Result<BadgeRecord, ServiceError>;

    /// `GET <metadata url>`
    async fn fetch_metadata(&self, url: &str) -> Result<BadgeMetadata, ServiceError>;

    /// `POST /badges/issue`
    async fn issue(&self, request: &IssueRequest) -> Result<IssueResponse, ServiceError>;
}
