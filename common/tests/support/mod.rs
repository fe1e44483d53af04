#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use common::config::PortalConfig;
use common::model::badge::{BadgeMetadata, BadgeRecord};
use common::requests::{IssueRequest, IssueResponse};
use common::service::{BadgeService, ServiceError};

/// In-memory issuing service that records every call it receives.
#[derive(Default)]
pub struct RecordingService {
    records: HashMap<String, Result<BadgeRecord, ServiceError>>,
    metadata: HashMap<String, Result<BadgeMetadata, ServiceError>>,
    issue_responses: RefCell<VecDeque<Result<IssueResponse, ServiceError>>>,
    pub verify_calls: RefCell<Vec<String>>,
    pub metadata_calls: RefCell<Vec<String>>,
    pub issue_calls: RefCell<Vec<IssueRequest>>,
}

#[allow(dead_code)]
impl RecordingService {
    pub fn with_record(mut self, badge_id: &str, record: Result<BadgeRecord, ServiceError>) -> Self {
        self.records.insert(badge_id.to_string(), record);
        self
    }

    pub fn with_metadata(mut self, url: &str, metadata: Result<BadgeMetadata, ServiceError>) -> Self {
        self.metadata.insert(url.to_string(), metadata);
        self
    }

    pub fn with_issue_responses(self, responses: Vec<Result<IssueResponse, ServiceError>>) -> Self {
        *self.issue_responses.borrow_mut() = VecDeque::from(responses);
        self
    }

    pub fn issued_names(&self) -> Vec<String> {
        self.issue_calls
            .borrow()
            .iter()
            .map(|r| r.recipient_name.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl BadgeService for RecordingService {
    async fn verify(&self, badge_id: &str) -> Result<BadgeRecord, ServiceError> {
        self.verify_calls.borrow_mut().push(badge_id.to_string());
        self.records
            .get(badge_id)
            .cloned()
            .unwrap_or(Err(ServiceError::NotFound))
    }

    async fn fetch_metadata(&self, url: &str) -> Result<BadgeMetadata, ServiceError> {
        self.metadata_calls.borrow_mut().push(url.to_string());
        self.metadata
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ServiceError::Network("connection refused".into())))
    }

    async fn issue(&self, request: &IssueRequest) -> Result<IssueResponse, ServiceError> {
        let call = {
            let mut calls = self.issue_calls.borrow_mut();
            calls.push(request.clone());
            calls.len()
        };
        self.issue_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(IssueResponse {
                    badge_id: format!("badge-{call}"),
                })
            })
    }
}

#[allow(dead_code)]
pub fn portal_config() -> PortalConfig {
    PortalConfig::from_lookup(|key| match key {
        "BADGE_SERVICE_URL" => Some("https://issuer.example".to_string()),
        "BADGE_PORTAL_URL" => Some("https://portal.example".to_string()),
        _ => None,
    })
    .expect("valid test config")
}
