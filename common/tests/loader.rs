mod support;

use common::loader::{load_badge, LoadState};
use common::model::badge::{BadgeJson, BadgeMetadata, BadgeRecord};
use common::service::ServiceError;
use futures::executor::block_on;
use support::RecordingService;

const METADATA_URL: &str = "https://issuer.example/meta/rust.json";
const PLACEHOLDER: &str = "https://placehold.jp/450x450.png";

fn record() -> BadgeRecord {
    BadgeRecord {
        badge_id: Some("abc123".into()),
        recipient_name: Some("Ada Lovelace".into()),
        issued_on: Some("2024-03-05T10:15:00Z".into()),
        badge_json: Some(BadgeJson {
            badge: Some(METADATA_URL.into()),
        }),
        ..Default::default()
    }
}

fn metadata() -> BadgeMetadata {
    BadgeMetadata {
        name: Some("Rust Basics".into()),
        image: Some("https://img.example/rust.png".into()),
        description: Some("Ownership and borrowing".into()),
    }
}

#[test]
fn merges_record_and_metadata_with_one_fetch_each() {
    let service = RecordingService::default()
        .with_record("abc123", Ok(record()))
        .with_metadata(METADATA_URL, Ok(metadata()));

    let loaded = block_on(load_badge(&service, "abc123")).unwrap();

    assert_eq!(loaded.metadata_error, None);
    assert_eq!(loaded.view.display_name(), "Rust Basics");
    assert_eq!(loaded.view.image_url(PLACEHOLDER), "https://img.example/rust.png");
    assert_eq!(loaded.view.issued_label(), "5 March 2024");
    assert_eq!(loaded.view.recipient_name(), "Ada Lovelace");
    assert_eq!(*service.verify_calls.borrow(), ["abc123"]);
    assert_eq!(*service.metadata_calls.borrow(), [METADATA_URL]);
}

#[test]
fn metadata_failure_keeps_primary_attributes() {
    let service = RecordingService::default()
        .with_record("abc123", Ok(record()))
        .with_metadata(METADATA_URL, Err(ServiceError::Status(503)));

    let loaded = block_on(load_badge(&service, "abc123")).unwrap();

    assert_eq!(loaded.metadata_error, Some(ServiceError::Status(503)));
    assert_eq!(loaded.view.image_url(PLACEHOLDER), PLACEHOLDER);
    assert_eq!(loaded.view.recipient_name(), "Ada Lovelace");
    assert_eq!(loaded.view.issued_label(), "5 March 2024");
    assert_eq!(loaded.view.display_name(), "N/A");
}

#[test]
fn record_without_metadata_url_skips_second_fetch() {
    let plain = BadgeRecord {
        name: Some("Plain Badge".into()),
        ..Default::default()
    };
    let service = RecordingService::default().with_record("plain", Ok(plain));

    let loaded = block_on(load_badge(&service, "plain")).unwrap();

    assert_eq!(loaded.view.display_name(), "Plain Badge");
    assert!(service.metadata_calls.borrow().is_empty());
}

#[test]
fn primary_failure_surfaces_as_error_state() {
    let service = RecordingService::default()
        .with_record("broken", Err(ServiceError::Network("Failed to fetch".into())));

    let state: LoadState = block_on(load_badge(&service, "broken"))
        .map(|loaded| loaded.view)
        .into();
    assert_eq!(state, LoadState::Failed("Failed to fetch".into()));
    assert!(service.metadata_calls.borrow().is_empty());

    let state: LoadState = block_on(load_badge(&service, "unknown"))
        .map(|loaded| loaded.view)
        .into();
    assert_eq!(state, LoadState::NotFound);
}
