use std::rc::Rc;

use common::config::PortalConfig;
use common::loader::{load_badge, LoadState};
use yew::platform::spawn_local;
use yew::Callback;

use crate::client::HttpBadgeService;

/// Loads a badge in the background and reports `(badge_id, state)`.
///
/// A failed metadata fetch is only logged; the page still renders the record.
pub fn spawn_badge_load(config: Rc<PortalConfig>, badge_id: String, done: Callback<(String, LoadState)>) {
    let service = HttpBadgeService::new(config);

    spawn_local(async move {
        let state = match load_badge(&service, &badge_id).await {
            Ok(loaded) => {
                if let Some(err) = loaded.metadata_error {
                    gloo_console::error!(format!("Error fetching badge metadata: {err}"));
                }
                LoadState::Loaded(loaded.view)
            }
            Err(err) => {
                gloo_console::error!(format!("Error fetching badge {badge_id}: {err}"));
                LoadState::from_error(err)
            }
        };
        done.emit((badge_id, state));
    });
}
