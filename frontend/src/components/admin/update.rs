//! Update function for the admin component.
//!
//! Receives the current state, the `Context`, and a `Msg`, mutates the state
//! and returns whether the view should re-render. The batch itself runs in a
//! spawned future and reports back through `Msg::Progress` and
//! `Msg::BatchFinished`.

use common::auth::authorize;
use common::batch::{process_upload, BatchOutput};
use common::ingest::{OUTPUT_FILE_NAME, OUTPUT_MIME};
use common::jobs::BatchStatus;
use gloo_file::futures::read_as_bytes;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminComponent;
use crate::client::HttpBadgeService;
use crate::helpers::{download_text, show_toast};

pub fn update(component: &mut AdminComponent, ctx: &Context<AdminComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateUsername(username) => {
            component.username = username;
            true
        }
        Msg::UpdatePassword(password) => {
            component.password = password;
            true
        }
        Msg::Login => {
            let configured = ctx.props().config.admin.as_ref();
            if authorize(configured, &component.username, &component.password) {
                component.authenticated = true;
                component.login_error = None;
                component.password.clear();
            } else {
                component.login_error = Some("Invalid credentials".to_string());
            }
            true
        }
        Msg::SignOut => {
            let run = component.run + 1;
            *component = AdminComponent::new();
            component.run = run;
            true
        }
        Msg::SetDragActive(active) => {
            if component.drag_active == active {
                return false;
            }
            component.drag_active = active;
            true
        }
        Msg::OpenFileDialog => {
            if !component.status.is_running() {
                if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
            }
            false
        }
        Msg::FileSelected(file) => {
            component.drag_active = false;
            // allow picking the same file again later
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if !component.authenticated || component.status.is_running() {
                return true;
            }

            component.run += 1;
            component.status = BatchStatus::InProgress { done: 0, total: 0 };
            start_batch(ctx, component.run, file);
            true
        }
        Msg::Progress { run, done, total } => {
            if run != component.run {
                return false;
            }
            component.status = BatchStatus::InProgress {
                done: done as u32,
                total: total as u32,
            };
            true
        }
        Msg::BatchFinished { run, result } => {
            if run != component.run {
                return false;
            }
            component.status = match result {
                Ok(output) => finish(&output),
                Err(message) => BatchStatus::Failed(message),
            };
            true
        }
    }
}

/// Hands the augmented CSV to the browser and summarizes the run.
fn finish(output: &BatchOutput) -> BatchStatus {
    let csv = match output.to_csv() {
        Ok(csv) => csv,
        Err(err) => return BatchStatus::Failed(format!("Error processing CSV: {err}")),
    };
    if let Err(err) = download_text(&csv, OUTPUT_FILE_NAME, OUTPUT_MIME) {
        gloo_console::error!("Download failed:", err);
        return BatchStatus::Failed("Error processing CSV: download failed".to_string());
    }

    show_toast(&format!("Generated {} new badges.", output.badges_created()));
    BatchStatus::Completed {
        total_records: output.total_records() as u32,
        badges_created: output.badges_created() as u32,
    }
}

fn start_batch(ctx: &Context<AdminComponent>, run: u32, file: web_sys::File) {
    let link = ctx.link().clone();
    let config = ctx.props().config.clone();

    spawn_local(async move {
        let file = gloo_file::File::from(file);
        let mime = file.raw_mime_type();
        let name = file.name();

        let result = match read_as_bytes(&file).await {
            Ok(bytes) => {
                let service = HttpBadgeService::new(config.clone());
                let progress = link.clone();
                process_upload(&service, &config, &mime, &name, &bytes, move |done, total| {
                    progress.send_message(Msg::Progress { run, done, total });
                })
                .await
                .map_err(|err| {
                    gloo_console::error!(format!("Error processing {name}: {err}"));
                    err.to_string()
                })
            }
            Err(err) => Err(format!("Error reading file: {err}")),
        };

        link.send_message(Msg::BatchFinished { run, result });
    });
}
