//! Small DOM utilities shared by the views.
//!
//! - **User Feedback**: `show_toast` confirms a finished batch in the admin
//!   view.
//! - **Downloads**: `download_text` hands a generated file to the browser
//!   through a temporary object URL and a synthetic `<a download>` click.
//! - **Navigation**: `open_in_new_tab` for the LinkedIn share action.

use gloo_file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

const TOAST_MS: u32 = 3_000;

/// Shows `message` in a `.toast` banner (styled in `index.html`) that
/// removes itself after a few seconds. Failures are only logged.
pub fn show_toast(message: &str) {
    if let Err(err) = mount_toast(message) {
        gloo_console::error!("Could not show notification:", err);
    }
}

fn mount_toast(message: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));
    body.append_child(&toast)?;

    Timeout::new(TOAST_MS, move || toast.remove()).forget();
    Ok(())
}

/// Triggers a client-side download of `contents` as `file_name`.
///
/// The object URL is revoked a second later rather than right after the
/// click, which some browsers need to start the transfer.
pub fn download_text(contents: &str, file_name: &str, mime: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let url = ObjectUrl::from(Blob::new_with_options(contents, Some(mime)));

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("failed to create download link"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        drop(url);
    });
    Ok(())
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            gloo_console::error!("Could not open share window:", err);
        }
    }
}
