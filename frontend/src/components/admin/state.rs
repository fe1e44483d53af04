//! Runtime state of the admin page.
//!
//! Nothing here outlives the page: reloading or navigating away drops the
//! authenticated flag together with any batch result.

use common::jobs::BatchStatus;
use yew::prelude::*;

pub struct AdminComponent {
    /// Login form fields.
    pub username: String,
    pub password: String,

    /// Set once the configured credentials matched.
    pub authenticated: bool,

    /// Shown above the login form.
    pub login_error: Option<String>,

    pub status: BatchStatus,

    /// Whether a file is currently dragged over the drop zone.
    pub drag_active: bool,

    /// Hidden `<input type="file">` behind the drop zone.
    pub file_input_ref: NodeRef,

    /// Incremented per upload and on sign out so late messages from an
    /// abandoned batch are ignored.
    pub run: u32,
}

impl AdminComponent {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            authenticated: false,
            login_error: None,
            status: BatchStatus::Idle,
            drag_active: false,
            file_input_ref: NodeRef::default(),
            run: 0,
        }
    }
}
