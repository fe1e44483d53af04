//! View rendering for the admin page: a login card until the credentials
//! match, then the drop zone with the result of the last batch.

use common::ingest::REQUIRED_COLUMNS;
use common::jobs::BatchStatus;
use num_format::{Locale, ToFormattedString};
use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminComponent;

pub fn view(component: &AdminComponent, ctx: &Context<AdminComponent>) -> Html {
    let link = ctx.link();
    if component.authenticated {
        build_upload(component, link)
    } else {
        build_login(component, link)
    }
}

fn error_box(message: &str) -> Html {
    html! {
        <div class="error-box">{message.to_string()}</div>
    }
}

fn build_login(component: &AdminComponent, link: &Scope<AdminComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Login
    });

    html! {
        <div class="admin-page centered">
            <div class="card login-card">
                <h2>{"Admin Login"}</h2>
                <form {onsubmit}>
                    { component.login_error.as_deref().map(error_box).unwrap_or_default() }
                    <input
                        type="text"
                        required=true
                        placeholder="Username"
                        value={component.username.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateUsername(input.value())
                        })}
                    />
                    <input
                        type="password"
                        required=true
                        placeholder="Password"
                        value={component.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdatePassword(input.value())
                        })}
                    />
                    <button type="submit" class="primary-btn">{"Sign in"}</button>
                </form>
            </div>
        </div>
    }
}

fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

fn build_upload(component: &AdminComponent, link: &Scope<AdminComponent>) -> Html {
    let ondragover = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragActive(true)
    });
    let ondragleave = link.callback(|_: DragEvent| Msg::SetDragActive(false));
    let ondrop = link.batch_callback(|e: DragEvent| {
        e.prevent_default();
        let file = first_file(e.data_transfer().and_then(|dt| dt.files()));
        Some(match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::SetDragActive(false),
        })
    });
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        first_file(input.files()).map(Msg::FileSelected)
    });

    let failure = match &component.status {
        BatchStatus::Failed(message) => error_box(message),
        _ => html! {},
    };

    html! {
        <div class="admin-page">
            <div class="card upload-card">
                <div class="upload-header">
                    <h2>{"Badge Management"}</h2>
                    <p class="muted">{"Upload a CSV file containing badge details"}</p>
                </div>

                { failure }

                <div
                    class={classes!("drop-zone", component.drag_active.then_some("active"))}
                    onclick={link.callback(|_| Msg::OpenFileDialog)}
                    {ondragover}
                    {ondragleave}
                    {ondrop}
                >
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        style="display:none"
                        ref={component.file_input_ref.clone()}
                        {onchange}
                    />
                    { drop_zone_body(component) }
                </div>

                { build_summary(&component.status) }
            </div>

            <button class="danger-btn" onclick={link.callback(|_| Msg::SignOut)}>
                {"Sign Out"}
            </button>
        </div>
    }
}

fn drop_zone_body(component: &AdminComponent) -> Html {
    match &component.status {
        BatchStatus::InProgress { done, total } => {
            let progress = if *total > 0 {
                format!("Processing... {done}/{total}")
            } else {
                "Processing...".to_string()
            };
            html! { <div class="pulse">{progress}</div> }
        }
        _ => {
            let prompt = if component.drag_active {
                "Drop the CSV file here"
            } else {
                "Drag 'n' drop a CSV file here, or click to select one"
            };
            html! {
                <div>
                    <p class="muted">{prompt}</p>
                    <p class="hint">{format!("The CSV should contain: {}", REQUIRED_COLUMNS.join(", "))}</p>
                </div>
            }
        }
    }
}

fn build_summary(status: &BatchStatus) -> Html {
    match status {
        BatchStatus::Completed {
            total_records,
            badges_created,
        } => html! {
            <div class="summary">
                <h3>{"Processing Results"}</h3>
                <p>{format!("Processed {} records", total_records.to_formatted_string(&Locale::en))}</p>
                <p>{format!("Generated {} new badges", badges_created.to_formatted_string(&Locale::en))}</p>
            </div>
        },
        _ => html! {},
    }
}
