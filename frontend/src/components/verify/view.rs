use common::loader::LoadState;
use common::model::badge::BadgeView;
use yew::prelude::*;

use super::VerifyComponent;
use crate::components::badge_image::badge_image;

pub fn view(component: &VerifyComponent, ctx: &Context<VerifyComponent>) -> Html {
    match &component.state {
        LoadState::Loading => html! {
            <div class="verify-page centered">
                <div class="card">
                    <div class="spinner"></div>
                    <p class="muted">{"Verifying badge..."}</p>
                </div>
            </div>
        },
        LoadState::Failed(message) => status_card("❌", "Verification Failed", message, "error-text"),
        LoadState::NotFound => status_card(
            "⚠️",
            "Badge Not Found",
            "The requested badge could not be found.",
            "warning-text",
        ),
        LoadState::Loaded(badge) => verified(badge, ctx),
    }
}

fn status_card(icon: &str, title: &str, detail: &str, tone: &'static str) -> Html {
    html! {
        <div class="verify-page centered">
            <div class="card status-card">
                <div class={classes!("status-icon", tone)}>{icon.to_string()}</div>
                <h2 class={tone}>{title.to_string()}</h2>
                <p class="muted">{detail.to_string()}</p>
            </div>
        </div>
    }
}

fn verified(badge: &BadgeView, ctx: &Context<VerifyComponent>) -> Html {
    let config = &ctx.props().config;
    let placeholder = &config.placeholder_image;

    html! {
        <div class="verify-page">
            <div class="card verify-card">
                <div class="verify-header">
                    <div class="status-icon ok-text">{"✅"}</div>
                    <h2>{"Badge Verified"}</h2>
                    <p class="muted">
                        {"This badge is authentic and was issued by "}
                        <a href={config.issuer_url.clone()}>{config.issuer_name.clone()}</a>
                    </p>
                </div>

                <div class="verify-body">
                    <div class="verify-art">
                        { badge_image(badge.image_url(placeholder), badge.badge_name().unwrap_or("Badge"), placeholder, "badge-art") }
                    </div>
                    <dl class="attributes">
                        { attribute("Badge Name", badge.display_name().to_string()) }
                        { attribute("Recipient", badge.recipient_name().to_string()) }
                        { attribute("Issue Date", badge.issued_label()) }
                        {
                            match badge.description() {
                                Some(description) => attribute("Description", description.to_string()),
                                None => html! {},
                            }
                        }
                    </dl>
                </div>

                <div class="verify-footer">
                    {"Badge ID: "}<span class="mono">{badge.badge_id.clone()}</span>
                </div>
            </div>
        </div>
    }
}

fn attribute(label: &str, value: String) -> Html {
    html! {
        <div>
            <dt>{label.to_string()}</dt>
            <dd>{value}</dd>
        </div>
    }
}
