use common::loader::LoadState;
use yew::prelude::*;

use super::{BadgeComponent, Msg};
use crate::components::badge_image::badge_image;

pub fn view(component: &BadgeComponent, ctx: &Context<BadgeComponent>) -> Html {
    match &component.state {
        LoadState::Loading => centered(html! { <div class="headline">{"Loading..."}</div> }),
        LoadState::Failed(message) => centered(html! {
            <div class="headline error-text">{format!("Error: {message}")}</div>
        }),
        LoadState::NotFound => centered(html! { <div class="headline">{"Badge not found"}</div> }),
        LoadState::Loaded(badge) => {
            let placeholder = &ctx.props().config.placeholder_image;
            let alt = badge.badge_name().unwrap_or("Badge");

            html! {
                <div class="badge-page">
                    <div class="card badge-card">
                        <h1 class="congrats">{"🎉Congratulations🎉"}</h1>
                        { badge_image(badge.image_url(placeholder), alt, placeholder, "badge-art") }
                        <h2>{format!("{} Badge", badge.display_name())}</h2>
                        <button
                            type="button"
                            class="share-btn"
                            disabled={component.share.is_none()}
                            onclick={ctx.link().callback(|_| Msg::Share)}
                        >
                            {"Share on LinkedIn"}
                        </button>
                    </div>
                </div>
            }
        }
    }
}

fn centered(content: Html) -> Html {
    html! {
        <div class="badge-page centered">{content}</div>
    }
}
