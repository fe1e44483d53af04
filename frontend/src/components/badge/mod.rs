//! Public badge page (`/badges/{badge_id}`).
//!
//! Loads the badge record and its metadata on first render (and again when the
//! id prop changes), then shows a congratulatory card with a LinkedIn
//! "add to profile" action.

use std::rc::Rc;

use common::config::PortalConfig;
use common::loader::LoadState;
use common::share::ShareDetails;
use yew::prelude::*;

use crate::components::loading::spawn_badge_load;
use crate::helpers::open_in_new_tab;

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct BadgeProps {
    pub badge_id: String,
    pub config: Rc<PortalConfig>,
}

pub enum Msg {
    /// Result of a load, tagged with the id it was issued for.
    Loaded(String, LoadState),
    Share,
}

pub struct BadgeComponent {
    pub state: LoadState,
    pub share: Option<ShareDetails>,
}

impl Component for BadgeComponent {
    type Message = Msg;
    type Properties = BadgeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LoadState::Loading,
            share: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(badge_id, state) => {
                // a response for an id we navigated away from
                if badge_id != ctx.props().badge_id {
                    return false;
                }
                self.share = match &state {
                    LoadState::Loaded(view) => ShareDetails::for_badge(&ctx.props().config, view),
                    _ => None,
                };
                self.state = state;
                true
            }
            Msg::Share => {
                if let Some(share) = &self.share {
                    open_in_new_tab(&share.linkedin_url());
                }
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().badge_id != old_props.badge_id {
            self.state = LoadState::Loading;
            self.share = None;
            fetch(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch(ctx);
        }
    }
}

fn fetch(ctx: &Context<BadgeComponent>) {
    let props = ctx.props();
    spawn_badge_load(
        props.config.clone(),
        props.badge_id.clone(),
        ctx.link().callback(|(badge_id, state)| Msg::Loaded(badge_id, state)),
    );
}
