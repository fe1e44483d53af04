//! Public verification page (`/verify/{badge_id}`).
//!
//! Same load sequence as the badge page, rendered as a verified / failed /
//! not-found card with the badge attributes. No share action.

use std::rc::Rc;

use common::config::PortalConfig;
use common::loader::LoadState;
use yew::prelude::*;

use crate::components::loading::spawn_badge_load;

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct VerifyProps {
    pub badge_id: String,
    pub config: Rc<PortalConfig>,
}

pub enum Msg {
    Loaded(String, LoadState),
}

pub struct VerifyComponent {
    pub state: LoadState,
}

impl Component for VerifyComponent {
    type Message = Msg;
    type Properties = VerifyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(badge_id, state) => {
                if badge_id != ctx.props().badge_id {
                    return false;
                }
                self.state = state;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().badge_id != old_props.badge_id {
            self.state = LoadState::Loading;
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

fn fetch(ctx: &Context<VerifyComponent>) {
    let props = ctx.props();
    spawn_badge_load(
        props.config.clone(),
        props.badge_id.clone(),
        ctx.link().callback(|(badge_id, state)| Msg::Loaded(badge_id, state)),
    );
}
