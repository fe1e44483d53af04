//! Admin bulk-issuance page (`/admin`).
//!
//! Gated by the build-time credential pair. Once signed in, the admin drops a
//! CSV of recipients; every row is issued in order and the augmented file is
//! downloaded as `processed_badges.csv`.

use std::rc::Rc;

use common::config::PortalConfig;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminComponent;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    pub config: Rc<PortalConfig>,
}

impl Component for AdminComponent {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
