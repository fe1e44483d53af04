use std::rc::Rc;

use common::config::PortalConfig;
use common::route::Route;
use yew::{html, Component, Context, Html};

use crate::components::admin::AdminComponent;
use crate::components::badge::BadgeComponent;
use crate::components::verify::VerifyComponent;
use crate::config;

pub struct App {
    route: Route,
    config: Result<Rc<PortalConfig>, String>,
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load().map_err(|err| {
            gloo_console::error!("Invalid portal configuration:", err.to_string());
            err.to_string()
        });
        Self {
            route: Route::parse(&current_path()),
            config,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let config = match &self.config {
            Ok(config) => config.clone(),
            Err(message) => {
                return html! {
                    <div class="page centered">
                        <div class="error-box">{format!("Configuration error: {message}")}</div>
                    </div>
                };
            }
        };

        match &self.route {
            Route::Badge(badge_id) => html! {
                <BadgeComponent badge_id={badge_id.clone()} {config} />
            },
            Route::Verify(badge_id) => html! {
                <VerifyComponent badge_id={badge_id.clone()} {config} />
            },
            Route::Admin => html! { <AdminComponent {config} /> },
            Route::NotFound => html! {
                <div class="page centered">
                    <h2>{"Page not found"}</h2>
                </div>
            },
        }
    }
}
