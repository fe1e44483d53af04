mod assets;
mod config;

use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::ServerConfig;

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(healthz))
        .default_service(web::route().to(assets::serve_embedded));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::load();
    let url = config.url();

    if config.open_browser {
        let browser_url = url.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            if let Err(e) = webbrowser::open(&browser_url) {
                warn!("Could not open browser: {e}");
            }
        });
    }

    info!("Badge portal running at {}", url);

    HttpServer::new(|| App::new().configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
