//! Serves the embedded frontend bundle.
//!
//! Known files are returned as-is; every other path gets `index.html` so the
//! client-side router can resolve `/badges/..`, `/verify/..` and `/admin`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

#[derive(Debug, PartialEq, Eq)]
pub enum Asset<'a> {
    File { contents: &'a [u8], mime: String },
    Missing,
}

/// Looks `path` up in `dir`, falling back to the bundle's `index.html`.
pub fn resolve<'a>(dir: &'a Dir<'a>, path: &str) -> Asset<'a> {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return Asset::File {
            contents: file.contents(),
            mime: mime.to_string(),
        };
    }

    debug!("No bundled file for /{path}, serving {INDEX}");
    match dir.get_file(INDEX) {
        Some(index) => Asset::File {
            contents: index.contents(),
            mime: "text/html; charset=utf-8".to_string(),
        },
        None => Asset::Missing,
    }
}

pub fn respond(asset: Asset<'_>) -> HttpResponse {
    match asset {
        Asset::File { contents, mime } => HttpResponse::Ok()
            .content_type(mime)
            .body(contents.to_vec()),
        Asset::Missing => HttpResponse::NotFound().body("Not Found"),
    }
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(resolve(&STATIC_DIR, req.path()))
}
