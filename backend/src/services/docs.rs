//! Embedded API documentation.
//!
//! `static/docs` is compiled into the binary: an OpenAPI 3 description of the
//! endpoints and a Swagger UI page that loads it.

use actix_web::http::header::LOCATION;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static DOCS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/docs");

const DOCS_PATH: &str = "/docs";

pub fn configure_routes() -> Scope {
    scope(DOCS_PATH)
        .route("", get().to(redirect))
        .route("/{file:.*}", get().to(serve_embedded))
}

/// Sends the browser to the Swagger UI page.
pub(crate) async fn redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, "/docs/"))
        .finish()
}

async fn serve_embedded(file: web::Path<String>) -> HttpResponse {
    let path = file.into_inner();
    let file_path = if path.is_empty() { "index.html" } else { path.as_str() };

    match DOCS_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
