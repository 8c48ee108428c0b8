//! HTTP surface of the service.
//!
//! - `pdf`: the three render endpoints under `/api/pdf`.
//! - `health`: liveness probe and the root redirect.
//! - `docs`: embedded OpenAPI document and Swagger UI under `/docs`.

pub mod docs;
pub mod health;
pub mod pdf;

use actix_web::web::{get, ServiceConfig};

/// Registers every route. `show_docs` decides whether `/docs` is mounted and
/// where `GET /` redirects to.
pub fn configure(cfg: &mut ServiceConfig, show_docs: bool) {
    cfg.route("/health", get().to(health::process))
        .service(pdf::configure_routes());

    if show_docs {
        cfg.service(docs::configure_routes())
            .route("/", get().to(docs::redirect));
    } else {
        cfg.route("/", get().to(health::redirect));
    }
}
