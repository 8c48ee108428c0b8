use crate::state::AppState;
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use common::model::health::HealthStatus;

/// `GET /health`: always `200 OK` while the server is accepting requests.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::ok(state.service_name.as_str()))
}

/// `GET /` when API documentation is disabled.
pub(crate) async fn redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, "/health"))
        .finish()
}
