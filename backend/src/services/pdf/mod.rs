//! # PDF Service Module
//!
//! Routes under `/api/pdf` and the response conventions they share.
//!
//! ## Sub-modules:
//! - `generate`: renders caller-supplied body, header and footer HTML.
//! - `sample`: renders the fixed sample contract.
//! - `contract`: fills the contract template with caller data, then renders it.
//!
//! Every handler validates its input before the renderer is touched, so a
//! 400 never costs a subprocess. Renderer failures become a 500
//! `application/problem+json` document whose `detail` is the error message.

mod contract;
mod generate;
mod sample;

use crate::renderer::RenderError;
use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};
use common::model::problem::ProblemDetails;
use log::info;
use thiserror::Error;

/// The base path for all PDF endpoints.
const API_PATH: &str = "/api/pdf";

/// Download name used when the caller does not provide one.
pub const DEFAULT_FILE_NAME: &str = "contrato.pdf";

/// Download name of the sample contract.
pub const SAMPLE_FILE_NAME: &str = "contrato-exemplo.pdf";

/// Configures and returns the Actix `Scope` for the PDF routes.
///
/// # Registered Routes:
///
/// *   **`POST /gerar`**: `generate::process`. Body `PdfRequest`; `htmlBody`
///     is required.
/// *   **`GET /exemplo`**: `sample::process`. No input.
/// *   **`POST /gerar-contrato`**: `contract::process`. Body `ContractFields`;
///     both party names are required.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/gerar", post().to(generate::process))
        .route("/exemplo", get().to(sample::process))
        .route("/gerar-contrato", post().to(contract::process))
}

/// A required request field was missing or blank.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} é obrigatório.")]
    Required(&'static str),
}

/// A finished PDF and the name it should be downloaded under.
#[derive(Debug)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

impl RenderedDocument {
    /// Control characters are dropped from `file_name`, since they cannot
    /// appear in a header value. A name that ends up blank falls back to
    /// `default_name`.
    pub fn new(bytes: Vec<u8>, file_name: Option<&str>, default_name: &str) -> Self {
        let file_name = file_name
            .map(|name| name.chars().filter(|c| !c.is_control()).collect::<String>())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_name.to_string());
        Self { bytes, file_name }
    }

    pub fn into_response(self) -> HttpResponse {
        info!("Sending {} ({} bytes)", self.file_name, self.bytes.len());
        HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(attachment(&self.file_name))
            .body(self.bytes)
    }
}

/// `Content-Disposition: attachment`, with an RFC 5987 `filename*` added
/// when the name is not plain ASCII.
fn attachment(file_name: &str) -> ContentDisposition {
    let mut parameters = vec![DispositionParam::Filename(file_name.to_string())];
    if !file_name.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: file_name.as_bytes().to_vec(),
        }));
    }
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

/// Returns the trimmed-nonblank value or a validation error naming `field`.
fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::Required(field))
}

fn bad_request(err: ValidationError) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(err.to_string())
}

fn problem(err: &RenderError) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("application/problem+json")
        .json(ProblemDetails::internal(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::header::CONTENT_DISPOSITION;

    #[test]
    fn blank_file_name_uses_default() {
        let doc = RenderedDocument::new(vec![1], Some("  "), DEFAULT_FILE_NAME);
        assert_eq!(doc.file_name, "contrato.pdf");

        let doc = RenderedDocument::new(vec![1], Some(" meu.pdf "), DEFAULT_FILE_NAME);
        assert_eq!(doc.file_name, "meu.pdf");
    }

    #[test]
    fn control_characters_are_dropped_from_file_name() {
        let doc = RenderedDocument::new(vec![1], Some("a\r\nX-Evil: 1.pdf"), DEFAULT_FILE_NAME);
        assert_eq!(doc.file_name, "aX-Evil: 1.pdf");

        let doc = RenderedDocument::new(vec![1], Some("\r\n\t\u{7f}"), DEFAULT_FILE_NAME);
        assert_eq!(doc.file_name, "contrato.pdf");

        let response = RenderedDocument::new(vec![1], Some("x\0y.pdf"), DEFAULT_FILE_NAME).into_response();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"xy.pdf\""
        );
    }

    #[test]
    fn ascii_names_are_plain_attachments() {
        let response = RenderedDocument::new(b"%PDF".to_vec(), None, SAMPLE_FILE_NAME).into_response();
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"contrato-exemplo.pdf\"");
    }

    #[test]
    fn non_ascii_names_get_extended_parameter() {
        let disposition = attachment("contrato-são-paulo.pdf").to_string();
        assert!(disposition.contains("filename*=UTF-8''"), "{disposition}");
    }

    #[test]
    fn required_rejects_blank() {
        assert!(required(Some(" x "), "Campo").is_ok());
        let err = required(Some("\t"), "Campo").unwrap_err();
        assert_eq!(err.to_string(), "Campo é obrigatório.");
        assert!(required(None, "Campo").is_err());
    }

    #[actix_web::test]
    async fn problem_carries_detail() {
        let response = problem(&RenderError::NoOutput);
        assert_eq!(response.status(), 500);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/problem+json"
        );
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "renderer produced no output");
        assert_eq!(json["status"], 500);
    }
}
