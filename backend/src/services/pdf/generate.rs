use crate::services::pdf::{bad_request, problem, required, RenderedDocument, DEFAULT_FILE_NAME};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::PdfRequest;

/// The Actix web handler for `POST /api/pdf/gerar`.
///
/// Renders the caller's `htmlBody` with the optional `headerHtml` and
/// `footerHtml` repeated on every page.
///
/// # Returns
/// - `200 OK` with the PDF as an attachment named `fileName` or `contrato.pdf`.
/// - `400 Bad Request` when `htmlBody` is missing or blank.
/// - `500 Internal Server Error` with a problem document when rendering fails.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<PdfRequest>,
) -> HttpResponse {
    let request = payload.into_inner();
    let body = match required(request.html_body.as_deref(), "HtmlBody") {
        Ok(body) => body,
        Err(e) => return bad_request(e),
    };

    let result = state
        .renderer
        .render(
            body,
            request.header_html.as_deref(),
            request.footer_html.as_deref(),
            &state.render_token(),
        )
        .await;

    match result {
        Ok(bytes) => {
            RenderedDocument::new(bytes, request.file_name.as_deref(), DEFAULT_FILE_NAME)
                .into_response()
        }
        Err(e) => problem(&e),
    }
}
