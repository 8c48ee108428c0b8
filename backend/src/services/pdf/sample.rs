use crate::services::pdf::{problem, RenderedDocument, SAMPLE_FILE_NAME};
use crate::state::AppState;
use crate::templates;
use actix_web::{web, HttpResponse};

/// The Actix web handler for `GET /api/pdf/exemplo`.
///
/// Renders the built-in sample contract (three pages, with the fixed header
/// and footer) and returns it as `contrato-exemplo.pdf`.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    let docs = templates::sample_documents();

    let result = state
        .renderer
        .render(
            &docs.body,
            Some(docs.header.as_str()),
            Some(docs.footer.as_str()),
            &state.render_token(),
        )
        .await;

    match result {
        Ok(bytes) => RenderedDocument::new(bytes, None, SAMPLE_FILE_NAME).into_response(),
        Err(e) => problem(&e),
    }
}
