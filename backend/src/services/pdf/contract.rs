use crate::services::pdf::{
    bad_request, problem, required, RenderedDocument, ValidationError, DEFAULT_FILE_NAME,
};
use crate::state::AppState;
use crate::templates;
use actix_web::{web, HttpResponse};
use common::model::contract::ContractFields;

/// The Actix web handler for `POST /api/pdf/gerar-contrato`.
///
/// Merges the request into the contract template, puts the contracted
/// party's name in the page header and renders the result with the fixed
/// footer.
///
/// # Returns
/// - `200 OK` with the PDF as an attachment named `fileName` or `contrato.pdf`.
/// - `400 Bad Request` when `NomeContratante` or `NomeContratada` is blank.
/// - `500 Internal Server Error` with a problem document when rendering fails.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<ContractFields>,
) -> HttpResponse {
    let fields = payload.into_inner();
    let contratada = match validate(&fields) {
        Ok(name) => name,
        Err(e) => return bad_request(e),
    };

    let body = templates::filled_contract(&fields);
    let header = templates::header_with_company(Some(contratada));
    let footer = templates::footer_html();

    let result = state
        .renderer
        .render(&body, Some(header.as_str()), Some(footer), &state.render_token())
        .await;

    match result {
        Ok(bytes) => RenderedDocument::new(bytes, fields.file_name.as_deref(), DEFAULT_FILE_NAME)
            .into_response(),
        Err(e) => problem(&e),
    }
}

/// Checks both party names, contracting party first. Returns the contracted
/// party's name for the header.
fn validate(fields: &ContractFields) -> Result<&str, ValidationError> {
    required(fields.nome_contratante.as_deref(), "NomeContratante")?;
    required(fields.nome_contratada.as_deref(), "NomeContratada")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(contratante: Option<&str>, contratada: Option<&str>) -> ContractFields {
        ContractFields {
            nome_contratante: contratante.map(str::to_string),
            nome_contratada: contratada.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn contracting_party_is_checked_first() {
        let err = validate(&fields(None, None)).unwrap_err();
        assert_eq!(err.to_string(), "NomeContratante é obrigatório.");
    }

    #[test]
    fn blank_contracted_party_is_rejected() {
        let err = validate(&fields(Some("Acme"), Some(" "))).unwrap_err();
        assert_eq!(err.to_string(), "NomeContratada é obrigatório.");
    }

    #[test]
    fn valid_fields_yield_header_name() {
        assert_eq!(validate(&fields(Some("Acme"), Some("Beta"))).unwrap(), "Beta");
    }
}
