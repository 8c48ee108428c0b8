use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/pdf/gerar`: raw HTML for the body plus
/// optional header and footer documents repeated on every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    #[serde(alias = "HtmlBody")]
    pub html_body: Option<String>,
    #[serde(alias = "HeaderHtml")]
    pub header_html: Option<String>,
    #[serde(alias = "FooterHtml")]
    pub footer_html: Option<String>,
    #[serde(alias = "FileName")]
    pub file_name: Option<String>,
}
