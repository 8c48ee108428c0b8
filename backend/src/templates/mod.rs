//! # Contract Templates
//!
//! Static HTML for the sample service contract and the helpers that merge
//! caller data into it. Placeholders are written `{{Name}}`. Substitution is a
//! single pass over the template: each token is looked up once, so a value
//! that itself contains `{{...}}` is inserted verbatim and never re-expanded.
//!
//! `[page]` and `[topage]` in the header and footer are left alone; the
//! renderer replaces them with page numbers.

use common::model::contract::ContractFields;
use common::util::field_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Company name shown in the header when none is supplied.
pub const DEFAULT_COMPANY: &str = "MINHA EMPRESA LTDA";

const HEADER_HTML: &str = include_str!("../../templates/header.html");
const FOOTER_HTML: &str = include_str!("../../templates/footer.html");
const SAMPLE_BODY_HTML: &str = include_str!("../../templates/contract_sample.html");
const FILLABLE_BODY_HTML: &str = include_str!("../../templates/contract_fillable.html");

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z][A-Za-z0-9_]*)\}\}").expect("placeholder pattern"));

/// Body, header and footer of the fixed sample contract.
#[derive(Debug, Clone)]
pub struct ContractDocuments {
    pub body: String,
    pub header: String,
    pub footer: String,
}

/// The sample contract used by `GET /api/pdf/exemplo`. The body spans three
/// pages via `page-break-before` sections.
pub fn sample_documents() -> ContractDocuments {
    ContractDocuments {
        body: SAMPLE_BODY_HTML.to_string(),
        header: header_with_company(None),
        footer: footer_html().to_string(),
    }
}

pub fn footer_html() -> &'static str {
    FOOTER_HTML
}

/// The contract body with `{{Field}}` placeholders for every
/// [`ContractFields`] entry.
pub fn fillable_body_html() -> &'static str {
    FILLABLE_BODY_HTML
}

/// Replaces every recognised `{{Field}}` token in `template` with the escaped
/// value from `fields`, or `-` when that value is absent or blank.
/// Unrecognised tokens are kept as they are.
pub fn fill_template(template: &str, fields: &ContractFields) -> String {
    substitute(template, |name| fields.placeholder(name))
}

/// The fillable contract body merged with `fields`.
pub fn filled_contract(fields: &ContractFields) -> String {
    fill_template(fillable_body_html(), fields)
}

/// Page header with `company` in place of [`DEFAULT_COMPANY`].
pub fn header_with_company(company: Option<&str>) -> String {
    let company = company
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_COMPANY);
    substitute(HEADER_HTML, |name| match name {
        "NomeEmpresa" => Some(Some(company)),
        _ => None,
    })
}

fn substitute<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Option<&'a str>>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match lookup(&caps[1]) {
            Some(value) => field_html(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}
