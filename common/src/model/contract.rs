use serde::{Deserialize, Serialize};

/// Values merged into the contract template by `POST /api/pdf/gerar-contrato`.
///
/// Every field is optional on the wire so that a missing party name can be
/// reported as a validation message instead of a JSON decoding error. The
/// service rejects the request when `nome_contratante` or `nome_contratada`
/// is absent or blank; every other blank field is rendered as `-`.
///
/// Field names follow the camelCase JSON convention, and the PascalCase
/// spelling (`NomeContratante`) is accepted as an alias.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFields {
    #[serde(alias = "NomeContratante")]
    pub nome_contratante: Option<String>,
    #[serde(alias = "NomeContratada")]
    pub nome_contratada: Option<String>,
    #[serde(alias = "EnderecoContratante")]
    pub endereco_contratante: Option<String>,
    #[serde(alias = "EnderecoContratada")]
    pub endereco_contratada: Option<String>,
    #[serde(alias = "CnpjContratante")]
    pub cnpj_contratante: Option<String>,
    #[serde(alias = "CnpjContratada")]
    pub cnpj_contratada: Option<String>,
    #[serde(alias = "NumeroContrato")]
    pub numero_contrato: Option<String>,
    #[serde(alias = "ValorTotal")]
    pub valor_total: Option<String>,
    #[serde(alias = "DataContrato")]
    pub data_contrato: Option<String>,
    #[serde(alias = "Cidade")]
    pub cidade: Option<String>,
    #[serde(alias = "DescricaoServico")]
    pub descricao_servico: Option<String>,
    #[serde(alias = "PrazoMeses")]
    pub prazo_meses: Option<String>,
    /// Suggested download name. Not a template placeholder.
    #[serde(alias = "FileName")]
    pub file_name: Option<String>,
}

impl ContractFields {
    /// Names of the placeholders this struct can fill, as they appear in a
    /// template between double braces (`{{NomeContratante}}`).
    pub const PLACEHOLDERS: [&'static str; 12] = [
        "NomeContratante",
        "NomeContratada",
        "EnderecoContratante",
        "EnderecoContratada",
        "CnpjContratante",
        "CnpjContratada",
        "NumeroContrato",
        "ValorTotal",
        "DataContrato",
        "Cidade",
        "DescricaoServico",
        "PrazoMeses",
    ];

    /// Looks up the value bound to a placeholder name.
    ///
    /// Returns `None` when the name is not a known placeholder, and
    /// `Some(None)` when it is known but the caller left it out.
    pub fn placeholder(&self, name: &str) -> Option<Option<&str>> {
        let value = match name {
            "NomeContratante" => &self.nome_contratante,
            "NomeContratada" => &self.nome_contratada,
            "EnderecoContratante" => &self.endereco_contratante,
            "EnderecoContratada" => &self.endereco_contratada,
            "CnpjContratante" => &self.cnpj_contratante,
            "CnpjContratada" => &self.cnpj_contratada,
            "NumeroContrato" => &self.numero_contrato,
            "ValorTotal" => &self.valor_total,
            "DataContrato" => &self.data_contrato,
            "Cidade" => &self.cidade,
            "DescricaoServico" => &self.descricao_servico,
            "PrazoMeses" => &self.prazo_meses,
            _ => return None,
        };
        Some(value.as_deref())
    }
}
