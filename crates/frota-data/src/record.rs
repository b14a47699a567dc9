//! Roster record types.
//!
//! Serde renames on both structs give the exact spreadsheet column headers,
//! so the tabular layer needs no mapping code of its own.

use serde::{Deserialize, Serialize};

/// One fully-populated synthetic person/operator row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Given name, drawn from the fixed pool.
    pub nome: String,
    /// Family name, drawn from the fixed pool.
    pub sobrenome: String,
    /// 11-digit identifier whose trailing two digits are checksums.
    pub cpf: String,
    /// Lower-cased address derived from a pool name pair.
    pub email: String,
    /// Login password; a fixed placeholder when built from scratch.
    pub senha: String,
    /// Group membership label.
    #[serde(rename = "Grupos")]
    pub grupos: String,
    /// Profile role label.
    pub perfil: String,
    /// Formatted phone number.
    #[serde(rename = "Telefone")]
    pub telefone: String,
    /// Free-text note, numbered by row.
    #[serde(rename = "Observações")]
    pub observacoes: String,
    /// License-registry number, 11 digits.
    #[serde(rename = "CNH")]
    pub cnh: String,
    /// License category.
    #[serde(rename = "Categoria da CNH")]
    pub categoria_cnh: String,
    /// License security number, 11 digits.
    #[serde(rename = "Nº de Segurança da CNH")]
    pub num_seguranca_cnh: String,
    /// License document code: two uppercase letters plus nine digits.
    #[serde(rename = "Renach")]
    pub renach: String,
    /// Birth date, `dd/mm/yyyy`.
    #[serde(rename = "Data de Nascimento")]
    pub data_nascimento: String,
    /// Operator code, `ID-` plus five digits. Independent random draw per
    /// user; collisions are possible and not prevented.
    pub id_operador: String,
}

/// An uploaded roster row in which any field may still be missing.
///
/// `None` is the canonical missing marker: it is what the tabular reader
/// produces for blank cells and absent columns, and it is the only state
/// the completion pass will overwrite. A present-but-empty value survives
/// completion untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialUserRecord {
    /// Given name, if supplied.
    pub nome: Option<String>,
    /// Family name, if supplied.
    pub sobrenome: Option<String>,
    /// Checksum-bearing identifier, if supplied.
    pub cpf: Option<String>,
    /// E-mail address, if supplied.
    pub email: Option<String>,
    /// Password, if supplied.
    pub senha: Option<String>,
    /// Group membership label, if supplied.
    #[serde(rename = "Grupos")]
    pub grupos: Option<String>,
    /// Profile role label, if supplied.
    pub perfil: Option<String>,
    /// Phone number, if supplied.
    #[serde(rename = "Telefone")]
    pub telefone: Option<String>,
    /// Free-text note, if supplied.
    #[serde(rename = "Observações")]
    pub observacoes: Option<String>,
    /// License-registry number. Some uploads carry this column as
    /// `Nº de Registro` instead of `CNH`; both map here.
    #[serde(rename = "CNH", alias = "Nº de Registro")]
    pub cnh: Option<String>,
    /// License category, if supplied.
    #[serde(rename = "Categoria da CNH")]
    pub categoria_cnh: Option<String>,
    /// License security number, if supplied.
    #[serde(rename = "Nº de Segurança da CNH")]
    pub num_seguranca_cnh: Option<String>,
    /// License document code, if supplied.
    #[serde(rename = "Renach")]
    pub renach: Option<String>,
    /// Birth date, if supplied.
    #[serde(rename = "Data de Nascimento")]
    pub data_nascimento: Option<String>,
    /// Operator code, if supplied.
    pub id_operador: Option<String>,
}

impl UserRecord {
    /// Spreadsheet column headers, in serialization order.
    pub const COLUMNS: [&'static str; 15] = [
        "nome",
        "sobrenome",
        "cpf",
        "email",
        "senha",
        "Grupos",
        "perfil",
        "Telefone",
        "Observações",
        "CNH",
        "Categoria da CNH",
        "Nº de Segurança da CNH",
        "Renach",
        "Data de Nascimento",
        "id_operador",
    ];
}

impl PartialUserRecord {
    /// Merges this row with a fully-generated candidate, keeping every
    /// present value and taking the candidate's value for every missing
    /// field.
    #[must_use]
    pub fn merge(self, candidate: UserRecord) -> UserRecord {
        UserRecord {
            nome: self.nome.unwrap_or(candidate.nome),
            sobrenome: self.sobrenome.unwrap_or(candidate.sobrenome),
            cpf: self.cpf.unwrap_or(candidate.cpf),
            email: self.email.unwrap_or(candidate.email),
            senha: self.senha.unwrap_or(candidate.senha),
            grupos: self.grupos.unwrap_or(candidate.grupos),
            perfil: self.perfil.unwrap_or(candidate.perfil),
            telefone: self.telefone.unwrap_or(candidate.telefone),
            observacoes: self.observacoes.unwrap_or(candidate.observacoes),
            cnh: self.cnh.unwrap_or(candidate.cnh),
            categoria_cnh: self.categoria_cnh.unwrap_or(candidate.categoria_cnh),
            num_seguranca_cnh: self.num_seguranca_cnh.unwrap_or(candidate.num_seguranca_cnh),
            renach: self.renach.unwrap_or(candidate.renach),
            data_nascimento: self.data_nascimento.unwrap_or(candidate.data_nascimento),
            id_operador: self.id_operador.unwrap_or(candidate.id_operador),
        }
    }
}

impl From<UserRecord> for PartialUserRecord {
    fn from(record: UserRecord) -> Self {
        Self {
            nome: Some(record.nome),
            sobrenome: Some(record.sobrenome),
            cpf: Some(record.cpf),
            email: Some(record.email),
            senha: Some(record.senha),
            grupos: Some(record.grupos),
            perfil: Some(record.perfil),
            telefone: Some(record.telefone),
            observacoes: Some(record.observacoes),
            cnh: Some(record.cnh),
            categoria_cnh: Some(record.categoria_cnh),
            num_seguranca_cnh: Some(record.num_seguranca_cnh),
            renach: Some(record.renach),
            data_nascimento: Some(record.data_nascimento),
            id_operador: Some(record.id_operador),
        }
    }
}
