//! Roster construction: building from scratch and completing uploads.

use rand::Rng;

use crate::generator;
use crate::pools::{
    DEFAULT_GROUP, DEFAULT_PASSWORD, DEFAULT_PROFILE, GROUP_CHOICES, LICENSE_CATEGORIES,
    PROFILE_CHOICES,
};
use crate::record::{PartialUserRecord, UserRecord};

/// Builds a roster of `count` fully-populated records.
///
/// Password, group, and profile are fixed to their literal defaults here;
/// the randomized variants belong to [`complete_roster`]'s candidates. The
/// two modes intentionally differ and are not unified.
pub fn build_roster<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|row| {
            let mut record = base_record(rng, row);
            record.senha = DEFAULT_PASSWORD.to_owned();
            record.grupos = DEFAULT_GROUP.to_owned();
            record.perfil = DEFAULT_PROFILE.to_owned();
            record
        })
        .collect()
}

/// Completes an uploaded roster, preserving row order and every value the
/// upload already carries.
///
/// Each row gets one full candidate generated up front — randomness
/// consumption per row does not depend on which fields were missing — and
/// only the row's `None` fields take the candidate's values. Candidate
/// password, group, and profile are randomized, unlike [`build_roster`].
pub fn complete_roster<R: Rng + ?Sized>(
    rng: &mut R,
    rows: Vec<PartialUserRecord>,
) -> Vec<UserRecord> {
    rows.into_iter()
        .enumerate()
        .map(|(row, partial)| {
            let mut candidate = base_record(rng, row);
            candidate.senha = generator::password(rng);
            candidate.grupos = generator::pick(rng, GROUP_CHOICES).to_owned();
            candidate.perfil = generator::pick(rng, PROFILE_CHOICES).to_owned();
            partial.merge(candidate)
        })
        .collect()
}

/// Generates the mode-independent fields of one record; `row` is zero-based
/// and only numbers the note text.
fn base_record<R: Rng + ?Sized>(rng: &mut R, row: usize) -> UserRecord {
    let (nome, sobrenome, email) = generator::identity(rng);
    UserRecord {
        nome,
        sobrenome,
        cpf: generator::cpf(rng),
        email,
        senha: String::new(),
        grupos: String::new(),
        perfil: String::new(),
        telefone: generator::phone(rng),
        observacoes: format!("Observação do usuário {}", row + 1),
        cnh: generator::security_number(rng),
        categoria_cnh: generator::pick(rng, LICENSE_CATEGORIES).to_owned(),
        num_seguranca_cnh: generator::security_number(rng),
        renach: generator::renach(rng),
        data_nascimento: generator::birth_date(rng),
        id_operador: generator::operator_id(rng),
    }
}
