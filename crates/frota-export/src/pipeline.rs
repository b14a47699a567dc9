//! The two export pipelines: generate-from-scratch and complete-an-upload.
//!
//! Both produce a [`Bundle`]: a named zip archive holding the roster sheet
//! and the telemetry sheet derived from it.

use chrono::NaiveDateTime;
use frota_data::{TelemetryEvent, UserRecord, build_roster, complete_roster, derive_telemetry};
use rand::Rng;
use tracing::info;

use crate::archive::pack_archive;
use crate::error::ExportError;
use crate::sheet::{read_partial_roster, write_sheet};

/// Archive name for the generate-from-scratch export.
pub const GENERATED_ARCHIVE: &str = "planilhas_geradas.zip";

/// Archive name for the complete-an-upload export.
pub const COMPLETED_ARCHIVE: &str = "planilhas.zip";

/// Roster sheet name inside [`GENERATED_ARCHIVE`].
pub const GENERATED_ROSTER_SHEET: &str = "usuarios_gerados.csv";

/// Telemetry sheet name inside [`GENERATED_ARCHIVE`].
pub const GENERATED_TELEMETRY_SHEET: &str = "telemetria_gerada.csv";

/// Roster sheet name inside [`COMPLETED_ARCHIVE`].
pub const COMPLETED_ROSTER_SHEET: &str = "usuarios.csv";

/// Telemetry sheet name inside [`COMPLETED_ARCHIVE`].
pub const COMPLETED_TELEMETRY_SHEET: &str = "telemetria.csv";

/// A named, ready-to-download archive plus its dataset sizes.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Download name of the archive.
    pub archive_name: &'static str,
    /// The archive blob.
    pub bytes: Vec<u8>,
    /// Number of roster rows exported.
    pub user_count: usize,
    /// Number of telemetry events exported.
    pub event_count: usize,
}

/// Builds a roster of `count` users from scratch, derives telemetry, and
/// bundles both sheets into [`GENERATED_ARCHIVE`].
///
/// # Errors
///
/// Returns [`ExportError`] when sheet serialization or archive packing
/// fails; generation itself cannot fail for a bounded `count`.
pub fn generate_bundle<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: NaiveDateTime,
) -> Result<Bundle, ExportError> {
    let roster = build_roster(rng, count);
    bundle(
        rng,
        roster,
        now,
        GENERATED_ARCHIVE,
        GENERATED_ROSTER_SHEET,
        GENERATED_TELEMETRY_SHEET,
    )
}

/// Completes an uploaded roster blob, derives telemetry, and bundles both
/// sheets into [`COMPLETED_ARCHIVE`].
///
/// This is the single failure boundary of the completion flow: any parse or
/// export error aborts the whole pipeline and no archive is produced.
///
/// # Errors
///
/// Returns [`ExportError::InvalidSheet`] when the upload cannot be parsed,
/// or another [`ExportError`] when the export itself fails.
pub fn complete_bundle<R: Rng + ?Sized>(
    rng: &mut R,
    uploaded: &[u8],
    now: NaiveDateTime,
) -> Result<Bundle, ExportError> {
    let rows = read_partial_roster(uploaded)?;
    let roster = complete_roster(rng, rows);
    bundle(
        rng,
        roster,
        now,
        COMPLETED_ARCHIVE,
        COMPLETED_ROSTER_SHEET,
        COMPLETED_TELEMETRY_SHEET,
    )
}

fn bundle<R: Rng + ?Sized>(
    rng: &mut R,
    roster: Vec<UserRecord>,
    now: NaiveDateTime,
    archive_name: &'static str,
    roster_sheet: &'static str,
    telemetry_sheet: &'static str,
) -> Result<Bundle, ExportError> {
    let telemetry = derive_telemetry(rng, &roster, now);
    info!(
        users = roster.len(),
        events = telemetry.len(),
        archive = archive_name,
        "datasets generated"
    );

    let roster_blob = write_sheet(roster_sheet, &UserRecord::COLUMNS, roster.iter())?;
    let telemetry_blob = write_sheet(telemetry_sheet, &TelemetryEvent::COLUMNS, telemetry.iter())?;
    let bytes = pack_archive(&[
        (roster_sheet, roster_blob),
        (telemetry_sheet, telemetry_blob),
    ])?;

    Ok(Bundle {
        archive_name,
        bytes,
        user_count: roster.len(),
        event_count: telemetry.len(),
    })
}
