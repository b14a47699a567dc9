//! End-to-end pipeline tests: upload bytes in, archive bytes out.

use std::io::{Cursor, Read};

use chrono::{NaiveDate, NaiveDateTime};
use frota_data::{TelemetryEvent, UserRecord};
use frota_export::pipeline::{
    COMPLETED_ARCHIVE, COMPLETED_ROSTER_SHEET, COMPLETED_TELEMETRY_SHEET, GENERATED_ARCHIVE,
    GENERATED_ROSTER_SHEET, GENERATED_TELEMETRY_SHEET,
};
use frota_export::{ExportError, complete_bundle, generate_bundle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::{fixture, rstest};

#[fixture]
fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(314)
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 10)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
}

fn entry(archive: &[u8], name: &str) -> Vec<u8> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive.to_vec())).expect("readable archive");
    let mut file = zip.by_name(name).expect("entry present");
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).expect("entry bytes");
    contents
}

fn parse_rows<T: serde::de::DeserializeOwned>(blob: &[u8]) -> Vec<T> {
    csv::Reader::from_reader(blob)
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("well-formed sheet")
}

#[rstest]
fn generated_bundle_contains_both_sheets(mut rng: ChaCha8Rng) {
    let bundle = generate_bundle(&mut rng, 5, now()).expect("bundle");

    assert_eq!(bundle.archive_name, GENERATED_ARCHIVE);
    assert_eq!(bundle.user_count, 5);

    let roster: Vec<UserRecord> = parse_rows(&entry(&bundle.bytes, GENERATED_ROSTER_SHEET));
    let telemetry: Vec<TelemetryEvent> =
        parse_rows(&entry(&bundle.bytes, GENERATED_TELEMETRY_SHEET));

    assert_eq!(roster.len(), 5);
    assert_eq!(telemetry.len(), bundle.event_count);
    assert!(telemetry.windows(2).all(|pair| pair[0].data <= pair[1].data));
    for event in &telemetry {
        assert!(roster.iter().any(|u| u.id_operador == event.id_operador));
    }
}

#[rstest]
fn completed_bundle_preserves_uploaded_values(mut rng: ChaCha8Rng) {
    let uploaded = b"nome,cpf\nAna,\n,11144477735\n";
    let bundle = complete_bundle(&mut rng, uploaded, now()).expect("bundle");

    assert_eq!(bundle.archive_name, COMPLETED_ARCHIVE);
    assert_eq!(bundle.user_count, 2);

    let roster: Vec<UserRecord> = parse_rows(&entry(&bundle.bytes, COMPLETED_ROSTER_SHEET));
    assert_eq!(roster[0].nome, "Ana");
    assert_eq!(roster[0].cpf.len(), 11);
    assert_eq!(roster[1].cpf, "11144477735");
    assert!(!roster[1].nome.is_empty());

    let telemetry: Vec<TelemetryEvent> =
        parse_rows(&entry(&bundle.bytes, COMPLETED_TELEMETRY_SHEET));
    assert_eq!(telemetry.len(), bundle.event_count);
    assert!(!telemetry.is_empty());
}

#[rstest]
fn header_only_upload_yields_headed_empty_sheets(mut rng: ChaCha8Rng) {
    let bundle = complete_bundle(&mut rng, b"nome\n", now()).expect("bundle");
    assert_eq!(bundle.user_count, 0);
    assert_eq!(bundle.event_count, 0);

    let roster_blob = entry(&bundle.bytes, COMPLETED_ROSTER_SHEET);
    let roster_text = String::from_utf8(roster_blob.clone()).expect("utf-8");
    assert_eq!(
        roster_text.lines().next(),
        Some(UserRecord::COLUMNS.join(",").as_str())
    );
    let roster: Vec<UserRecord> = parse_rows(&roster_blob);
    assert!(roster.is_empty());

    let telemetry_blob = entry(&bundle.bytes, COMPLETED_TELEMETRY_SHEET);
    let telemetry_text = String::from_utf8(telemetry_blob.clone()).expect("utf-8");
    assert_eq!(
        telemetry_text.lines().next(),
        Some(TelemetryEvent::COLUMNS.join(",").as_str())
    );
    let telemetry: Vec<TelemetryEvent> = parse_rows(&telemetry_blob);
    assert!(telemetry.is_empty());
}

#[rstest]
fn malformed_upload_aborts_without_an_archive(mut rng: ChaCha8Rng) {
    let uploaded = b"nome,cpf\nAna,123,extra-column\n";
    let err = complete_bundle(&mut rng, uploaded, now()).expect_err("must fail");

    assert!(matches!(err, ExportError::InvalidSheet { .. }));
    assert!(err.to_string().starts_with("Erro ao processar o arquivo:"));
}

#[rstest]
fn same_seed_yields_identical_archives(rng: ChaCha8Rng) {
    let mut first = rng.clone();
    let mut second = rng;

    let bundle_a = generate_bundle(&mut first, 3, now()).expect("bundle");
    let bundle_b = generate_bundle(&mut second, 3, now()).expect("bundle");

    assert_eq!(
        entry(&bundle_a.bytes, GENERATED_ROSTER_SHEET),
        entry(&bundle_b.bytes, GENERATED_ROSTER_SHEET)
    );
    assert_eq!(
        entry(&bundle_a.bytes, GENERATED_TELEMETRY_SHEET),
        entry(&bundle_b.bytes, GENERATED_TELEMETRY_SHEET)
    );
}
