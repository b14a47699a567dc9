//! Archive packing: named byte blobs into one compressed zip.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::ExportError;

/// Bundles the given `(name, bytes)` entries verbatim into a single
/// deflate-compressed zip blob.
///
/// # Errors
///
/// Returns [`ExportError`] when an entry cannot be written or the archive
/// cannot be finalized.
pub fn pack_archive(entries: &[(&str, Vec<u8>)]) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in entries {
        writer.start_file(*name, options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn unpack(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("readable archive");
        let mut entries = Vec::new();
        for index in 0..archive.len() {
            let mut file = archive.by_index(index).expect("entry");
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).expect("entry bytes");
            entries.push((file.name().to_owned(), contents));
        }
        entries
    }

    #[test]
    fn entries_round_trip_verbatim() {
        let packed = pack_archive(&[
            ("usuarios.csv", b"nome\nAna\n".to_vec()),
            ("telemetria.csv", b"Evento\nFrenagem Brusca\n".to_vec()),
        ])
        .expect("pack");

        let entries = unpack(&packed);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "usuarios.csv");
        assert_eq!(entries[0].1, b"nome\nAna\n");
        assert_eq!(entries[1].0, "telemetria.csv");
        assert_eq!(entries[1].1, b"Evento\nFrenagem Brusca\n");
    }

    #[test]
    fn empty_entry_list_still_yields_a_valid_archive() {
        let packed = pack_archive(&[]).expect("pack");
        assert!(unpack(&packed).is_empty());
    }
}
