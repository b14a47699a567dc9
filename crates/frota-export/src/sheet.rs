//! Tabular reader and writer over in-memory byte blobs.
//!
//! Sheets are CSV: one header row of column names, one data row per
//! record, columns in declaration order. Blank cells and absent
//! columns deserialize to `None`, which is the roster completer's missing
//! marker.

use frota_data::PartialUserRecord;
use serde::Serialize;

use crate::error::ExportError;

/// Serializes a row collection into a spreadsheet byte blob.
///
/// The header row is written from `columns` up front, so an empty row
/// collection still yields a headed sheet rather than a zero-byte blob;
/// `columns` must match the rows' serialization order.
///
/// # Errors
///
/// Returns [`ExportError::Sheet`] when a row cannot be serialized; `name`
/// only labels the error.
pub fn write_sheet<S, I>(name: &str, columns: &[&str], rows: I) -> Result<Vec<u8>, ExportError>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let sheet_error = |message: String| ExportError::Sheet {
        name: name.to_owned(),
        message,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(columns)
        .map_err(|e| sheet_error(e.to_string()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| sheet_error(e.to_string()))?;
    }
    writer.into_inner().map_err(|e| sheet_error(e.to_string()))
}

/// Parses an uploaded spreadsheet blob into partial roster rows.
///
/// # Errors
///
/// Returns [`ExportError::InvalidSheet`] carrying the underlying cause when
/// the blob is not well-formed tabular data.
pub fn read_partial_roster(bytes: &[u8]) -> Result<Vec<PartialUserRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: PartialUserRecord = result.map_err(|e| ExportError::InvalidSheet {
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
