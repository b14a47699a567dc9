//! Error types for the export layer.

use thiserror::Error;

/// Errors that can occur while turning datasets into a downloadable
/// archive.
///
/// Generation itself is infallible; everything here comes from the tabular
/// and archive boundaries.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The uploaded blob could not be parsed into tabular rows. The message
    /// carries the underlying cause and is shown to the user as-is.
    #[error("Erro ao processar o arquivo: {message}")]
    InvalidSheet {
        /// Description of the parse failure.
        message: String,
    },

    /// A row collection could not be serialized into a sheet.
    #[error("failed to serialize sheet '{name}': {message}")]
    Sheet {
        /// Target sheet name.
        name: String,
        /// Description of the serialization failure.
        message: String,
    },

    /// The archive could not be assembled.
    #[error("failed to build archive: {source}")]
    Archive {
        /// Underlying zip error.
        #[from]
        source: zip::result::ZipError,
    },

    /// An I/O failure while moving bytes around.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
