//! Error types for evalreport.

use thiserror::Error;

/// Result type for evalreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a report or preparing its inputs.
///
/// Parsing report text never fails; these errors come from I/O, document
/// serialization and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred while serializing the DOCX output.
    #[error("Failed to write DOCX document: {0}")]
    DocxWrite(String),

    /// Error occurred while reading a DOCX source document.
    #[error("Failed to parse DOCX file: {0}")]
    DocxParse(String),

    /// Error occurred while loading a PDF source document.
    #[error("Failed to parse PDF file: {0}")]
    PdfParse(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report template configuration is invalid.
    #[error("Invalid report template: {0}")]
    Template(String),

    /// The source document has an extension we cannot extract text from.
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(String),
}
