use thiserror::Error;

/// Main error type for conversion.
///
/// Every variant is fatal: the document could not be opened or its body could
/// not be read, and no HTML is produced. Problems confined to one image or one
/// style attribute never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// File is not a ZIP-based Word package
    #[error("Not a valid Word package: {0}")]
    NotWordPackage(String),

    /// Part or relationship not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Conversion options could not be read
    #[error("Invalid options: {0}")]
    Options(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
