//! Conversions from the layer errors into the unified [`Error`].

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::NotWordPackage(e.to_string()),
            OpcError::PackageNotFound(s) => {
                Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, s))
            },
            OpcError::XmlError(s) | OpcError::AttrError(s) => Error::XmlError(s),
            OpcError::PartNotFound(s) | OpcError::RelationshipNotFound(s) => Error::ComponentNotFound(s),
            OpcError::ContentTypeNotFound(s) => Error::InvalidFormat(format!("no content type for {}", s)),
            other => Error::Other(other.to_string()),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => Error::InvalidContentType { expected, got },
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Opc(e) => Error::from(e),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opc_errors_map_to_unified() {
        let err: Error = OpcError::PartNotFound("/word/document.xml".to_string()).into();
        assert!(matches!(err, Error::ComponentNotFound(ref s) if s == "/word/document.xml"));

        let err: Error = OpcError::PackageNotFound("missing.docx".to_string()).into();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_ooxml_errors_map_to_unified() {
        let err: Error = OoxmlError::InvalidContentType {
            expected: "a".to_string(),
            got: "b".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid content type: expected a, got b");

        let err: Error = OoxmlError::Opc(OpcError::XmlError("bad".to_string())).into();
        assert!(matches!(err, Error::XmlError(ref s) if s == "bad"));
    }
}
