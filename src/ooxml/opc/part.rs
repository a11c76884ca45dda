//! Parts of an OPC package.
//!
//! Parts are the units of content in a package, each with a unique partname,
//! a content type and the relationships it owns.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part in an OPC package.
pub trait Part: Send + Sync {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// The subtype of the content type, e.g. `png` for `image/png`.
    fn content_subtype(&self) -> &str {
        let content_type = self.content_type();
        let subtype = content_type.rsplit('/').next().unwrap_or(content_type);
        // Drop parameters such as "; charset=utf-8"
        subtype.split(';').next().unwrap_or(subtype).trim()
    }
}

/// A part as loaded from the package: its bytes are kept verbatim, XML or not.
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>, rels: Relationships) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(content_type: &str) -> BlobPart {
        let partname = PackURI::new("/word/media/image1.png").unwrap();
        let rels = Relationships::new(partname.base_uri().to_string());
        BlobPart::new(partname, content_type.to_string(), vec![1, 2, 3], rels)
    }

    #[test]
    fn test_content_subtype() {
        assert_eq!(part("image/png").content_subtype(), "png");
        assert_eq!(part("image/svg+xml").content_subtype(), "svg+xml");
        assert_eq!(part("image/jpeg; q=1").content_subtype(), "jpeg");
        assert_eq!(part("weird").content_subtype(), "weird");
    }

    #[test]
    fn test_keeps_blob() {
        let p = part("image/png");
        assert_eq!(p.blob(), &[1, 2, 3]);
        assert_eq!(p.partname().as_str(), "/word/media/image1.png");
    }
}
