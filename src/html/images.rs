/// Inline pictures as data URIs.
///
/// Every picture reference of a paragraph is resolved on its own. A reference
/// that cannot be resolved costs only that picture, and a paragraph whose XML
/// cannot be scanned yields no pictures at all. Nothing here returns an error
/// to the caller.
use crate::ooxml::docx::Paragraph;
use crate::ooxml::docx::image::image_references;
use crate::ooxml::opc::{PartResolver, ResolveError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use smallvec::SmallVec;
use thiserror::Error;

/// Why one picture was left out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The relationship id could not be followed to a part
    #[error("cannot resolve picture: {0}")]
    Resolve(#[from] ResolveError),

    /// The related part has no usable content type
    #[error("picture part {0} has no content subtype")]
    UnknownFormat(String),
}

/// Resolve one relationship id to a `data:image/...;base64,...` URI.
pub fn image_data_uri(resolver: &dyn PartResolver, r_id: &str) -> Result<String, ImageError> {
    let part = resolver.related_part(r_id)?;
    let subtype = part.content_subtype();
    if subtype.is_empty() {
        return Err(ImageError::UnknownFormat(part.partname().to_string()));
    }

    let blob = part.blob();
    let mut uri = String::with_capacity(19 + subtype.len() + blob.len().div_ceil(3) * 4);
    uri.push_str("data:image/");
    uri.push_str(subtype);
    uri.push_str(";base64,");
    STANDARD.encode_string(blob, &mut uri);
    Ok(uri)
}

/// Data URIs of every picture in the paragraph that could be resolved, in
/// document order.
pub fn extract_images(paragraph: &Paragraph<'_>, resolver: &dyn PartResolver) -> SmallVec<[String; 2]> {
    let refs = match image_references(paragraph.xml()) {
        Ok(refs) => refs,
        Err(err) => {
            log::warn!("picture scan failed, paragraph treated as having none: {}", err);
            return SmallVec::new();
        },
    };

    refs.iter()
        .filter_map(|r_id| match image_data_uri(resolver, r_id) {
            Ok(uri) => Some(uri),
            Err(err) => {
                log::debug!("skipping picture {}: {}", r_id, err);
                None
            },
        })
        .collect()
}

/// Append one `<img>` per data URI.
pub fn write_image_tags(out: &mut String, uris: &[String]) {
    for uri in uris {
        out.push_str("<img src=\"");
        out.push_str(uri);
        out.push_str("\">");
    }
}
