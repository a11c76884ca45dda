//! XML helpers shared by the WordprocessingML readers.
//!
//! quick-xml reports entity and character references (`&amp;`, `&#160;`) as
//! separate `GeneralRef` events; [`push_reference`] turns them back into text.

pub mod escape;

pub use escape::{escape_attr, escape_html};

use quick_xml::events::BytesStart;

/// The value of the attribute whose local name is `local`, ignoring its prefix.
///
/// Malformed attributes and undecodable values are treated as absent.
pub fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == local)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// The `w:val` attribute, the carrier of almost every WordprocessingML property.
#[inline]
pub fn val(e: &BytesStart<'_>) -> Option<String> {
    attr_value(e, b"val")
}

/// An `ST_OnOff` toggle such as `<w:b/>` or `<w:i w:val="false"/>`.
///
/// The bare element means on; otherwise `true`, `1` and `on` mean on.
pub fn on_off(e: &BytesStart<'_>) -> bool {
    match val(e) {
        None => true,
        Some(v) => matches!(v.as_str(), "true" | "1" | "on"),
    }
}

/// Append the text a reference stands for. `name` is the reference without
/// its `&` and `;`. Unknown references are kept literally.
pub fn push_reference(out: &mut String, name: &[u8]) {
    let resolved = match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => std::str::from_utf8(hex)
            .ok()
            .and_then(|s| u32::from_str_radix(s, 16).ok())
            .and_then(char::from_u32),
        [b'#', dec @ ..] => atoi_simd::parse_skipped::<u32>(dec).ok().and_then(char::from_u32),
        _ => None,
    };

    match resolved {
        Some(c) => out.push(c),
        None => {
            out.push('&');
            out.push_str(&String::from_utf8_lossy(name));
            out.push(';');
        },
    }
}
