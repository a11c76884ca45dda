//! Constant values related to the Open Packaging Convention.
//!
//! Content type URIs, target modes and relationship types needed to read a
//! WordprocessingML package.

/// Content type URIs (like MIME-types) that specify a part's format
pub mod content_type {
    // WordprocessingML main parts
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_TEMPLATE_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
    pub const WML_DOCUMENT_MACRO_MAIN: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";
    pub const WML_TEMPLATE_MACRO_MAIN: &str = "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

    /// Content types accepted for the main part of a Word package.
    pub const WML_MAIN_PARTS: [&str; 4] = [
        WML_DOCUMENT_MAIN,
        WML_DOCUMENT_MACRO_MAIN,
        WML_TEMPLATE_MAIN,
        WML_TEMPLATE_MACRO_MAIN,
    ];
}

/// Target mode values for relationships
pub mod target_mode {
    /// Internal relationship (points to a part within the package)
    pub const INTERNAL: &str = "Internal";

    /// External relationship (points to an external resource)
    pub const EXTERNAL: &str = "External";
}

/// Relationship type URIs used in OPC packages
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

    // Document parts
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

    // Media
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const HYPERLINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}
