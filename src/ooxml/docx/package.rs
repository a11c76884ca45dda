use crate::ooxml::docx::document::Document;
/// Package implementation for Word documents.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::{OpcPackage, Part};
use std::io::{Read, Seek};
use std::path::Path;

/// A Word (.docx) package.
///
/// This is the main entry point for reading Word documents. It wraps an OPC
/// package whose main part is a WordprocessingML document, template, or one of
/// their macro-enabled variants.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
/// println!("{} blocks", doc.blocks().count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .docx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Create a .docx package from a reader.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use longan::ooxml::docx::Package;
    /// use std::io::Cursor;
    ///
    /// let data = std::fs::read("document.docx")?;
    /// let pkg = Package::from_reader(Cursor::new(data))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Create a .docx package from its bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(data)?)
    }

    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let content_type = Self::main_part(&opc)?.content_type();
        if !ct::WML_MAIN_PARTS.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::WML_DOCUMENT_MAIN.to_string(),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    fn main_part(opc: &OpcPackage) -> Result<&dyn Part> {
        opc.main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main document part: {}", e)))
    }

    /// Get the main document.
    ///
    /// Loads the styles part, if any; a styles part that is not well-formed
    /// XML is an error.
    pub fn document(&self) -> Result<Document<'_>> {
        Document::new(Self::main_part(&self.opc)?, &self.opc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::blocks::Block;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_package(main_content_type: &str, styles: Option<&[u8]>) -> Vec<u8> {
        let mut zip_data = Vec::new();
        {
            let mut writer = ZipWriter::new(Cursor::new(&mut zip_data));
            let options = SimpleFileOptions::default();

            writer.start_file("[Content_Types].xml", options).unwrap();
            write!(
                writer,
                r#"<?xml version="1.0"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="{}"/>
    <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#,
                main_content_type
            )
            .unwrap();

            writer.start_file("_rels/.rels", options).unwrap();
            writer.write_all(br#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#).unwrap();

            if let Some(styles) = styles {
                writer.start_file("word/_rels/document.xml.rels", options).unwrap();
                writer.write_all(br#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#).unwrap();
                writer.start_file("word/styles.xml", options).unwrap();
                writer.write_all(styles).unwrap();
            }

            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(br#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
        <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p>
        <w:p><w:r><w:t>Body</w:t></w:r></w:p>
    </w:body>
</w:document>"#).unwrap();

            writer.finish().unwrap();
        }
        zip_data
    }

    const STYLES_XML: &[u8] = br#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
    <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
</w:styles>"#;

    fn style_names(pkg: &Package) -> Vec<String> {
        let doc = pkg.document().unwrap();
        doc.blocks()
            .map(|block| match block.unwrap() {
                Block::Paragraph(p) => doc.style_name(&p).to_string(),
                Block::Table(_) => "table".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_open_with_styles() {
        let pkg = Package::from_bytes(build_package(ct::WML_DOCUMENT_MAIN, Some(STYLES_XML))).unwrap();
        assert!(pkg.document().unwrap().styles().is_some());
        assert_eq!(style_names(&pkg), vec!["Heading 1", "Normal"]);
    }

    #[test]
    fn test_open_without_styles() {
        let pkg = Package::from_reader(Cursor::new(build_package(ct::WML_DOCUMENT_MAIN, None))).unwrap();
        assert!(pkg.document().unwrap().styles().is_none());
        assert_eq!(style_names(&pkg), vec!["Normal", "Normal"]);
    }

    #[test]
    fn test_macro_enabled_template_is_accepted() {
        assert!(Package::from_bytes(build_package(ct::WML_TEMPLATE_MACRO_MAIN, None)).is_ok());
    }

    #[test]
    fn test_rejects_other_main_parts() {
        let result = Package::from_bytes(build_package(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
            None,
        ));
        assert!(matches!(result, Err(OoxmlError::InvalidContentType { .. })));
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(matches!(
            Package::from_bytes(b"plain text, not a zip".to_vec()),
            Err(OoxmlError::Opc(_))
        ));
    }

    #[test]
    fn test_malformed_styles_fail_document() {
        let pkg = Package::from_bytes(build_package(ct::WML_DOCUMENT_MAIN, Some(b"<w:styles><w:style></w:styles>"))).unwrap();
        assert!(pkg.document().is_err());
    }
}
