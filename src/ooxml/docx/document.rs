/// Document - the main API for reading Word document content.
use crate::ooxml::docx::blocks::Blocks;
use crate::ooxml::docx::numbering::Numbering;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::styles::{self, Styles};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::{OpcPackage, Part, RelatedParts};

/// A Word document: the main document part together with the parts it
/// relates to.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::ooxml::docx::{Block, Package};
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
///
/// for block in doc.blocks() {
///     if let Block::Paragraph(para) = block? {
///         println!("{}: {}", doc.style_name(&para), para.text());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Document<'a> {
    /// The main document part
    part: &'a dyn Part,
    opc: &'a OpcPackage,
    /// `None` when the document has no styles part
    styles: Option<Styles>,
}

impl<'a> Document<'a> {
    /// Create a Document over its main part, loading the styles it relates to.
    ///
    /// This is typically called internally by `Package::document()`.
    pub(crate) fn new(part: &'a dyn Part, opc: &'a OpcPackage) -> Result<Self> {
        let styles = opc
            .related_part_by_reltype(part, relationship_type::STYLES)
            .map(Styles::from_part)
            .transpose()?;
        if styles.is_none() {
            log::debug!("{} has no styles part", part.partname());
        }
        Ok(Self { part, opc, styles })
    }

    /// The body blocks in document order.
    ///
    /// Every call starts a fresh pass over the part.
    #[inline]
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks::new(self.part.blob())
    }

    /// The style definitions, when the document has a styles part.
    #[inline]
    pub fn styles(&self) -> Option<&Styles> {
        self.styles.as_ref()
    }

    /// UI name of the paragraph's style (`Heading 1`, `Normal`, ...).
    #[inline]
    pub fn style_name(&self, paragraph: &Paragraph<'_>) -> &str {
        styles::paragraph_style_name(self.styles.as_ref(), paragraph.style_id())
    }

    /// Numbering definitions, when the document has a numbering part.
    pub fn numbering(&self) -> Result<Option<Numbering>> {
        self.opc
            .related_part_by_reltype(self.part, relationship_type::NUMBERING)
            .map(Numbering::from_part)
            .transpose()
    }

    /// Resolver for relationship ids used in the body, such as picture embeds.
    #[inline]
    pub fn resolver(&self) -> RelatedParts<'a> {
        self.opc.resolver_for(self.part)
    }

    /// The underlying main document part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}
