//! The in-memory OPC package.
//!
//! [`OpcPackage`] owns every part reachable from the package relationships.
//! Parts refer to each other by relationship id, which makes the package a
//! graph rather than a tree; [`PartResolver`] is the one way to follow an
//! edge of that graph.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, ResolveError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{BlobPart, Part};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

/// Looks up the part a relationship id points to.
///
/// Implementations are scoped to one source part, since relationship ids are
/// only unique within the relationships of their source.
pub trait PartResolver {
    fn related_part(&self, r_id: &str) -> std::result::Result<&dyn Part, ResolveError>;
}

/// An OPC package loaded into memory.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All loaded parts, indexed by partname
    parts: HashMap<PackURI, Box<dyn Part>>,
}

impl OpcPackage {
    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use longan::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("document.docx")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::open(path)?)
    }

    /// Load an OPC package from a seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_reader(reader)?)
    }

    /// Load an OPC package from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_bytes(data)?)
    }

    fn from_phys_reader(phys_reader: PhysPkgReader) -> Result<Self> {
        let (rels, sparts) = PackageReader::from_phys_reader(phys_reader)?.into_parts();

        let parts = sparts
            .into_iter()
            .map(|spart| {
                let part: Box<dyn Part> =
                    Box::new(BlobPart::new(spart.partname.clone(), spart.content_type, spart.blob, spart.rels));
                (spart.partname, part)
            })
            .collect();

        Ok(Self { rels, parts })
    }

    /// The part the package's officeDocument relationship points to.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname)
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a part by relationship type from the package level.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(reltype)?;
        self.part(&rel.target_partname()?)
    }

    /// The part `source` relates to with the given type, if any.
    pub fn related_part_by_reltype(&self, source: &dyn Part, reltype: &str) -> Option<&dyn Part> {
        let rel = source.rels().part_with_reltype(reltype).ok()?;
        self.part(&rel.target_partname().ok()?).ok()
    }

    /// Resolver for the relationship ids used inside `source`.
    #[inline]
    pub fn resolver_for<'a>(&'a self, source: &'a dyn Part) -> RelatedParts<'a> {
        RelatedParts { package: self, source }
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

/// Resolves relationship ids of one source part against its package.
#[derive(Clone, Copy)]
pub struct RelatedParts<'a> {
    package: &'a OpcPackage,
    source: &'a dyn Part,
}

impl PartResolver for RelatedParts<'_> {
    fn related_part(&self, r_id: &str) -> std::result::Result<&dyn Part, ResolveError> {
        let rel = self
            .source
            .rels()
            .get(r_id)
            .ok_or_else(|| ResolveError::UnknownRelationship(r_id.to_string()))?;
        if rel.is_external() {
            return Err(ResolveError::ExternalTarget(r_id.to_string()));
        }
        let partname = rel
            .target_partname()
            .map_err(|_| ResolveError::MissingPart(rel.target_ref().to_string()))?;
        self.package
            .part(&partname)
            .map_err(|_| ResolveError::MissingPart(partname.to_string()))
    }
}
