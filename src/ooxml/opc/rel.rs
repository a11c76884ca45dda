//! Relationships between parts of an OPC package.
//!
//! Parts refer to one another by relationship id (`rId7`), not by name. A
//! [`Relationships`] collection holds every outgoing edge of one source (a part
//! or the package itself) and resolves ids to target partnames.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a part URI or external URL
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Relative part reference for internal relationships, absolute URL for
    /// external ones.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Get the absolute target partname for internal relationships.
    ///
    /// Returns an error if this is an external relationship.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} targets external resource {}",
                self.r_id, self.target_ref
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source.
///
/// Lookup is by relationship id; iteration follows the order of the
/// relationships part so traversal of the package stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    /// Relationships in document order
    rels: Vec<Relationship>,

    /// rId -> index into `rels`
    index: HashMap<String, usize>,
}

impl Relationships {
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a relationship. A repeated id replaces the earlier entry.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) -> &Relationship {
        let rel = Relationship::new(
            r_id.clone(),
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        );
        let idx = match self.index.get(&r_id) {
            Some(&idx) => {
                self.rels[idx] = rel;
                idx
            },
            None => {
                self.rels.push(rel);
                self.index.insert(r_id, self.rels.len() - 1);
                self.rels.len() - 1
            },
        };
        &self.rels[idx]
    }

    /// Get a relationship by its id.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.index.get(r_id).map(|&idx| &self.rels[idx])
    }

    /// The single internal relationship of the given type.
    ///
    /// Fails when there is none or more than one.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self
            .rels
            .iter()
            .filter(|rel| rel.reltype == reltype && !rel.is_external);
        let rel = matching
            .next()
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("no relationship of type {}", reltype)))?;
        if matching.next().is_some() {
            return Err(OpcError::InvalidRelationship(format!(
                "multiple relationships of type {}",
                reltype
            )));
        }
        Ok(rel)
    }

    /// Iterate over relationships in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    fn sample() -> Relationships {
        let mut rels = Relationships::new("/word".to_string());
        rels.add_relationship(rt::STYLES.to_string(), "styles.xml".to_string(), "rId1".to_string(), false);
        rels.add_relationship(rt::IMAGE.to_string(), "media/image1.png".to_string(), "rId2".to_string(), false);
        rels.add_relationship(
            rt::HYPERLINK.to_string(),
            "https://example.com/".to_string(),
            "rId3".to_string(),
            true,
        );
        rels
    }

    #[test]
    fn test_get_and_target_partname() {
        let rels = sample();
        let image = rels.get("rId2").unwrap();
        assert_eq!(image.target_partname().unwrap().as_str(), "/word/media/image1.png");
        assert!(rels.get("rId9").is_none());
    }

    #[test]
    fn test_external_has_no_partname() {
        let rels = sample();
        assert!(rels.get("rId3").unwrap().target_partname().is_err());
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = sample();
        assert_eq!(rels.part_with_reltype(rt::STYLES).unwrap().r_id(), "rId1");
        assert!(rels.part_with_reltype(rt::NUMBERING).is_err());

        rels.add_relationship(rt::IMAGE.to_string(), "media/image2.png".to_string(), "rId4".to_string(), false);
        assert!(rels.part_with_reltype(rt::IMAGE).is_err());
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let mut rels = sample();
        rels.add_relationship(rt::IMAGE.to_string(), "media/other.png".to_string(), "rId2".to_string(), false);
        assert_eq!(rels.len(), 3);
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "media/other.png");
    }
}
