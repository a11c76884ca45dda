//! Read-only view of a serialized OPC package.
//!
//! Parses `[Content_Types].xml` and the `.rels` parts, then walks the
//! relationship graph from the package relationships, collecting every
//! reachable internal part exactly once.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{HashMap, HashSet};

/// Part as loaded from the physical package, before it becomes a [`crate::ooxml::opc::Part`].
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    pub blob: Vec<u8>,
    pub rels: Relationships,
}

/// Content types by extension (`Default`) and by partname (`Override`).
///
/// Both lookups are case-insensitive, as OPC requires.
#[derive(Debug, Default)]
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let is_default = match e.local_name().as_ref() {
                        b"Default" => true,
                        b"Override" => false,
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.local_name().as_ref() {
                            b"Extension" | b"PartName" => {
                                key = Some(attr.unescape_value()?.to_lowercase());
                            },
                            b"ContentType" => {
                                content_type = Some(attr.unescape_value()?.into_owned());
                            },
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, content_type) {
                        if is_default {
                            map.defaults.insert(key, ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!("Content types parse error: {}", e)));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override first, then the default for the extension.
    fn get(&self, pack_uri: &PackURI) -> Option<&str> {
        self.overrides
            .get(&pack_uri.as_str().to_lowercase())
            .or_else(|| self.defaults.get(&pack_uri.ext().to_lowercase()))
            .map(String::as_str)
    }
}

/// Parse a relationships part. Entries without an id, type or target are skipped.
pub(crate) fn parse_rels_xml(rels_xml: &[u8], base_uri: &str) -> Result<Relationships> {
    let mut rels = Relationships::new(base_uri.to_string());
    let mut reader = Reader::from_reader(rels_xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut is_external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.local_name().as_ref() {
                            b"Id" => r_id = Some(attr.unescape_value()?.into_owned()),
                            b"Type" => reltype = Some(attr.unescape_value()?.into_owned()),
                            b"Target" => target_ref = Some(attr.unescape_value()?.into_owned()),
                            b"TargetMode" => {
                                is_external = attr.unescape_value()? == target_mode::EXTERNAL;
                            },
                            _ => {},
                        }
                    }

                    if let (Some(id), Some(rt), Some(tr)) = (r_id, reltype, target_ref) {
                        rels.add_relationship(rt, tr, id, is_external);
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

/// Package relationships plus every part reachable from them.
pub struct PackageReader {
    pkg_rels: Relationships,
    sparts: Vec<SerializedPart>,
}

impl PackageReader {
    /// Load the package structure from an inflated archive.
    ///
    /// A missing `[Content_Types].xml` is an error. A relationship whose
    /// target is absent from the archive or has no content type is dropped,
    /// so one dangling link cannot make the whole package unreadable.
    pub fn from_phys_reader(mut phys_reader: PhysPkgReader) -> Result<Self> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let content_types = phys_reader
            .blob_for(&content_types_uri)
            .ok_or_else(|| OpcError::PartNotFound(CONTENT_TYPES_URI.to_string()))
            .and_then(ContentTypeMap::from_xml)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_rels = Self::load_rels(&phys_reader, &package_uri)?;
        let sparts = Self::load_parts(&mut phys_reader, &pkg_rels, &content_types)?;

        Ok(Self { pkg_rels, sparts })
    }

    fn load_rels(phys_reader: &PhysPkgReader, source_uri: &PackURI) -> Result<Relationships> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match phys_reader.blob_for(&rels_uri) {
            Some(xml) => parse_rels_xml(xml, source_uri.base_uri()),
            None => Ok(Relationships::new(source_uri.base_uri().to_string())),
        }
    }

    /// Breadth-first walk of the relationship graph. The graph may contain
    /// cycles and shared targets; each partname is visited once.
    fn load_parts(
        phys_reader: &mut PhysPkgReader,
        pkg_rels: &Relationships,
        content_types: &ContentTypeMap,
    ) -> Result<Vec<SerializedPart>> {
        let mut sparts = Vec::with_capacity(32);
        let mut visited = HashSet::with_capacity(32);
        let mut queue = std::collections::VecDeque::new();

        let mut enqueue = |rels: &Relationships, queue: &mut std::collections::VecDeque<PackURI>| {
            for rel in rels.iter().filter(|rel| !rel.is_external()) {
                match rel.target_partname() {
                    Ok(partname) => {
                        if visited.insert(partname.clone()) {
                            queue.push_back(partname);
                        }
                    },
                    Err(e) => debug!("skipping relationship {}: {}", rel.r_id(), e),
                }
            }
        };

        enqueue(pkg_rels, &mut queue);

        while let Some(partname) = queue.pop_front() {
            let Some(content_type) = content_types.get(&partname).map(str::to_string) else {
                debug!("no content type for {}, part dropped", partname);
                continue;
            };
            let rels = Self::load_rels(phys_reader, &partname)?;
            let Some(blob) = phys_reader.take_blob(&partname) else {
                debug!("{} is referenced but not present in the package", partname);
                continue;
            };

            enqueue(&rels, &mut queue);
            sparts.push(SerializedPart {
                partname,
                content_type,
                blob,
                rels,
            });
        }

        Ok(sparts)
    }

    /// Take ownership of the package-level relationships and the loaded parts.
    pub fn into_parts(self) -> (Relationships, Vec<SerializedPart>) {
        (self.pkg_rels, self.sparts)
    }
}
