//! Physical access to an OPC package stored as a ZIP archive.
//!
//! The whole archive is inflated up front: conversion needs nearly every part
//! of a Word package anyway, and holding the members in a map keeps the graph
//! walk in [`crate::ooxml::opc::pkgreader`] free of I/O.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// All members of a package archive, keyed by ZIP member name.
#[derive(Debug, Default)]
pub struct PhysPkgReader {
    members: HashMap<String, Vec<u8>>,
}

impl PhysPkgReader {
    /// Read a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Read a package from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }

    /// Read a package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut blob = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut blob)?;
            members.insert(name, blob);
        }

        Ok(Self { members })
    }

    /// Get the content of a part, if the archive holds it.
    #[inline]
    pub fn blob_for(&self, pack_uri: &PackURI) -> Option<&[u8]> {
        self.members.get(pack_uri.membername()).map(Vec::as_slice)
    }

    /// Move the content of a part out of the reader.
    #[inline]
    pub fn take_blob(&mut self, pack_uri: &PackURI) -> Option<Vec<u8>> {
        self.members.remove(pack_uri.membername())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
