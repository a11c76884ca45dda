//! Open Packaging Conventions (OPC), read side.
//!
//! A Word document is a ZIP container of parts linked by relationships. This
//! module loads the container, maps content types, and resolves relationship
//! ids to parts.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod rel;

pub use error::{OpcError, ResolveError};
pub use package::{OpcPackage, PartResolver, RelatedParts};
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use rel::{Relationship, Relationships};
