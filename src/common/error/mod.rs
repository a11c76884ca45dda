//! Unified error type for the crate.
//!
//! Layer-specific errors (OPC, WordprocessingML) convert into [`Error`], which
//! is what the conversion entry points return.

pub mod conversions;
pub mod types;

pub use types::{Error, Result};
