//! Office Open XML support.
//!
//! The implementation follows the layering of python-docx, adapted to an
//! arena-backed element tree:
//!
//! 1. **XML layer** (`oxml`): element tree, parser, serializer, namespace
//!    map and the typed child/attribute descriptors.
//! 2. **Word layer** (`docx`): table, row, cell and property elements
//!    built from those descriptors.
//! 3. **Errors** (`error`): the shared error type.
pub mod docx;
pub mod error;
pub mod oxml;

pub use error::{OoxmlError, Result};
