//! XML text helpers shared by the parser and serializer.
pub mod escape;

pub use escape::{escape_attr, escape_text, resolve_reference};
