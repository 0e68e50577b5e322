//! Generic XML element tree and schema descriptors.
//!
//! This layer knows nothing about tables. It provides
//!
//! 1. an arena-backed element tree ([`XmlTree`]) with parsing and
//!    serialization,
//! 2. namespace handling in Clark notation (`ns`),
//! 3. typed child and attribute descriptors (`xmlchemy`) that keep children
//!    in schema order, and
//! 4. the simple-type value spaces used by attributes (`simpletypes`).
pub mod ns;
pub mod parser;
pub mod serializer;
pub mod simpletypes;
pub mod tree;
pub mod validate;
pub mod xmlchemy;

pub use serializer::SerializeOptions;
pub use simpletypes::SimpleType;
pub use tree::{NodeData, NodeId, XmlTree};
pub use xmlchemy::Element;
