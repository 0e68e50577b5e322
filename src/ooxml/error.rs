/// Error types for OOXML table operations.
use thiserror::Error;

/// Result type for OOXML table operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML table operations.
///
/// Reading an optional child or attribute that is simply absent is never an
/// error; these variants are reserved for malformed input and for trees that
/// violate a structural requirement of the schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OoxmlError {
    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// A prefixed name whose prefix has no namespace binding
    #[error("Unknown namespace prefix: {0}")]
    UnknownPrefix(String),

    /// A child element required by the schema is not present
    #[error("Required <{child}> child missing from <{parent}>")]
    MissingChild {
        parent: &'static str,
        child: &'static str,
    },

    /// A required attribute is not present
    #[error("Required attribute {attribute} missing from <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute value outside its restricted value space
    #[error("Invalid value {value:?} for attribute {attribute}, expected {expected}")]
    InvalidAttributeValue {
        attribute: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A node was accessed as an element kind it is not
    #[error("Unexpected element: expected <{expected}>, got <{found}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    /// A positional query on a node that has no parent
    #[error("<{0}> element is not attached to a parent")]
    Detached(&'static str),

    /// Inserting a node beneath itself
    #[error("Cannot insert an element into its own subtree")]
    CyclicInsert,

    /// A table cell with no block-level content
    #[error("<w:tc> must contain at least one block-level element")]
    InvalidCellContent,
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
