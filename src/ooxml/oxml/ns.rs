//! Namespace prefixes and Clark-notation tag names.
//!
//! Element and attribute names are stored in the tree in Clark notation
//! (`{namespace-uri}local`). Code in this crate refers to them with the
//! familiar prefixed form (`w:tc`) and converts through [`qn`].
use crate::ooxml::error::{OoxmlError, Result};
use phf::phf_map;

/// The WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// The namespace implicitly bound to the `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Well-known prefixes, used both to resolve prefixed names in code and to
/// choose prefixes when serializing.
static NSMAP: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "http://schemas.openxmlformats.org/drawingml/2006/main",
    "m" => "http://schemas.openxmlformats.org/officeDocument/2006/math",
    "mc" => "http://schemas.openxmlformats.org/markup-compatibility/2006",
    "pic" => "http://schemas.openxmlformats.org/drawingml/2006/picture",
    "r" => "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    "w" => "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    "w14" => "http://schemas.microsoft.com/office/word/2010/wordml",
    "wp" => "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing",
    "xml" => "http://www.w3.org/XML/1998/namespace",
};

/// Namespace URI bound to a well-known prefix.
#[inline]
pub fn namespace(prefix: &str) -> Option<&'static str> {
    NSMAP.get(prefix).copied()
}

/// Well-known prefix for a namespace URI.
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    NSMAP
        .entries()
        .find_map(|(prefix, ns)| (*ns == uri).then_some(*prefix))
}

/// Convert a prefixed name such as `w:tbl` into Clark notation.
///
/// Unprefixed names are returned unchanged. Panics on an unknown prefix;
/// only use it with names written in source code. Names read from a document
/// are resolved by the parser against the document's own declarations.
///
/// # Examples
///
/// ```
/// use litchi_tables::ooxml::oxml::ns::qn;
/// assert_eq!(
///     qn("w:tc"),
///     "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}tc"
/// );
/// assert_eq!(qn("id"), "id");
/// ```
pub fn qn(tag: &str) -> String {
    try_qn(tag).expect("prefix of a static tag name must be registered")
}

/// Fallible form of [`qn`].
pub fn try_qn(tag: &str) -> Result<String> {
    match tag.split_once(':') {
        Some((prefix, local)) => {
            let uri = namespace(prefix)
                .ok_or_else(|| OoxmlError::UnknownPrefix(prefix.to_string()))?;
            Ok(clark(uri, local))
        },
        None => Ok(tag.to_string()),
    }
}

/// Build a Clark-notation name from a namespace URI and a local name.
#[inline]
pub fn clark(uri: &str, local: &str) -> String {
    let mut name = String::with_capacity(uri.len() + local.len() + 2);
    name.push('{');
    name.push_str(uri);
    name.push('}');
    name.push_str(local);
    name
}

/// Split a Clark-notation name into namespace URI and local name.
#[inline]
pub fn split_clark(name: &str) -> (Option<&str>, &str) {
    match name.strip_prefix('{').and_then(|rest| rest.split_once('}')) {
        Some((uri, local)) => (Some(uri), local),
        None => (None, name),
    }
}

/// Test whether a Clark-notation name matches a prefixed name, without
/// allocating.
pub fn matches(name: &str, tag: &str) -> bool {
    let (uri, local) = split_clark(name);
    match tag.split_once(':') {
        Some((prefix, tag_local)) => {
            local == tag_local && uri.is_some() && uri == namespace(prefix)
        },
        None => uri.is_none() && local == tag,
    }
}
