//! Writing an [`XmlTree`] subtree back to XML text.
use crate::common::xml::{escape_attr, escape_text};
use crate::ooxml::error::Result;
use crate::ooxml::oxml::ns::{self, XML_NS};
use crate::ooxml::oxml::tree::{NodeData, NodeId, XmlTree};
use crate::ooxml::oxml::validate;

/// Configuration options for serialization.
///
/// # Examples
///
/// ```rust
/// use litchi_tables::ooxml::oxml::SerializeOptions;
///
/// // Compact, validated output without an XML declaration
/// let options = SerializeOptions::default();
///
/// // Or customize
/// let options = SerializeOptions::new()
///     .with_xml_declaration(true)
///     .with_indent(Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Whether to emit `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`
    pub xml_declaration: bool,
    /// Spaces per nesting level, `None` for compact output
    pub indent: Option<usize>,
    /// Whether to reject subtrees that break table structure rules
    pub validate: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            xml_declaration: false,
            indent: None,
            validate: true,
        }
    }
}

impl SerializeOptions {
    /// Create a new `SerializeOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit an XML declaration.
    #[inline]
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set pretty-printing indentation.
    ///
    /// Only elements whose children are all elements are broken over lines,
    /// so character data is never altered.
    #[inline]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether structural validation runs before writing.
    ///
    /// Turning this off allows dumping a cell that is mid-way through a
    /// content replacement, which is useful for debugging only.
    #[inline]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

struct Prefixes {
    map: Vec<(String, String)>,
}

impl Prefixes {
    fn collect(tree: &XmlTree, root: NodeId) -> Self {
        let mut prefixes = Self { map: Vec::new() };
        for id in tree.descendants(root) {
            if let NodeData::Element { name, attributes } = tree.data(id) {
                prefixes.register(tree, name);
                for (key, _) in attributes {
                    prefixes.register(tree, key);
                }
            }
        }
        prefixes
    }

    fn register(&mut self, tree: &XmlTree, name: &str) {
        let Some(uri) = ns::split_clark(name).0 else {
            return;
        };
        if uri == XML_NS || self.map.iter().any(|(ns, _)| ns == uri) {
            return;
        }
        let preferred = ns::prefix_for(uri)
            .or_else(|| tree.prefix_hint(uri))
            .filter(|prefix| !self.map.iter().any(|(_, p)| p == prefix))
            .map(str::to_string);
        let prefix = preferred.unwrap_or_else(|| format!("ns{}", self.map.len()));
        self.map.push((uri.to_string(), prefix));
    }

    fn qualified(&self, name: &str, out: &mut String) {
        let (uri, local) = ns::split_clark(name);
        match uri {
            Some(XML_NS) => out.push_str("xml:"),
            Some(uri) => {
                if let Some((_, prefix)) = self.map.iter().find(|(ns, _)| ns == uri) {
                    out.push_str(prefix);
                    out.push(':');
                }
            },
            None => {},
        }
        out.push_str(local);
    }
}

impl XmlTree {
    /// Serialize the subtree rooted at `id`.
    ///
    /// Namespace declarations for every namespace used in the subtree are
    /// written on its top element.
    pub fn serialize(&self, id: NodeId, options: &SerializeOptions) -> Result<String> {
        if options.validate {
            validate::check_structure(self, id)?;
        }

        let prefixes = Prefixes::collect(self, id);
        let mut out = String::with_capacity(256);
        if options.xml_declaration {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        }
        self.write_node(id, &prefixes, options, 0, true, &mut out);
        tracing::debug!(node = ?id, bytes = out.len(), "serialized subtree");
        Ok(out)
    }

    /// Serialize the subtree rooted at `id` with default options.
    pub fn to_xml(&self, id: NodeId) -> Result<String> {
        self.serialize(id, &SerializeOptions::default())
    }

    fn write_node(
        &self,
        id: NodeId,
        prefixes: &Prefixes,
        options: &SerializeOptions,
        depth: usize,
        top: bool,
        out: &mut String,
    ) {
        let (name, attributes) = match self.data(id) {
            NodeData::Text(text) => {
                out.push_str(&escape_text(text));
                return;
            },
            NodeData::Element { name, attributes } => (name, attributes),
        };

        out.push('<');
        prefixes.qualified(name, out);
        if top {
            for (uri, prefix) in &prefixes.map {
                out.push_str(" xmlns:");
                out.push_str(prefix);
                out.push_str("=\"");
                out.push_str(&escape_attr(uri));
                out.push('"');
            }
        }
        for (key, value) in attributes {
            out.push(' ');
            prefixes.qualified(key, out);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        let children = self.children(id);
        if children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        let indent = options
            .indent
            .filter(|_| children.iter().all(|&child| self.is_element(child)));
        for &child in children {
            if let Some(width) = indent {
                out.push('\n');
                push_spaces(out, width * (depth + 1));
            }
            self.write_node(child, prefixes, options, depth + 1, false, out);
        }
        if let Some(width) = indent {
            out.push('\n');
            push_spaces(out, width * depth);
        }

        out.push_str("</");
        prefixes.qualified(name, out);
        out.push('>');
    }
}

#[inline]
fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::ns::W_NS;

    #[test]
    fn test_round_trip_compact() {
        let xml = format!(
            r#"<w:tbl xmlns:w="{}"><w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr><w:tblGrid/></w:tbl>"#,
            W_NS
        );
        let tree = XmlTree::parse(&xml).unwrap();
        assert_eq!(tree.to_xml(tree.root().unwrap()).unwrap(), xml);
    }

    #[test]
    fn test_prefix_normalized_to_w() {
        let xml = format!(r#"<foo:p xmlns:foo="{}"/>"#, W_NS);
        let tree = XmlTree::parse(&xml).unwrap();
        assert_eq!(
            tree.to_xml(tree.root().unwrap()).unwrap(),
            format!(r#"<w:p xmlns:w="{}"/>"#, W_NS)
        );
    }

    #[test]
    fn test_text_escaped() {
        let mut tree = XmlTree::new();
        let t = tree.create_element("w:t");
        tree.set_attribute(t, "xml:space", "preserve");
        let text = tree.create_text("a < b & c");
        tree.append_child(t, text).unwrap();
        assert_eq!(
            tree.to_xml(t).unwrap(),
            format!(
                r#"<w:t xmlns:w="{}" xml:space="preserve">a &lt; b &amp; c</w:t>"#,
                W_NS
            )
        );
    }

    #[test]
    fn test_indent_and_declaration() {
        let mut tree = XmlTree::new();
        let tc = tree.create_element("w:tc");
        let p = tree.create_element("w:p");
        tree.append_child(tc, p).unwrap();
        let options = SerializeOptions::new()
            .with_xml_declaration(true)
            .with_indent(Some(2));
        assert_eq!(
            tree.serialize(tc, &options).unwrap(),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<w:tc xmlns:w=\"{}\">\n  <w:p/>\n</w:tc>",
                W_NS
            )
        );
    }

    #[test]
    fn test_unknown_namespace_keeps_hint() {
        let xml = r#"<v:shape xmlns:v="urn:schemas-microsoft-com:vml" v:id="1"/>"#;
        let tree = XmlTree::parse(xml).unwrap();
        assert_eq!(tree.to_xml(tree.root().unwrap()).unwrap(), xml);
    }
}
