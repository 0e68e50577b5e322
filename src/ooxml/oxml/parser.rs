//! Building an [`XmlTree`] from XML text.
//!
//! Namespace prefixes are resolved against the declarations in scope while
//! reading, so names end up in Clark notation no matter which prefixes the
//! producing application chose. Whitespace-only text between elements is
//! dropped as ignorable; whitespace that forms the entire content of an
//! element (for example `<w:t xml:space="preserve"> </w:t>`) is kept.
use crate::common::xml::resolve_reference;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::ns::{self, XML_NS};
use crate::ooxml::oxml::tree::{NodeId, XmlTree};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

type Scope = SmallVec<[(String, String); 2]>;

struct OpenElement {
    id: NodeId,
    scope: Scope,
}

impl XmlTree {
    /// Parse a complete XML document. The document element becomes the
    /// tree's root.
    ///
    /// # Examples
    ///
    /// ```
    /// use litchi_tables::ooxml::oxml::XmlTree;
    ///
    /// let tree = XmlTree::parse(
    ///     r#"<w:tbl xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#,
    /// )?;
    /// let root = tree.root().unwrap();
    /// assert!(tree.is(root, "w:tbl"));
    /// # Ok::<(), litchi_tables::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let mut tree = Self::new();
        let root = tree.parse_fragment(xml)?;
        tree.set_root(root);
        Ok(tree)
    }

    /// Parse a single-rooted XML fragment into this tree as a detached
    /// subtree and return its top element.
    pub fn parse_fragment(&mut self, xml: &str) -> Result<NodeId> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<OpenElement> = Vec::new();
        let mut top: Option<NodeId> = None;
        let mut text = String::new();
        let mut element_count = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    self.flush_text(&mut text, &stack, false);
                    let open = self.open_element(&e, &stack)?;
                    self.place(open.id, &stack, &mut top)?;
                    element_count += 1;
                    stack.push(open);
                },
                Event::Empty(e) => {
                    self.flush_text(&mut text, &stack, false);
                    let open = self.open_element(&e, &stack)?;
                    self.place(open.id, &stack, &mut top)?;
                    element_count += 1;
                },
                Event::End(_) => {
                    self.flush_text(&mut text, &stack, true);
                    stack.pop();
                },
                Event::Text(e) => {
                    let raw = std::str::from_utf8(e.as_ref())?;
                    unescape_into(raw, &mut text)?;
                },
                Event::CData(e) => {
                    text.push_str(std::str::from_utf8(e.as_ref())?);
                },
                Event::GeneralRef(r) => {
                    let name = std::str::from_utf8(r.as_ref())?;
                    let ch = resolve_reference(name)
                        .ok_or_else(|| OoxmlError::Xml(format!("Unknown entity &{};", name)))?;
                    text.push(ch);
                },
                Event::Eof => break,
                // Declarations, comments, processing instructions and DTDs
                // carry nothing for the element tree.
                _ => {},
            }
        }

        if !stack.is_empty() {
            return Err(OoxmlError::Xml("Unexpected end of input".to_string()));
        }
        let top = top.ok_or_else(|| OoxmlError::Xml("No root element".to_string()))?;
        tracing::debug!(elements = element_count, "parsed XML fragment");
        Ok(top)
    }

    fn open_element(&mut self, e: &BytesStart<'_>, stack: &[OpenElement]) -> Result<OpenElement> {
        let mut scope = Scope::new();
        let mut plain: SmallVec<[(String, String); 4]> = SmallVec::new();

        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| OoxmlError::Xml(e.to_string()))?
                .into_owned();
            if key == "xmlns" {
                scope.push((String::new(), value));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                self.remember_prefix(&value, prefix);
                scope.push((prefix.to_string(), value));
            } else {
                plain.push((key, value));
            }
        }

        let raw_name = std::str::from_utf8(e.name().as_ref())?.to_string();
        let name = resolve(&raw_name, &scope, stack, true)?;
        let id = self.create_element_clark(name);
        for (key, value) in plain {
            let key = resolve(&key, &scope, stack, false)?;
            self.push_attribute_clark(id, key, value);
        }
        Ok(OpenElement { id, scope })
    }

    fn place(&mut self, id: NodeId, stack: &[OpenElement], top: &mut Option<NodeId>) -> Result<()> {
        match stack.last() {
            Some(parent) => self.attach(parent.id, None, id),
            None if top.is_none() => *top = Some(id),
            None => return Err(OoxmlError::Xml("Multiple root elements".to_string())),
        }
        Ok(())
    }

    fn flush_text(&mut self, text: &mut String, stack: &[OpenElement], closing: bool) {
        if text.is_empty() {
            return;
        }
        let content = std::mem::take(text);
        let Some(parent) = stack.last() else {
            return;
        };
        let ignorable = content.chars().all(char::is_whitespace)
            && !(closing && self.children(parent.id).is_empty());
        if !ignorable {
            let node = self.create_text(content);
            self.attach(parent.id, None, node);
        }
    }
}

/// Resolve a possibly prefixed raw name against the innermost declarations.
/// Unprefixed attributes are in no namespace; unprefixed elements take the
/// default namespace when one is declared.
fn resolve(raw: &str, scope: &Scope, stack: &[OpenElement], is_element: bool) -> Result<String> {
    let (prefix, local) = match raw.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None if !is_element => return Ok(raw.to_string()),
        None => ("", raw),
    };
    if prefix == "xml" {
        return Ok(ns::clark(XML_NS, local));
    }
    let uri = scope
        .iter()
        .chain(stack.iter().rev().flat_map(|open| open.scope.iter()))
        .find(|(p, _)| p == prefix)
        .map(|(_, uri)| uri.as_str());
    match uri {
        Some("") | None if prefix.is_empty() => Ok(local.to_string()),
        Some(uri) => Ok(ns::clark(uri, local)),
        None => Err(OoxmlError::UnknownPrefix(prefix.to_string())),
    }
}

/// Append `raw` to `out`, decoding any entity or character references.
fn unescape_into(raw: &str, out: &mut String) -> Result<()> {
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = after
            .find(';')
            .ok_or_else(|| OoxmlError::Xml("Unterminated entity reference".to_string()))?;
        let name = &after[..semi];
        let ch = resolve_reference(name)
            .ok_or_else(|| OoxmlError::Xml(format!("Unknown entity &{};", name)))?;
        out.push(ch);
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::ns::W_NS;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn test_parse_resolves_prefixes() {
        let xml = format!(
            r#"<x:tbl xmlns:x="{}"><x:tblPr><x:tblW x:w="0" x:type="auto"/></x:tblPr></x:tbl>"#,
            W
        );
        let tree = XmlTree::parse(&xml).unwrap();
        let root = tree.root().unwrap();
        assert!(tree.is(root, "w:tbl"));
        let tbl_pr = tree.first_child_tagged(root, "w:tblPr").unwrap();
        let tbl_w = tree.first_child_tagged(tbl_pr, "w:tblW").unwrap();
        assert_eq!(tree.attribute(tbl_w, "w:type"), Some("auto"));
        assert_eq!(tree.attribute(tbl_w, "w:w"), Some("0"));
    }

    #[test]
    fn test_parse_default_namespace() {
        let xml = format!(r#"<tbl xmlns="{}"><tr/></tbl>"#, W_NS);
        let tree = XmlTree::parse(&xml).unwrap();
        let root = tree.root().unwrap();
        assert!(tree.is(root, "w:tbl"));
        assert_eq!(tree.children_tagged(root, "w:tr").count(), 1);
    }

    #[test]
    fn test_ignorable_whitespace_dropped() {
        let xml = format!(
            "<w:tc xmlns:w=\"{}\">\n  <w:p>\n    <w:r><w:t xml:space=\"preserve\"> </w:t></w:r>\n  </w:p>\n</w:tc>",
            W
        );
        let tree = XmlTree::parse(&xml).unwrap();
        let tc = tree.root().unwrap();
        assert_eq!(tree.children(tc).len(), 1);
        let p = tree.children(tc)[0];
        assert_eq!(tree.children(p).len(), 1);
        assert_eq!(tree.text(tc), " ");
        let t = tree.descendants(tc).find(|&id| tree.is(id, "w:t")).unwrap();
        assert_eq!(tree.attribute(t, "xml:space"), Some("preserve"));
    }

    #[test]
    fn test_entities_decoded() {
        let xml = format!(
            r#"<w:t xmlns:w="{}">a &amp; b &lt;c&gt; &#65;&#x42;</w:t>"#,
            W
        );
        let tree = XmlTree::parse(&xml).unwrap();
        assert_eq!(tree.text(tree.root().unwrap()), "a & b <c> AB");
    }

    #[test]
    fn test_parse_errors() {
        assert!(XmlTree::parse("").is_err());
        assert!(XmlTree::parse("<a><b></a>").is_err());
        assert!(matches!(
            XmlTree::parse("<q:a/>"),
            Err(OoxmlError::UnknownPrefix(_))
        ));
        assert!(XmlTree::parse("<a/><b/>").is_err());
    }

    #[test]
    fn test_unknown_namespace_prefix_remembered() {
        let tree = XmlTree::parse(r#"<v:shape xmlns:v="urn:schemas-microsoft-com:vml"/>"#).unwrap();
        assert_eq!(tree.prefix_hint("urn:schemas-microsoft-com:vml"), Some("v"));
    }
}
