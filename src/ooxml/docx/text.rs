/// Paragraph element as it appears inside table cells.
///
/// Only the structural `<w:p>` node is modelled here; runs and their text are
/// left to the paragraph layer.
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, define_element};

define_element!(
    /// A `<w:p>` paragraph.
    P,
    "w:p"
);

impl P {
    /// Number of `<w:r>` runs directly inside this paragraph.
    pub fn run_count(self, tree: &XmlTree) -> usize {
        tree.children_tagged(self.node(), "w:r").count()
    }

    /// Concatenated text of all `<w:t>` descendants.
    pub fn text(self, tree: &XmlTree) -> String {
        tree.descendants(self.node())
            .filter(|&id| tree.is(id, "w:t"))
            .map(|id| tree.text(id))
            .collect()
    }
}
