/// Cell merge markers: `<w:gridSpan>` for horizontal merges and `<w:vMerge>`
/// for vertical ones.
use crate::ooxml::docx::enums::VMergeState;
use crate::ooxml::error::Result;
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{OptionalAttribute, RequiredAttribute, define_element};

define_element!(
    /// `<w:gridSpan>`, the number of grid columns a cell occupies.
    GridSpan,
    "w:gridSpan"
);

define_element!(
    /// `<w:vMerge>`, marks a cell as part of a vertical merge.
    VMerge,
    "w:vMerge"
);

impl GridSpan {
    const VAL: RequiredAttribute<GridSpan, u32> = RequiredAttribute::new("w:val");

    pub fn val(self, tree: &XmlTree) -> Result<u32> {
        Self::VAL.get(tree, self)
    }

    pub fn set_val(self, tree: &mut XmlTree, value: u32) {
        Self::VAL.set(tree, self, value);
    }
}

impl VMerge {
    // Presence of the element without `w:val` means the merge continues.
    const VAL: OptionalAttribute<VMerge, VMergeState> =
        OptionalAttribute::with_default("w:val", VMergeState::Continue);

    pub fn val(self, tree: &XmlTree) -> Result<VMergeState> {
        Ok(Self::VAL.get(tree, self)?.unwrap_or_default())
    }

    /// Set the merge state. `Continue` is written by omitting `w:val`.
    pub fn set_val(self, tree: &mut XmlTree, value: VMergeState) {
        Self::VAL.set(tree, self, Some(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::ns::W_NS;
    use crate::ooxml::oxml::xmlchemy::Element;

    fn parse<T: Element>(xml: &str) -> (XmlTree, T) {
        let tree = XmlTree::parse(&xml.replace("W_NS", W_NS)).unwrap();
        let el = T::cast(&tree, tree.root().unwrap()).unwrap();
        (tree, el)
    }

    #[test]
    fn test_v_merge_default_continue() {
        let (tree, v_merge) = parse::<VMerge>(r#"<w:vMerge xmlns:w="W_NS"/>"#);
        assert_eq!(v_merge.val(&tree), Ok(VMergeState::Continue));
    }

    #[test]
    fn test_v_merge_explicit_values() {
        let (mut tree, v_merge) = parse::<VMerge>(r#"<w:vMerge xmlns:w="W_NS" w:val="restart"/>"#);
        assert_eq!(v_merge.val(&tree), Ok(VMergeState::Restart));

        v_merge.set_val(&mut tree, VMergeState::Continue);
        assert_eq!(tree.attribute(v_merge.node(), "w:val"), None);
        assert_eq!(v_merge.val(&tree), Ok(VMergeState::Continue));
    }

    #[test]
    fn test_grid_span_val() {
        let (mut tree, span) = parse::<GridSpan>(r#"<w:gridSpan xmlns:w="W_NS" w:val="3"/>"#);
        assert_eq!(span.val(&tree), Ok(3));
        span.set_val(&mut tree, 2);
        assert_eq!(tree.attribute(span.node(), "w:val"), Some("2"));
    }
}
