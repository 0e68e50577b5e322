/// Cell properties: `<w:tcPr>`.
///
/// Every child of `<w:tcPr>` is optional, but those present must follow
/// [`TC_PR_SEQ`]. Each accessor below inserts its child immediately before
/// the first present child that comes later in that sequence, so the
/// element stays schema-valid whatever order properties are set in.
use crate::common::unit::Length;
use crate::ooxml::docx::enums::{VMergeState, WdCellVerticalAlignment};
use crate::ooxml::docx::table::merge::{GridSpan, VMerge};
use crate::ooxml::docx::table::width::{TableWidth, TcW};
use crate::ooxml::error::Result;
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{RequiredAttribute, ZeroOrOne, define_element};

/// Schema order of the children of `<w:tcPr>`.
pub const TC_PR_SEQ: &[&str] = &[
    "w:cnfStyle",
    "w:tcW",
    "w:gridSpan",
    "w:hMerge",
    "w:vMerge",
    "w:tcBorders",
    "w:shd",
    "w:noWrap",
    "w:tcMar",
    "w:textDirection",
    "w:tcFitText",
    "w:vAlign",
    "w:hideMark",
    "w:headers",
    "w:cellIns",
    "w:cellDel",
    "w:cellMerge",
    "w:tcPrChange",
];

define_element!(
    /// `<w:tcPr>`, the properties block of a table cell.
    TcPr,
    "w:tcPr"
);

define_element!(
    /// `<w:vAlign>`, vertical alignment of cell content.
    VAlign,
    "w:vAlign"
);

impl VAlign {
    const VAL: RequiredAttribute<VAlign, WdCellVerticalAlignment> =
        RequiredAttribute::new("w:val");

    pub fn val(self, tree: &XmlTree) -> Result<WdCellVerticalAlignment> {
        Self::VAL.get(tree, self)
    }

    pub fn set_val(self, tree: &mut XmlTree, value: WdCellVerticalAlignment) {
        Self::VAL.set(tree, self, value);
    }
}

impl TcPr {
    const TC_W: ZeroOrOne<TcPr, TcW> = ZeroOrOne::new(TC_PR_SEQ.split_at(2).1);
    const GRID_SPAN: ZeroOrOne<TcPr, GridSpan> = ZeroOrOne::new(TC_PR_SEQ.split_at(3).1);
    const V_MERGE: ZeroOrOne<TcPr, VMerge> = ZeroOrOne::new(TC_PR_SEQ.split_at(5).1);
    const V_ALIGN: ZeroOrOne<TcPr, VAlign> = ZeroOrOne::new(TC_PR_SEQ.split_at(12).1);

    pub fn tc_w(self, tree: &XmlTree) -> Option<TcW> {
        Self::TC_W.get(tree, self)
    }

    pub fn get_or_add_tc_w(self, tree: &mut XmlTree) -> TcW {
        Self::TC_W.get_or_add(tree, self)
    }

    pub fn grid_span_element(self, tree: &XmlTree) -> Option<GridSpan> {
        Self::GRID_SPAN.get(tree, self)
    }

    pub fn v_merge(self, tree: &XmlTree) -> Option<VMerge> {
        Self::V_MERGE.get(tree, self)
    }

    /// Number of grid columns the cell spans, 1 when `<w:gridSpan>` is absent.
    pub fn grid_span(self, tree: &XmlTree) -> Result<u32> {
        match self.grid_span_element(tree) {
            Some(span) => span.val(tree),
            None => Ok(1),
        }
    }

    /// Set the span. A span of 1 or less is the default and removes the
    /// element.
    pub fn set_grid_span(self, tree: &mut XmlTree, value: u32) {
        Self::GRID_SPAN.remove(tree, self);
        if value > 1 {
            Self::GRID_SPAN.add(tree, self).set_val(tree, value);
        }
    }

    /// Vertical merge state, `None` when the cell is not vertically merged.
    pub fn v_merge_val(self, tree: &XmlTree) -> Result<Option<VMergeState>> {
        self.v_merge(tree).map(|v_merge| v_merge.val(tree)).transpose()
    }

    pub fn set_v_merge(self, tree: &mut XmlTree, value: Option<VMergeState>) {
        match value {
            Some(state) => Self::V_MERGE.get_or_add(tree, self).set_val(tree, state),
            None => Self::V_MERGE.remove(tree, self),
        }
    }

    /// Preferred cell width when given in `dxa`, otherwise `None`.
    pub fn width(self, tree: &XmlTree) -> Result<Option<Length>> {
        match self.tc_w(tree) {
            Some(tc_w) => tc_w.width(tree),
            None => Ok(None),
        }
    }

    pub fn set_width(self, tree: &mut XmlTree, value: Length) {
        self.get_or_add_tc_w(tree).set_width(tree, value);
    }

    pub fn v_align(self, tree: &XmlTree) -> Result<Option<WdCellVerticalAlignment>> {
        Self::V_ALIGN.get(tree, self).map(|v_align| v_align.val(tree)).transpose()
    }

    pub fn set_v_align(self, tree: &mut XmlTree, value: Option<WdCellVerticalAlignment>) {
        Self::V_ALIGN.remove(tree, self);
        if let Some(value) = value {
            Self::V_ALIGN.add(tree, self).set_val(tree, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::ns::W_NS;
    use crate::ooxml::oxml::xmlchemy::Element;
    use proptest::prelude::*;

    fn locals(tree: &XmlTree, tc_pr: TcPr) -> Vec<String> {
        tree.element_children(tc_pr.node())
            .filter_map(|id| tree.local_name(id).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_defaults_when_empty() {
        let mut tree = XmlTree::new();
        let tc_pr = TcPr::create(&mut tree);
        assert_eq!(tc_pr.grid_span(&tree), Ok(1));
        assert_eq!(tc_pr.v_merge_val(&tree), Ok(None));
        assert_eq!(tc_pr.width(&tree), Ok(None));
        assert_eq!(tc_pr.v_align(&tree), Ok(None));
    }

    #[test]
    fn test_v_merge_inserted_after_grid_span() {
        let mut tree = XmlTree::new();
        let tc_pr = TcPr::create(&mut tree);
        tc_pr.set_v_merge(&mut tree, Some(VMergeState::Restart));
        tc_pr.set_grid_span(&mut tree, 2);
        assert_eq!(locals(&tree, tc_pr), ["gridSpan", "vMerge"]);
        assert_eq!(tc_pr.grid_span(&tree), Ok(2));
        assert_eq!(tc_pr.v_merge_val(&tree), Ok(Some(VMergeState::Restart)));
    }

    #[test]
    fn test_insertion_respects_unmodelled_siblings() {
        let xml = format!(
            r#"<w:tcPr xmlns:w="{}"><w:cnfStyle w:val="100000000000"/><w:shd w:val="clear"/><w:hideMark/></w:tcPr>"#,
            W_NS
        );
        let mut tree = XmlTree::parse(&xml).unwrap();
        let tc_pr = TcPr::cast(&tree, tree.root().unwrap()).unwrap();
        tc_pr.set_v_align(&mut tree, Some(WdCellVerticalAlignment::Center));
        tc_pr.set_v_merge(&mut tree, Some(VMergeState::Continue));
        tc_pr.set_width(&mut tree, Length::twips(2000));
        assert_eq!(
            locals(&tree, tc_pr),
            ["cnfStyle", "tcW", "vMerge", "shd", "vAlign", "hideMark"]
        );
    }

    #[test]
    fn test_clearing_properties() {
        let mut tree = XmlTree::new();
        let tc_pr = TcPr::create(&mut tree);
        tc_pr.set_grid_span(&mut tree, 3);
        tc_pr.set_v_merge(&mut tree, Some(VMergeState::Continue));
        tc_pr.set_grid_span(&mut tree, 1);
        tc_pr.set_v_merge(&mut tree, None);
        assert!(locals(&tree, tc_pr).is_empty());
    }

    #[test]
    fn test_v_merge_continue_written_without_val() {
        let mut tree = XmlTree::new();
        let tc_pr = TcPr::create(&mut tree);
        tc_pr.set_v_merge(&mut tree, Some(VMergeState::Continue));
        let v_merge = tc_pr.v_merge(&tree).unwrap();
        assert!(tree.attributes(v_merge.node()).is_empty());
        assert_eq!(tc_pr.v_merge_val(&tree), Ok(Some(VMergeState::Continue)));
    }

    #[derive(Debug, Clone, Copy)]
    enum Edit {
        Width,
        Span,
        Merge,
        Align,
    }

    fn apply(tree: &mut XmlTree, tc_pr: TcPr, edit: Edit) {
        match edit {
            Edit::Width => tc_pr.set_width(tree, Length::twips(1440)),
            Edit::Span => tc_pr.set_grid_span(tree, 2),
            Edit::Merge => tc_pr.set_v_merge(tree, Some(VMergeState::Restart)),
            Edit::Align => tc_pr.set_v_align(tree, Some(WdCellVerticalAlignment::Bottom)),
        }
    }

    proptest! {
        #[test]
        fn prop_children_follow_schema_sequence(
            edits in prop::collection::vec(
                prop_oneof![
                    Just(Edit::Width),
                    Just(Edit::Span),
                    Just(Edit::Merge),
                    Just(Edit::Align),
                ],
                0..12,
            )
        ) {
            let mut tree = XmlTree::new();
            let tc_pr = TcPr::create(&mut tree);
            for edit in edits {
                apply(&mut tree, tc_pr, edit);
            }

            let positions: Vec<usize> = tree
                .element_children(tc_pr.node())
                .map(|id| {
                    TC_PR_SEQ
                        .iter()
                        .position(|tag| tree.is(id, tag))
                        .expect("child tag listed in sequence")
                })
                .collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
