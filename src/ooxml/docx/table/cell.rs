/// Table cell: `<w:tc>`.
use crate::common::unit::Length;
use crate::ooxml::docx::enums::VMergeState;
use crate::ooxml::docx::table::tbl::Tbl;
use crate::ooxml::docx::table::tc_pr::TcPr;
use crate::ooxml::docx::text::P;
use crate::ooxml::error::Result;
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, OneOrMore, ZeroOrMore, ZeroOrOne, define_element};
use tracing::trace;

define_element!(
    /// A `<w:tc>` table cell.
    ///
    /// A cell always holds at least one block-level element. New cells are
    /// created with a single empty paragraph.
    Tc,
    "w:tc",
    |tree| Tc::new(tree)
);

/// A block-level element inside a cell, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockItem {
    Paragraph(P),
    Table(Tbl),
}

impl Tc {
    // `w:tcPr` always goes first, ahead of any content.
    const TC_PR: ZeroOrOne<Tc, TcPr> = ZeroOrOne::first();
    const PARAGRAPH: OneOrMore<Tc, P> = OneOrMore::new(&[]);
    const TABLE: ZeroOrMore<Tc, Tbl> = ZeroOrMore::new(&[]);

    /// Create a detached `<w:tc><w:p/></w:tc>`.
    pub fn new(tree: &mut XmlTree) -> Self {
        let tc = Self::wrap(tree.create_element(Self::TAG));
        Self::PARAGRAPH.add(tree, tc);
        tc
    }

    pub fn tc_pr(self, tree: &XmlTree) -> Option<TcPr> {
        Self::TC_PR.get(tree, self)
    }

    pub fn get_or_add_tc_pr(self, tree: &mut XmlTree) -> TcPr {
        Self::TC_PR.get_or_add(tree, self)
    }

    /// Remove every child except `<w:tcPr>`.
    ///
    /// The cell is left without content and fails structural validation
    /// until a paragraph or table is added back.
    pub fn clear_content(self, tree: &mut XmlTree) {
        let tc_pr = self.tc_pr(tree);
        let removed = tree.take_children(self.node());
        if let Some(tc_pr) = tc_pr {
            tree.attach(self.node(), Some(0), tc_pr.node());
        }
        trace!(cell = ?self.node(), removed = removed.len(), "cleared cell content");
    }

    /// Number of grid columns spanned, 1 unless `<w:gridSpan>` says otherwise.
    pub fn grid_span(self, tree: &XmlTree) -> Result<u32> {
        match self.tc_pr(tree) {
            Some(tc_pr) => tc_pr.grid_span(tree),
            None => Ok(1),
        }
    }

    /// Vertical merge state, `None` when the cell is not part of a merge.
    pub fn v_merge(self, tree: &XmlTree) -> Result<Option<VMergeState>> {
        match self.tc_pr(tree) {
            Some(tc_pr) => tc_pr.v_merge_val(tree),
            None => Ok(None),
        }
    }

    /// Preferred width when expressed in twips, otherwise `None`.
    pub fn width(self, tree: &XmlTree) -> Result<Option<Length>> {
        match self.tc_pr(tree) {
            Some(tc_pr) => tc_pr.width(tree),
            None => Ok(None),
        }
    }

    pub fn set_width(self, tree: &mut XmlTree, value: Length) {
        self.get_or_add_tc_pr(tree).set_width(tree, value);
    }

    /// Append an empty paragraph after the existing content.
    pub fn add_p(self, tree: &mut XmlTree) -> P {
        Self::PARAGRAPH.add(tree, self)
    }

    /// Append a new, minimal nested table after the existing content.
    pub fn add_tbl(self, tree: &mut XmlTree) -> Tbl {
        Self::TABLE.add(tree, self)
    }

    pub fn p_lst(self, tree: &XmlTree) -> Vec<P> {
        Self::PARAGRAPH.list(tree, self)
    }

    /// Paragraphs and nested tables in document order.
    pub fn iter_block_items(self, tree: &XmlTree) -> impl Iterator<Item = BlockItem> + '_ {
        tree.element_children(self.node()).filter_map(move |id| {
            if tree.is(id, P::TAG) {
                Some(BlockItem::Paragraph(P::wrap(id)))
            } else if tree.is(id, Tbl::TAG) {
                Some(BlockItem::Table(Tbl::wrap(id)))
            } else {
                None
            }
        })
    }

    /// True when the only content is a single paragraph with nothing in it.
    pub fn is_empty(self, tree: &XmlTree) -> bool {
        let mut items = self.iter_block_items(tree);
        match (items.next(), items.next()) {
            (Some(BlockItem::Paragraph(p)), None) => tree.children(p.node()).is_empty(),
            _ => false,
        }
    }
}
