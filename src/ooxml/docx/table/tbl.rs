/// Table: `<w:tbl>`.
use crate::ooxml::docx::enums::WdWidthType;
use crate::ooxml::docx::table::cell::Tc;
use crate::ooxml::docx::table::grid::TblGrid;
use crate::ooxml::docx::table::row::Tr;
use crate::ooxml::docx::table::tbl_pr::TblPr;
use crate::ooxml::docx::table::width::TableWidth;
use crate::ooxml::error::Result;
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, OneAndOnlyOne, ZeroOrMore, define_element};
use tracing::trace;

define_element!(
    /// A `<w:tbl>` table.
    ///
    /// A table always carries exactly one `<w:tblPr>` followed by exactly
    /// one `<w:tblGrid>`, then its rows in document order.
    Tbl,
    "w:tbl",
    |tree| Tbl::new(tree)
);

impl Tbl {
    const TBL_PR: OneAndOnlyOne<Tbl, TblPr> = OneAndOnlyOne::new();
    const TBL_GRID: OneAndOnlyOne<Tbl, TblGrid> = OneAndOnlyOne::new();
    const TR: ZeroOrMore<Tbl, Tr> = ZeroOrMore::new(&[]);

    /// Create a detached empty table:
    /// `<w:tbl><w:tblPr><w:tblW w:type="auto" w:w="0"/></w:tblPr><w:tblGrid/></w:tbl>`.
    pub fn new(tree: &mut XmlTree) -> Self {
        let tbl = Self::wrap(tree.create_element(Self::TAG));

        let tbl_pr = TblPr::create(tree);
        tree.attach(tbl.node(), None, tbl_pr.node());
        let tbl_w = tbl_pr.get_or_add_tbl_w(tree);
        tbl_w.set_width_type(tree, WdWidthType::Auto);
        tbl_w.set_w(tree, 0);

        let tbl_grid = TblGrid::create(tree);
        tree.attach(tbl.node(), None, tbl_grid.node());

        trace!(table = ?tbl.node(), "created table");
        tbl
    }

    pub fn tbl_pr(self, tree: &XmlTree) -> Result<TblPr> {
        Self::TBL_PR.get(tree, self)
    }

    pub fn tbl_grid(self, tree: &XmlTree) -> Result<TblGrid> {
        Self::TBL_GRID.get(tree, self)
    }

    /// Number of logical columns, as defined by the grid.
    pub fn col_count(self, tree: &XmlTree) -> Result<usize> {
        Ok(self.tbl_grid(tree)?.col_count(tree))
    }

    /// Append an empty row as the last child.
    pub fn add_tr(self, tree: &mut XmlTree) -> Tr {
        Self::TR.add(tree, self)
    }

    pub fn tr_lst(self, tree: &XmlTree) -> Vec<Tr> {
        Self::TR.list(tree, self)
    }

    pub fn iter_trs(self, tree: &XmlTree) -> impl Iterator<Item = Tr> + '_ {
        Self::TR.iter(tree, self)
    }

    pub fn row_count(self, tree: &XmlTree) -> usize {
        Self::TR.count(tree, self)
    }

    pub fn tr_at(self, tree: &XmlTree, idx: usize) -> Option<Tr> {
        self.iter_trs(tree).nth(idx)
    }

    /// Every cell of every row, row by row.
    ///
    /// Merged cells are not collapsed: each `<w:tc>` element is yielded once,
    /// however many grid columns or rows it covers.
    pub fn iter_tcs(self, tree: &XmlTree) -> impl Iterator<Item = Tc> + '_ {
        self.iter_trs(tree).flat_map(move |tr| tr.iter_tcs(tree))
    }
}
