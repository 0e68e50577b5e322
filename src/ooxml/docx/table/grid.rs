/// Table grid: `<w:tblGrid>` and its `<w:gridCol>` column definitions.
///
/// The grid, not the cells of any row, defines how many logical columns a
/// table has.
use crate::common::unit::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, OptionalAttribute, ZeroOrMore, define_element};

define_element!(
    /// `<w:tblGrid>`, child of `<w:tbl>`.
    TblGrid,
    "w:tblGrid"
);

define_element!(
    /// `<w:gridCol>`, one column of the table grid.
    TblGridCol,
    "w:gridCol"
);

impl TblGrid {
    const GRID_COL: ZeroOrMore<TblGrid, TblGridCol> = ZeroOrMore::new(&["w:tblGridChange"]);

    pub fn grid_col_lst(self, tree: &XmlTree) -> Vec<TblGridCol> {
        Self::GRID_COL.list(tree, self)
    }

    pub fn iter_grid_cols(self, tree: &XmlTree) -> impl Iterator<Item = TblGridCol> + '_ {
        Self::GRID_COL.iter(tree, self)
    }

    /// Number of `<w:gridCol>` children.
    pub fn col_count(self, tree: &XmlTree) -> usize {
        Self::GRID_COL.count(tree, self)
    }

    /// Append a column definition, ahead of any `<w:tblGridChange>`.
    pub fn add_grid_col(self, tree: &mut XmlTree) -> TblGridCol {
        Self::GRID_COL.add(tree, self)
    }
}

impl TblGridCol {
    const W: OptionalAttribute<TblGridCol, Length> = OptionalAttribute::new("w:w");

    /// Column width, if specified.
    pub fn w(self, tree: &XmlTree) -> Result<Option<Length>> {
        Self::W.get(tree, self)
    }

    /// Set or clear the column width. Written as whole twips.
    ///
    /// `ST_TwipsMeasure` is unsigned, so a negative width is refused and the
    /// attribute is left as it was.
    pub fn set_w(self, tree: &mut XmlTree, value: Option<Length>) -> Result<()> {
        if let Some(width) = value.filter(|width| width.as_twips() < 0) {
            return Err(OoxmlError::InvalidAttributeValue {
                attribute: "w:w",
                value: width.as_twips().to_string(),
                expected: "a non-negative twips measure",
            });
        }
        Self::W.set(tree, self, value);
        Ok(())
    }

    /// Position of this column within its grid, counted from zero.
    ///
    /// Computed by scanning the sibling columns on each call.
    pub fn grid_col_idx(self, tree: &XmlTree) -> Result<usize> {
        tree.index_among_tagged(self.node(), Self::TAG)
            .ok_or(OoxmlError::Detached(Self::TAG))
    }
}
