/// Table row: `<w:tr>`.
use crate::ooxml::docx::table::cell::Tc;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, ZeroOrMore, define_element};

define_element!(
    /// A `<w:tr>` table row.
    Tr,
    "w:tr"
);

impl Tr {
    const TC: ZeroOrMore<Tr, Tc> = ZeroOrMore::new(&[]);

    /// Position of this row among the rows of its table, counted from zero.
    ///
    /// Recomputed on every call, so it stays correct after rows are added
    /// or removed.
    pub fn tr_idx(self, tree: &XmlTree) -> Result<usize> {
        tree.index_among_tagged(self.node(), Self::TAG)
            .ok_or(OoxmlError::Detached(Self::TAG))
    }

    /// Append a new cell holding one empty paragraph.
    pub fn add_tc(self, tree: &mut XmlTree) -> Tc {
        Self::TC.add(tree, self)
    }

    pub fn tc_lst(self, tree: &XmlTree) -> Vec<Tc> {
        Self::TC.list(tree, self)
    }

    pub fn iter_tcs(self, tree: &XmlTree) -> impl Iterator<Item = Tc> + '_ {
        Self::TC.iter(tree, self)
    }

    pub fn cell_count(self, tree: &XmlTree) -> usize {
        Self::TC.count(tree, self)
    }

    /// The cell that starts at grid column `col`.
    ///
    /// Returns `None` when `col` falls inside a horizontally merged cell or
    /// past the last cell of the row.
    pub fn tc_at_grid_col(self, tree: &XmlTree, col: usize) -> Result<Option<Tc>> {
        let mut offset = 0usize;
        for tc in self.iter_tcs(tree) {
            if offset == col {
                return Ok(Some(tc));
            }
            offset += tc.grid_span(tree)? as usize;
            if offset > col {
                break;
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::ns::W_NS;

    #[test]
    fn test_tr_idx_tracks_removal() {
        let mut tree = XmlTree::new();
        let tbl = tree.create_element("w:tbl");
        let r0 = Tr::create(&mut tree);
        let r1 = Tr::create(&mut tree);
        tree.append_child(tbl, r0.node()).unwrap();
        tree.append_child(tbl, r1.node()).unwrap();
        assert_eq!(r0.tr_idx(&tree), Ok(0));
        assert_eq!(r1.tr_idx(&tree), Ok(1));

        tree.remove(r0.node());
        assert_eq!(r1.tr_idx(&tree), Ok(0));
        assert_eq!(r0.tr_idx(&tree), Err(OoxmlError::Detached("w:tr")));
    }

    #[test]
    fn test_add_tc_appends() {
        let mut tree = XmlTree::new();
        let tr = Tr::create(&mut tree);
        let first = tr.add_tc(&mut tree);
        let second = tr.add_tc(&mut tree);
        assert_eq!(tr.tc_lst(&tree), vec![first, second]);
        assert_eq!(tr.cell_count(&tree), 2);
        assert_eq!(second.p_lst(&tree).len(), 1);
    }

    #[test]
    fn test_tc_at_grid_col_skips_spans() {
        let xml = format!(
            r#"<w:tr xmlns:w="{}"><w:tc><w:p/></w:tc><w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p/></w:tc><w:tc><w:p/></w:tc></w:tr>"#,
            W_NS
        );
        let tree = XmlTree::parse(&xml).unwrap();
        let tr = Tr::cast(&tree, tree.root().unwrap()).unwrap();
        let cells = tr.tc_lst(&tree);
        assert_eq!(tr.tc_at_grid_col(&tree, 0), Ok(Some(cells[0])));
        assert_eq!(tr.tc_at_grid_col(&tree, 1), Ok(Some(cells[1])));
        assert_eq!(tr.tc_at_grid_col(&tree, 2), Ok(None));
        assert_eq!(tr.tc_at_grid_col(&tree, 3), Ok(Some(cells[2])));
        assert_eq!(tr.tc_at_grid_col(&tree, 4), Ok(None));
    }
}
