//! Structural checks applied before a subtree is written out.
//!
//! Conformant consumers reject a `w:tbl` without its properties or grid and
//! a `w:tc` without a block-level element, even though such XML is
//! well-formed. These are the states that [`crate::ooxml::docx::table::Tc::clear_content`]
//! deliberately leaves behind, so they are caught here rather than written.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::tree::{NodeId, XmlTree};

/// Verify table structure in the subtree rooted at `id`.
pub fn check_structure(tree: &XmlTree, id: NodeId) -> Result<()> {
    for node in tree.descendants(id) {
        if tree.is(node, "w:tc") {
            let has_content = tree
                .element_children(node)
                .any(|child| !tree.is(child, "w:tcPr"));
            if !has_content {
                return Err(OoxmlError::InvalidCellContent);
            }
        } else if tree.is(node, "w:tbl") {
            for child in ["w:tblPr", "w:tblGrid"] {
                if tree.first_child_tagged(node, child).is_none() {
                    return Err(OoxmlError::MissingChild {
                        parent: "w:tbl",
                        child,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_rejected() {
        let mut tree = XmlTree::new();
        let tc = tree.create_element("w:tc");
        let tc_pr = tree.create_element("w:tcPr");
        tree.append_child(tc, tc_pr).unwrap();
        assert_eq!(check_structure(&tree, tc), Err(OoxmlError::InvalidCellContent));

        let p = tree.create_element("w:p");
        tree.append_child(tc, p).unwrap();
        assert_eq!(check_structure(&tree, tc), Ok(()));
    }

    #[test]
    fn test_table_without_grid_rejected() {
        let mut tree = XmlTree::new();
        let tbl = tree.create_element("w:tbl");
        let tbl_pr = tree.create_element("w:tblPr");
        tree.append_child(tbl, tbl_pr).unwrap();
        assert_eq!(
            check_structure(&tree, tbl),
            Err(OoxmlError::MissingChild {
                parent: "w:tbl",
                child: "w:tblGrid"
            })
        );
    }
}
