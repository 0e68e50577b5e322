/// Closed dispatch over the element kinds this crate models.
use crate::ooxml::docx::table::{
    GridSpan, Tbl, TblGrid, TblGridCol, TblLayout, TblPr, TblW, Tc, TcPr, TcW, Tr, VMerge,
};
use crate::ooxml::docx::text::P;
use crate::ooxml::oxml::ns::{self, W_NS};
use crate::ooxml::oxml::tree::{NodeId, XmlTree};
use crate::ooxml::oxml::xmlchemy::Element;

/// A node viewed as its concrete element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OxmlElement {
    Tbl(Tbl),
    TblPr(TblPr),
    TblGrid(TblGrid),
    TblGridCol(TblGridCol),
    TblLayout(TblLayout),
    TblW(TblW),
    TcW(TcW),
    Tr(Tr),
    Tc(Tc),
    TcPr(TcPr),
    VMerge(VMerge),
    GridSpan(GridSpan),
    P(P),
    /// Any element or text node without a dedicated type.
    Other(NodeId),
}

impl OxmlElement {
    pub fn from_node(tree: &XmlTree, id: NodeId) -> Self {
        let Some((Some(W_NS), local)) = tree.name(id).map(ns::split_clark) else {
            return Self::Other(id);
        };
        match local {
            "tbl" => Self::Tbl(Tbl::wrap(id)),
            "tblPr" => Self::TblPr(TblPr::wrap(id)),
            "tblGrid" => Self::TblGrid(TblGrid::wrap(id)),
            "gridCol" => Self::TblGridCol(TblGridCol::wrap(id)),
            "tblLayout" => Self::TblLayout(TblLayout::wrap(id)),
            "tblW" => Self::TblW(TblW::wrap(id)),
            "tcW" => Self::TcW(TcW::wrap(id)),
            "tr" => Self::Tr(Tr::wrap(id)),
            "tc" => Self::Tc(Tc::wrap(id)),
            "tcPr" => Self::TcPr(TcPr::wrap(id)),
            "vMerge" => Self::VMerge(VMerge::wrap(id)),
            "gridSpan" => Self::GridSpan(GridSpan::wrap(id)),
            "p" => Self::P(P::wrap(id)),
            _ => Self::Other(id),
        }
    }

    /// The underlying node.
    pub fn node(self) -> NodeId {
        match self {
            Self::Tbl(e) => e.node(),
            Self::TblPr(e) => e.node(),
            Self::TblGrid(e) => e.node(),
            Self::TblGridCol(e) => e.node(),
            Self::TblLayout(e) => e.node(),
            Self::TblW(e) => e.node(),
            Self::TcW(e) => e.node(),
            Self::Tr(e) => e.node(),
            Self::Tc(e) => e.node(),
            Self::TcPr(e) => e.node(),
            Self::VMerge(e) => e.node(),
            Self::GridSpan(e) => e.node(),
            Self::P(e) => e.node(),
            Self::Other(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_tag() {
        let mut tree = XmlTree::new();
        let tbl = Tbl::new(&mut tree);
        let tc = tbl.add_tr(&mut tree).add_tc(&mut tree);
        let kinds: Vec<OxmlElement> = tree
            .descendants(tbl.node())
            .map(|id| OxmlElement::from_node(&tree, id))
            .collect();
        assert_eq!(kinds[0], OxmlElement::Tbl(tbl));
        assert!(matches!(kinds[1], OxmlElement::TblPr(_)));
        assert!(matches!(kinds[2], OxmlElement::TblW(_)));
        assert!(matches!(kinds[3], OxmlElement::TblGrid(_)));
        assert!(matches!(kinds[4], OxmlElement::Tr(_)));
        assert_eq!(kinds[5], OxmlElement::Tc(tc));
        assert!(matches!(kinds[6], OxmlElement::P(_)));
        assert!(kinds.iter().all(|kind| tree.parent(kind.node()).is_some() || kind.node() == tbl.node()));
    }

    #[test]
    fn test_foreign_namespace_is_other() {
        let xml = format!(r#"<w:tc xmlns:w="{}" xmlns:x="urn:x"><x:p/><w:p/></w:tc>"#, W_NS);
        let tree = XmlTree::parse(&xml).unwrap();
        let children = tree.children(tree.root().unwrap()).to_vec();
        assert!(matches!(OxmlElement::from_node(&tree, children[0]), OxmlElement::Other(_)));
        assert!(matches!(OxmlElement::from_node(&tree, children[1]), OxmlElement::P(_)));
    }
}
