/// Table-wide properties: `<w:tblPr>`.
use crate::common::unit::Length;
use crate::ooxml::docx::enums::{WdTableAlignment, WdTableLayout};
use crate::ooxml::docx::table::width::{TableWidth, TblW};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{
    Element, OptionalAttribute, RequiredAttribute, ZeroOrOne, define_element,
};

/// Schema order of the children of `<w:tblPr>`.
const TBL_PR_SEQ: &[&str] = &[
    "w:tblStyle",
    "w:tblpPr",
    "w:tblOverlap",
    "w:bidiVisual",
    "w:tblStyleRowBandSize",
    "w:tblStyleColBandSize",
    "w:tblW",
    "w:jc",
    "w:tblCellSpacing",
    "w:tblInd",
    "w:tblBorders",
    "w:shd",
    "w:tblLayout",
    "w:tblCellMar",
    "w:tblLook",
    "w:tblCaption",
    "w:tblDescription",
    "w:tblPrChange",
];

define_element!(
    /// `<w:tblPr>`, child of `<w:tbl>`, holding style, width, alignment and
    /// layout settings.
    TblPr,
    "w:tblPr"
);

define_element!(
    /// `<w:tblStyle>`, reference to a table style by id.
    TblStyle,
    "w:tblStyle"
);

define_element!(
    /// `<w:tblLayout>`, fixed or content-driven column widths.
    TblLayout,
    "w:tblLayout"
);

define_element!(
    /// `<w:jc>` inside `<w:tblPr>`, horizontal placement of the table.
    Jc,
    "w:jc"
);

impl TblStyle {
    pub fn val(self, tree: &XmlTree) -> Result<&str> {
        tree.attribute(self.node(), "w:val")
            .ok_or(OoxmlError::MissingAttribute {
                element: Self::TAG,
                attribute: "w:val",
            })
    }

    pub fn set_val(self, tree: &mut XmlTree, value: &str) {
        tree.set_attribute(self.node(), "w:val", value);
    }
}

impl TblLayout {
    const TYPE: OptionalAttribute<TblLayout, WdTableLayout> = OptionalAttribute::new("w:type");

    pub fn layout_type(self, tree: &XmlTree) -> Result<Option<WdTableLayout>> {
        Self::TYPE.get(tree, self)
    }

    pub fn set_layout_type(self, tree: &mut XmlTree, value: Option<WdTableLayout>) {
        Self::TYPE.set(tree, self, value);
    }
}

impl Jc {
    const VAL: RequiredAttribute<Jc, WdTableAlignment> = RequiredAttribute::new("w:val");

    pub fn val(self, tree: &XmlTree) -> Result<WdTableAlignment> {
        Self::VAL.get(tree, self)
    }

    pub fn set_val(self, tree: &mut XmlTree, value: WdTableAlignment) {
        Self::VAL.set(tree, self, value);
    }
}

impl TblPr {
    const TBL_STYLE: ZeroOrOne<TblPr, TblStyle> = ZeroOrOne::new(TBL_PR_SEQ.split_at(1).1);
    const TBL_W: ZeroOrOne<TblPr, TblW> = ZeroOrOne::new(TBL_PR_SEQ.split_at(7).1);
    const JC: ZeroOrOne<TblPr, Jc> = ZeroOrOne::new(TBL_PR_SEQ.split_at(8).1);
    const TBL_LAYOUT: ZeroOrOne<TblPr, TblLayout> = ZeroOrOne::new(TBL_PR_SEQ.split_at(13).1);

    pub fn tbl_style(self, tree: &XmlTree) -> Option<TblStyle> {
        Self::TBL_STYLE.get(tree, self)
    }

    /// Style id from `w:tblStyle/@w:val`, `None` when no style is applied.
    pub fn style(self, tree: &XmlTree) -> Result<Option<&str>> {
        self.tbl_style(tree).map(|style| style.val(tree)).transpose()
    }

    /// Replace the style reference; `None` removes it.
    pub fn set_style(self, tree: &mut XmlTree, value: Option<&str>) {
        Self::TBL_STYLE.remove(tree, self);
        if let Some(value) = value {
            let style = Self::TBL_STYLE.add(tree, self);
            style.set_val(tree, value);
        }
    }

    pub fn tbl_layout(self, tree: &XmlTree) -> Option<TblLayout> {
        Self::TBL_LAYOUT.get(tree, self)
    }

    /// `false` only when `w:tblLayout/@w:type` is `fixed`.
    pub fn autofit(self, tree: &XmlTree) -> Result<bool> {
        let layout = match self.tbl_layout(tree) {
            Some(layout) => layout.layout_type(tree)?,
            None => None,
        };
        Ok(layout != Some(WdTableLayout::Fixed))
    }

    /// Write the layout mode into a single `<w:tblLayout>` child.
    pub fn set_autofit(self, tree: &mut XmlTree, value: bool) {
        let layout = Self::TBL_LAYOUT.get_or_add(tree, self);
        let kind = if value {
            WdTableLayout::Autofit
        } else {
            WdTableLayout::Fixed
        };
        layout.set_layout_type(tree, Some(kind));
    }

    pub fn tbl_w(self, tree: &XmlTree) -> Option<TblW> {
        Self::TBL_W.get(tree, self)
    }

    pub fn get_or_add_tbl_w(self, tree: &mut XmlTree) -> TblW {
        Self::TBL_W.get_or_add(tree, self)
    }

    /// Preferred table width when given in `dxa`, otherwise `None`.
    pub fn width(self, tree: &XmlTree) -> Result<Option<Length>> {
        match self.tbl_w(tree) {
            Some(tbl_w) => tbl_w.width(tree),
            None => Ok(None),
        }
    }

    pub fn set_width(self, tree: &mut XmlTree, value: Length) {
        self.get_or_add_tbl_w(tree).set_width(tree, value);
    }

    /// Horizontal alignment of the table, `None` when not specified.
    pub fn alignment(self, tree: &XmlTree) -> Result<Option<WdTableAlignment>> {
        Self::JC.get(tree, self).map(|jc| jc.val(tree)).transpose()
    }

    pub fn set_alignment(self, tree: &mut XmlTree, value: Option<WdTableAlignment>) {
        Self::JC.remove(tree, self);
        if let Some(value) = value {
            Self::JC.add(tree, self).set_val(tree, value);
        }
    }
}
