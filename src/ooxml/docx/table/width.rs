/// Table measurements (`CT_TblWidth`).
///
/// The same complex type backs `<w:tblW>`, `<w:tcW>` and several margin and
/// spacing elements: a magnitude in `w:w` and a unit discriminator in
/// `w:type`. Only the `dxa` unit is an absolute length; asking a `pct`,
/// `auto` or `nil` measurement for a length yields `None`, not an error,
/// because those cannot be resolved without layout context.
use crate::common::unit::Length;
use crate::ooxml::docx::enums::WdWidthType;
use crate::ooxml::error::Result;
use crate::ooxml::oxml::tree::XmlTree;
use crate::ooxml::oxml::xmlchemy::{Element, RequiredAttribute, define_element};

define_element!(
    /// `<w:tblW>`, the preferred width of a table.
    TblW,
    "w:tblW"
);

define_element!(
    /// `<w:tcW>`, the preferred width of a cell.
    TcW,
    "w:tcW"
);

/// Accessors shared by every element of type `CT_TblWidth`.
pub trait TableWidth: Element {
    /// Raw magnitude from `w:w`.
    fn w(self, tree: &XmlTree) -> Result<i64> {
        RequiredAttribute::<Self, i64>::new("w:w").get(tree, self)
    }

    fn set_w(self, tree: &mut XmlTree, value: i64) {
        RequiredAttribute::<Self, i64>::new("w:w").set(tree, self, value);
    }

    /// Unit discriminator from `w:type`.
    fn width_type(self, tree: &XmlTree) -> Result<WdWidthType> {
        RequiredAttribute::<Self, WdWidthType>::new("w:type").get(tree, self)
    }

    fn set_width_type(self, tree: &mut XmlTree, value: WdWidthType) {
        RequiredAttribute::<Self, WdWidthType>::new("w:type").set(tree, self, value);
    }

    /// The absolute length, or `None` unless the type is `dxa`.
    fn width(self, tree: &XmlTree) -> Result<Option<Length>> {
        if self.width_type(tree)? != WdWidthType::Dxa {
            return Ok(None);
        }
        Ok(Some(Length::twips(self.w(tree)?)))
    }

    /// Store `value` as whole twips, forcing the type to `dxa`.
    fn set_width(self, tree: &mut XmlTree, value: Length) {
        self.set_width_type(tree, WdWidthType::Dxa);
        self.set_w(tree, value.as_twips());
    }
}

impl TableWidth for TblW {}
impl TableWidth for TcW {}
