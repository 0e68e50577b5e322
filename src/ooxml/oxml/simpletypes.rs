//! Value spaces of the XML Schema simple types used by table attributes.
//!
//! Every attribute descriptor in [`crate::ooxml::oxml::xmlchemy`] converts
//! through [`SimpleType`], so a value outside the schema's value space is
//! reported as [`crate::ooxml::error::OoxmlError::InvalidAttributeValue`]
//! instead of being silently coerced.
use crate::common::unit::Length;
use crate::ooxml::docx::enums::{
    VMergeState, WdCellVerticalAlignment, WdTableAlignment, WdTableLayout, WdWidthType,
};
use std::borrow::Cow;

/// A type with a textual XML representation and a restricted value space.
pub trait SimpleType: Copy + PartialEq {
    /// Description of the accepted values, for error messages.
    const EXPECTED: &'static str;

    /// Parse an attribute value, `None` when outside the value space.
    fn from_xml(value: &str) -> Option<Self>;

    /// Attribute text for this value.
    fn to_xml(&self) -> Cow<'static, str>;
}

/// `xsd:int` and `ST_DecimalNumber`.
impl SimpleType for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_xml(value: &str) -> Option<Self> {
        atoi_simd::parse::<i64>(value.trim().as_bytes()).ok()
    }

    fn to_xml(&self) -> Cow<'static, str> {
        Cow::Owned(itoa::Buffer::new().format(*self).to_string())
    }
}

/// Non-negative `ST_DecimalNumber`, such as a grid span.
impl SimpleType for u32 {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_xml(value: &str) -> Option<Self> {
        atoi_simd::parse::<u32>(value.trim().as_bytes()).ok()
    }

    fn to_xml(&self) -> Cow<'static, str> {
        Cow::Owned(itoa::Buffer::new().format(*self).to_string())
    }
}

/// `ST_TwipsMeasure`: an unsigned twips count or a universal measure such as
/// `1.5in`. Always written back as whole twips.
impl SimpleType for Length {
    const EXPECTED: &'static str = "a twips count or a universal measure";

    fn from_xml(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.contains(['i', 'm', 'p']) {
            value.parse().ok()
        } else {
            atoi_simd::parse::<u64>(value.as_bytes())
                .ok()
                .and_then(|twips| i64::try_from(twips).ok())
                .map(Length::twips)
        }
    }

    fn to_xml(&self) -> Cow<'static, str> {
        Cow::Owned(itoa::Buffer::new().format(self.as_twips()).to_string())
    }
}

macro_rules! enum_simple_type {
    ($ty:ty, $expected:literal) => {
        impl SimpleType for $ty {
            const EXPECTED: &'static str = $expected;

            #[inline]
            fn from_xml(value: &str) -> Option<Self> {
                <$ty>::from_xml(value)
            }

            #[inline]
            fn to_xml(&self) -> Cow<'static, str> {
                Cow::Borrowed(<$ty>::to_xml(*self))
            }
        }
    };
}

// ST_Merge
enum_simple_type!(VMergeState, "one of continue, restart");
// ST_TblLayoutType
enum_simple_type!(WdTableLayout, "one of autofit, fixed");
// ST_TblWidth
enum_simple_type!(WdWidthType, "one of auto, dxa, nil, pct");
// ST_JcTable
enum_simple_type!(WdTableAlignment, "one of left, center, right, start, end");
// ST_VerticalJc
enum_simple_type!(WdCellVerticalAlignment, "one of top, center, bottom, both");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        assert_eq!(<i64 as SimpleType>::from_xml("42"), Some(42));
        assert_eq!(<i64 as SimpleType>::from_xml("-7"), Some(-7));
        assert_eq!(<i64 as SimpleType>::from_xml("4.5"), None);
        assert_eq!(<i64 as SimpleType>::from_xml(""), None);
        assert_eq!(SimpleType::to_xml(&-12i64), "-12");
        assert_eq!(<u32 as SimpleType>::from_xml("3"), Some(3));
        assert_eq!(<u32 as SimpleType>::from_xml("-3"), None);
    }

    #[test]
    fn test_twips_measure() {
        assert_eq!(<Length as SimpleType>::from_xml("1440"), Some(Length::inches(1.0)));
        assert_eq!(<Length as SimpleType>::from_xml("1in"), Some(Length::inches(1.0)));
        assert_eq!(<Length as SimpleType>::from_xml("-5"), None);
        assert_eq!(SimpleType::to_xml(&Length::inches(0.5)), "720");
    }

    #[test]
    fn test_enum_bridge() {
        assert_eq!(
            <WdWidthType as SimpleType>::from_xml("pct"),
            Some(WdWidthType::Pct)
        );
        assert_eq!(SimpleType::to_xml(&VMergeState::Restart), "restart");
        assert_eq!(<WdTableLayout as SimpleType>::from_xml("bogus"), None);
    }
}
