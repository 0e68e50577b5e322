//! Unit conversion utilities.
//!
//! WordprocessingML stores table measurements as integer twips (twentieths of
//! a point, the `dxa` unit), while drawing markup uses English Metric Units.
//! [`Length`] keeps EMU as its canonical integer representation so that values
//! from either source compare exactly.

use crate::ooxml::error::{OoxmlError, Result};
use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_TWIP: i64 = 635;

#[inline]
pub const fn twip_to_emu_i64(twips: i64) -> i64 {
    twips.saturating_mul(EMUS_PER_TWIP)
}

#[inline]
pub fn emu_to_twip_i64(emu: i64) -> i64 {
    (emu as f64 / EMUS_PER_TWIP as f64).round() as i64
}

/// Units accepted in an `ST_UniversalMeasure` value such as `"1.5in"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Millimeter
    Millimeter,
    /// Centimeter
    Centimeter,
    /// Inch
    Inch,
    /// Point (1/72 inch)
    Point,
    /// Pica (12 points), written `pc`
    Pica,
    /// Pica (12 points), written `pi`
    Pi,
}

impl LengthUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Pica => "pc",
            Self::Pi => "pi",
        }
    }

    /// Number of EMU in one of this unit
    #[inline]
    pub fn emus(&self) -> f64 {
        match self {
            Self::Millimeter => EMUS_PER_MM as f64,
            Self::Centimeter => EMUS_PER_CM as f64,
            Self::Inch => EMUS_PER_INCH as f64,
            Self::Point => EMUS_PER_PT as f64,
            Self::Pica | Self::Pi => (EMUS_PER_PT * 12) as f64,
        }
    }

    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            "in" => Some(Self::Inch),
            "pt" => Some(Self::Point),
            "pc" => Some(Self::Pica),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(s).ok_or_else(|| OoxmlError::InvalidAttributeValue {
            attribute: "unit",
            value: s.to_string(),
            expected: "one of mm, cm, in, pt, pc, pi",
        })
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absolute length, stored as an integer number of EMU.
///
/// # Examples
///
/// ```
/// use litchi_tables::common::unit::Length;
///
/// let width = Length::inches(1.0);
/// assert_eq!(width.as_twips(), 1440);
/// assert_eq!(Length::twips(1440), width);
///
/// let parsed: Length = "2.54cm".parse().unwrap();
/// assert_eq!(parsed, Length::inches(1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(i64);

impl Length {
    /// Length from a raw EMU count
    #[inline]
    pub const fn emu(emu: i64) -> Self {
        Self(emu)
    }

    /// Length from twentieths of a point (the `dxa` unit)
    #[inline]
    pub const fn twips(twips: i64) -> Self {
        Self(twip_to_emu_i64(twips))
    }

    /// Length from points
    #[inline]
    pub fn pt(points: f64) -> Self {
        Self((points * EMUS_PER_PT as f64).round() as i64)
    }

    /// Length from inches
    #[inline]
    pub fn inches(inches: f64) -> Self {
        Self((inches * EMUS_PER_INCH as f64).round() as i64)
    }

    /// Length from centimeters
    #[inline]
    pub fn cm(cm: f64) -> Self {
        Self((cm * EMUS_PER_CM as f64).round() as i64)
    }

    /// Length from millimeters
    #[inline]
    pub fn mm(mm: f64) -> Self {
        Self((mm * EMUS_PER_MM as f64).round() as i64)
    }

    /// Raw EMU value
    #[inline]
    pub const fn as_emu(&self) -> i64 {
        self.0
    }

    /// Value in twips, rounded to the nearest whole twip.
    #[inline]
    pub fn as_twips(&self) -> i64 {
        emu_to_twip_i64(self.0)
    }

    #[inline]
    pub fn as_pt(&self) -> f64 {
        self.0 as f64 / EMUS_PER_PT as f64
    }

    #[inline]
    pub fn as_inches(&self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }

    #[inline]
    pub fn as_cm(&self) -> f64 {
        self.0 as f64 / EMUS_PER_CM as f64
    }

    #[inline]
    pub fn as_mm(&self) -> f64 {
        self.0 as f64 / EMUS_PER_MM as f64
    }

    /// Length from a magnitude in the given unit.
    #[inline]
    pub fn from_unit(value: f64, unit: LengthUnit) -> Self {
        Self((value * unit.emus()).round() as i64)
    }
}

impl FromStr for Length {
    type Err = OoxmlError;

    /// Parse an `ST_UniversalMeasure` such as `"2.5cm"` or `"-12pt"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OoxmlError::InvalidAttributeValue {
            attribute: "measure",
            value: s.to_string(),
            expected: "a universal measure like 1.5in",
        };

        let s = s.trim();
        if s.len() < 3 || !s.is_char_boundary(s.len() - 2) {
            return Err(invalid());
        }
        let (number, unit) = s.split_at(s.len() - 2);
        let unit = LengthUnit::from_str_internal(unit).ok_or_else(invalid)?;
        let value: f64 = fast_float2::parse(number).map_err(|_| invalid())?;
        Ok(Self::from_unit(value, unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}emu", self.0)
    }
}
