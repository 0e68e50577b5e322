/// Enumerations for Word table markup.
///
/// Each enumeration mirrors one restricted string type of the
/// WordprocessingML schema and converts to and from its XML spelling.
use std::fmt;

/// Vertical merge state for table cells.
///
/// In OOXML, vertical merging uses the `<w:vMerge>` element:
/// - `restart`: Starts a new vertical merge (first cell in the merge)
/// - `continue`: Continues a vertical merge from the cell above (no `val`
///   attribute or `val="continue"`)
///
/// A cell without a `<w:vMerge>` element is not part of a vertical merge at
/// all, which accessors report as `None` rather than as a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VMergeState {
    /// Starts a vertical merge (`<w:vMerge w:val="restart"/>`)
    Restart,
    /// Continues a vertical merge from above (`<w:vMerge/>` or `<w:vMerge w:val="continue"/>`)
    Continue,
}

impl VMergeState {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Continue => "continue",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "restart" => Some(Self::Restart),
            "continue" => Some(Self::Continue),
            _ => None,
        }
    }
}

impl Default for VMergeState {
    #[inline]
    fn default() -> Self {
        Self::Continue
    }
}

impl fmt::Display for VMergeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restart => write!(f, "Restart"),
            Self::Continue => write!(f, "Continue"),
        }
    }
}

/// Column-width algorithm of a table (`<w:tblLayout w:type>`).
///
/// # Examples
///
/// ```rust
/// use litchi_tables::ooxml::docx::enums::WdTableLayout;
///
/// assert_eq!(WdTableLayout::Fixed.to_xml(), "fixed");
/// assert_eq!(WdTableLayout::from_xml("autofit"), Some(WdTableLayout::Autofit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WdTableLayout {
    /// Column widths follow cell content.
    Autofit = 0,
    /// Column widths are taken from the grid and preferred widths only.
    Fixed = 1,
}

impl WdTableLayout {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Autofit => "autofit",
            Self::Fixed => "fixed",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "autofit" => Some(Self::Autofit),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }
}

impl Default for WdTableLayout {
    #[inline]
    fn default() -> Self {
        Self::Autofit
    }
}

impl fmt::Display for WdTableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autofit => write!(f, "Autofit"),
            Self::Fixed => write!(f, "Fixed"),
        }
    }
}

/// Unit discriminator of a table measurement (`w:type` on `<w:tblW>`,
/// `<w:tcW>` and friends).
///
/// Only [`WdWidthType::Dxa`] denotes an absolute length; `pct` is in
/// fiftieths of a percent and `auto`/`nil` carry no magnitude at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WdWidthType {
    /// Width determined by the layout algorithm.
    Auto = 0,
    /// Twentieths of a point.
    Dxa = 1,
    /// Zero width.
    Nil = 2,
    /// Fiftieths of a percent of the available width.
    Pct = 3,
}

impl WdWidthType {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dxa => "dxa",
            Self::Nil => "nil",
            Self::Pct => "pct",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "dxa" => Some(Self::Dxa),
            "nil" => Some(Self::Nil),
            "pct" => Some(Self::Pct),
            _ => None,
        }
    }
}

impl fmt::Display for WdWidthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Horizontal alignment of a table within the text column (`<w:jc>` in
/// `<w:tblPr>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WdTableAlignment {
    Left = 0,
    Center = 1,
    Right = 2,
    /// Leading edge, honouring bidirectional layout.
    Start = 3,
    /// Trailing edge, honouring bidirectional layout.
    End = 4,
}

impl WdTableAlignment {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Start => "start",
            Self::End => "end",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for WdTableAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Vertical alignment of content within a cell (`<w:vAlign>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WdCellVerticalAlignment {
    Top = 0,
    Center = 1,
    Bottom = 2,
    /// Content is justified between the top and bottom edges.
    Both = 3,
}

impl WdCellVerticalAlignment {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Both => "both",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

impl fmt::Display for WdCellVerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}
