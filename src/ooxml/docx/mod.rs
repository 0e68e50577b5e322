/// WordprocessingML element types.
///
/// - `table`: tables, rows, cells and their property blocks
/// - `text`: the paragraph element that fills table cells
/// - `enums`: restricted attribute values
/// - `element`: dispatch from a raw node to its concrete element type
pub mod element;
pub mod enums;
pub mod table;
pub mod text;

pub use element::OxmlElement;
pub use enums::{VMergeState, WdCellVerticalAlignment, WdTableAlignment, WdTableLayout, WdWidthType};
pub use table::{BlockItem, Tbl, TblGrid, TblGridCol, TblPr, Tc, TcPr, Tr};
pub use text::P;
