//! Table elements of WordprocessingML.
//!
//! A table is an element tree, not a grid of values:
//!
//! ```text
//! w:tbl
//! ├── w:tblPr      properties (style, width, layout, alignment)
//! ├── w:tblGrid    column definitions, one w:gridCol per logical column
//! └── w:tr*        rows
//!     └── w:tc*    cells
//!         ├── w:tcPr?   span, merge, width, vertical alignment
//!         └── (w:p | w:tbl)+
//! ```
//!
//! Each type here is a `Copy` handle onto a node of an [`XmlTree`]; reads
//! take the tree by shared reference and edits by exclusive reference.
//! Optional children are created on first write and always inserted at
//! their schema position.
//!
//! # Example
//!
//! ```
//! use litchi_tables::{Length, Tbl, XmlTree};
//!
//! let mut tree = XmlTree::new();
//! let tbl = Tbl::new(&mut tree);
//! tbl.tbl_grid(&tree)?.add_grid_col(&mut tree);
//! let cell = tbl.add_tr(&mut tree).add_tc(&mut tree);
//! cell.set_width(&mut tree, Length::inches(1.5));
//!
//! assert_eq!(tbl.col_count(&tree)?, 1);
//! assert_eq!(cell.width(&tree)?, Some(Length::twips(2160)));
//! # Ok::<(), litchi_tables::Error>(())
//! ```
//!
//! [`XmlTree`]: crate::ooxml::oxml::XmlTree
pub mod cell;
pub mod grid;
pub mod merge;
pub mod row;
pub mod tbl;
pub mod tbl_pr;
pub mod tc_pr;
pub mod width;

pub use cell::{BlockItem, Tc};
pub use grid::{TblGrid, TblGridCol};
pub use merge::{GridSpan, VMerge};
pub use row::Tr;
pub use tbl::Tbl;
pub use tbl_pr::{Jc, TblLayout, TblPr, TblStyle};
pub use tc_pr::{TcPr, VAlign};
pub use width::{TableWidth, TblW, TcW};
