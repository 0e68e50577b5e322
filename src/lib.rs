//! Litchi Tables - the WordprocessingML table object model
//!
//! This library models the XML elements that make up a Word table
//! (`w:tbl`, `w:tblPr`, `w:tblGrid`, `w:tr`, `w:tc`, `w:tcPr` and their
//! children) as typed handles onto an in-memory element tree. It reads and
//! edits table structure while keeping every element in the child order the
//! OOXML schema requires.
//!
//! # Features
//!
//! - **Typed elements**: `Tbl`, `Tr`, `Tc` and friends are `Copy` handles with
//!   schema-aware accessors
//! - **Schema order**: optional children are inserted at their fixed slot,
//!   whatever order they are set in
//! - **Lengths**: widths round-trip through EMU with twip precision
//! - **Round-trip XML**: parse a `w:tbl` fragment, edit it, write it back
//!
//! # Example - Building a table
//!
//! ```
//! use litchi_tables::{Length, Tbl, VMergeState, XmlTree};
//!
//! # fn main() -> litchi_tables::Result<()> {
//! let mut tree = XmlTree::new();
//! let tbl = Tbl::new(&mut tree);
//! let grid = tbl.tbl_grid(&tree)?;
//! for _ in 0..2 {
//!     grid.add_grid_col(&mut tree).set_w(&mut tree, Some(Length::inches(1.0)))?;
//! }
//!
//! for _ in 0..2 {
//!     let tr = tbl.add_tr(&mut tree);
//!     tr.add_tc(&mut tree);
//!     tr.add_tc(&mut tree);
//! }
//!
//! let first = tbl.iter_tcs(&tree).next().unwrap();
//! first.get_or_add_tc_pr(&mut tree).set_v_merge(&mut tree, Some(VMergeState::Restart));
//!
//! assert_eq!(tbl.col_count(&tree)?, 2);
//! assert_eq!(tbl.iter_tcs(&tree).count(), 4);
//! assert_eq!(first.v_merge(&tree)?, Some(VMergeState::Restart));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading existing XML
//!
//! ```
//! use litchi_tables::{Element, Tbl, XmlTree};
//!
//! # fn main() -> litchi_tables::Result<()> {
//! let xml = r#"<w:tbl xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:tblPr><w:tblLayout w:type="fixed"/></w:tblPr>
//!   <w:tblGrid><w:gridCol w:w="2880"/></w:tblGrid>
//!   <w:tr><w:tc><w:p/></w:tc></w:tr>
//! </w:tbl>"#;
//!
//! let tree = XmlTree::parse(xml)?;
//! let tbl = Tbl::cast(&tree, tree.root().unwrap())?;
//! assert!(!tbl.tbl_pr(&tree)?.autofit(&tree)?);
//! assert_eq!(tbl.row_count(&tree), 1);
//! # Ok(())
//! # }
//! ```

/// Shared value types: lengths and XML text helpers
pub mod common;

/// OOXML element tree and WordprocessingML table elements
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Length, LengthUnit};
pub use ooxml::docx::{
    BlockItem, OxmlElement, P, Tbl, TblGrid, TblGridCol, TblPr, Tc, TcPr, Tr, VMergeState,
    WdCellVerticalAlignment, WdTableAlignment, WdTableLayout, WdWidthType,
};
pub use ooxml::error::{OoxmlError as Error, Result};
pub use ooxml::oxml::{Element, NodeId, SerializeOptions, XmlTree};
