//! Common types shared across the crate.
//!
//! - `unit`: absolute lengths and their conversions between EMU and twips
//! - `xml`: escaping and reference resolution for XML text
pub mod unit;
pub mod xml;

pub use unit::{Length, LengthUnit};
