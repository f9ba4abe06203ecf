//! Siemens RDA → LCModel raw format converter.
//!
//! The RDA export is an ASCII `Key: Value` header fenced by sentinel
//! lines, followed by packed little-endian double pairs (16 bytes per
//! complex sample).

pub mod convert;
pub mod header;

pub use convert::*;
