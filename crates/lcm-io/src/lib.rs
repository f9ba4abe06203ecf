//! LCModel raw-text I/O.
//!
//! Reads and writes the fixed-column `.raw` format the fitting tool
//! consumes, encodes in-memory spectra into it, and resolves the
//! artifact paths derived from one input stem.

pub mod encoder;
pub mod paths;
pub mod reader;
pub mod writer;

pub use encoder::{encode, SpectrumInput};
pub use paths::ResolvedPaths;
pub use reader::decode_raw_text;
pub use writer::{RawArtifact, RawHeader};
