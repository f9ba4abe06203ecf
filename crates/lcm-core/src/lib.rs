//! Core LCModel input types.
//!
//! Everything the format crates share: the acquisition configuration
//! carried through decode/encode calls, the canonical complex signal
//! with its paired time/frequency views, the error taxonomy, and the
//! fixed-column number formatting LCModel expects.

pub mod config;
pub mod error;
pub mod format;
pub mod signal;

pub use config::AcquisitionConfig;
pub use error::ConvertError;
pub use signal::CanonicalSignal;
