//! LCModel run orchestration.
//!
//! Everything around the format core: control-file generation, the
//! narrow collaborator traits for the external fitting binary and the
//! PostScript renderer, the end-to-end pipeline entry points, and
//! best-effort temp cleanup.

pub mod control;
pub mod pipeline;
pub mod runner;

pub use pipeline::{clean_temp, prepare_data, prepare_file, run_fit, FitError, FitJob};
pub use runner::{DocumentRenderer, FittingTool, Ghostscript, LcModelBinary};
