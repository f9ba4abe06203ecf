//! End-to-end orchestration: decode the input, generate the control
//! file, run the fitting tool, render the report.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use lcm_core::{AcquisitionConfig, CanonicalSignal, ConvertError};
use lcm_io::{decode_raw_text, encode, ResolvedPaths, SpectrumInput};

use crate::control::write_control;
use crate::runner::{DocumentRenderer, FittingTool};

#[derive(Error, Debug)]
pub enum FitError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// In-memory data needs a configured raw output path; there is no
    /// input file to derive one from.
    #[error("no raw output path configured for in-memory data")]
    MissingOutputPath,
}

/// Everything a fitting run needs: the merged config, the resolved
/// artifact paths, the canonical signal, and the basis set.
#[derive(Debug)]
pub struct FitJob {
    pub config: AcquisitionConfig,
    pub paths: ResolvedPaths,
    pub signal: CanonicalSignal,
    pub basis: PathBuf,
}

/// Load an acquisition file and stage its raw artifact.
///
/// Only `.rda` and `.raw` inputs are accepted; anything else fails
/// with `UnsupportedFormat` before the file is opened. Artifact paths
/// resolve from the config's `raw_override` when set, otherwise from
/// the input path. For `.raw` inputs whose resolved raw path differs
/// from the input, the file is duplicated byte-for-byte rather than
/// re-rendered.
pub fn prepare_file(
    input: &Path,
    basis: &Path,
    defaults: &AcquisitionConfig,
) -> Result<FitJob, FitError> {
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    let base = defaults.raw_override.as_deref().unwrap_or(input);
    let paths = ResolvedPaths::from_input(base);

    let (signal, config) = match ext.as_str() {
        "rda" => {
            let bytes = fs::read(input)?;
            let result = rda2raw::decode_binary_export(&bytes, defaults)?;
            result.artifact.write_to(&paths.raw)?;
            log::info!("raw artifact: {}", paths.raw.display());
            (result.signal, result.config)
        }
        "raw" => {
            let text = fs::read_to_string(input)?;
            let decoded = decode_raw_text(&text, defaults)?;
            if paths.raw != input {
                fs::copy(input, &paths.raw)?;
                log::info!("raw artifact copied to {}", paths.raw.display());
            }
            decoded
        }
        other => return Err(ConvertError::UnsupportedFormat(other.to_string()).into()),
    };

    Ok(FitJob {
        config,
        paths,
        signal,
        basis: basis.to_path_buf(),
    })
}

/// Encode an in-memory array and stage its raw artifact.
///
/// Requires `config.raw_override`; the artifact is written there
/// unconditionally, overwriting any previous run's output.
pub fn prepare_data(
    input: SpectrumInput<'_>,
    basis: &Path,
    config: &AcquisitionConfig,
) -> Result<FitJob, FitError> {
    let raw_path = config
        .raw_override
        .as_deref()
        .ok_or(FitError::MissingOutputPath)?;
    let paths = ResolvedPaths::from_input(raw_path);

    let (artifact, signal, config) = encode(input, config);
    artifact.write_to(&paths.raw)?;
    log::info!("raw artifact: {}", paths.raw.display());

    Ok(FitJob {
        config,
        paths,
        signal,
        basis: basis.to_path_buf(),
    })
}

/// Write the control file and drive the collaborators.
///
/// A collaborator's non-zero exit is logged and the run continues;
/// artifacts already on disk stay there for inspection. Only spawn
/// and I/O failures abort.
pub fn run_fit(
    job: &FitJob,
    tool: &dyn FittingTool,
    renderer: &dyn DocumentRenderer,
) -> Result<(), FitError> {
    write_control(&job.config, &job.paths, &job.basis)?;
    log::info!("control file: {}", job.paths.control.display());

    let status = tool.run(&job.paths.control)?;
    if !status.success() {
        log::warn!("fitting tool exited with {status}");
    }

    let status = renderer.render(&job.paths.ps, &job.paths.pdf)?;
    if !status.success() {
        log::warn!("document renderer exited with {status}");
    }

    Ok(())
}

/// Best-effort removal of intermediate artifacts. Failures are
/// logged, never escalated.
pub fn clean_temp(paths: &ResolvedPaths) {
    for path in [&paths.control, &paths.raw, &paths.ps, &paths.csv] {
        if let Err(err) = fs::remove_file(path) {
            log::warn!("could not remove {}: {}", path.display(), err);
        }
    }
}
