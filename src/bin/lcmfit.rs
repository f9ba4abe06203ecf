//! lcmfit — run the full LCModel fitting pipeline on an RDA or raw input.

use clap::Parser;
use std::path::{Path, PathBuf};

use lcm_core::AcquisitionConfig;
use lcm_fit::{clean_temp, prepare_file, run_fit, Ghostscript, LcModelBinary};

#[derive(Parser)]
#[command(
    name = "lcmfit",
    version,
    about = "Convert an MRS acquisition and fit it with LCModel"
)]
struct Cli {
    /// Input .rda or .raw file
    #[arg(short, long)]
    r#in: String,

    /// Basis set file for the fit
    #[arg(short, long)]
    basis: String,

    /// Echo time override (ms)
    #[arg(long)]
    echot: Option<String>,

    /// Write the raw artifact (and derived outputs) at this path
    /// instead of beside the input
    #[arg(long)]
    out: Option<String>,

    /// Path to the lcmodel executable (default: auto-detect)
    #[arg(long)]
    lcmodel: Option<String>,

    /// Path to the Ghostscript executable
    #[arg(long, default_value = "gs")]
    gs: String,

    /// Remove intermediate control/raw/ps/csv files afterwards
    #[arg(long, default_value_t = false)]
    clean: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    log::info!("lcmfit v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AcquisitionConfig::default();
    if let Some(echot) = cli.echot {
        config.echo_time = echot;
    }
    if let Some(out) = cli.out {
        config.raw_override = Some(PathBuf::from(out));
    }

    let job = prepare_file(Path::new(&cli.r#in), Path::new(&cli.basis), &config)?;
    log::info!(
        "loaded {} ({} samples, TE {} ms)",
        cli.r#in,
        job.config.sample_count,
        job.config.echo_time
    );

    let exe = cli
        .lcmodel
        .map(PathBuf::from)
        .or_else(LcModelBinary::locate)
        .ok_or("lcmodel executable not found; install LCModel or pass --lcmodel")?;

    let tool = LcModelBinary::new(exe);
    let renderer = Ghostscript::new(PathBuf::from(cli.gs));
    run_fit(&job, &tool, &renderer)?;

    log::info!("report: {}", job.paths.pdf.display());

    if cli.clean {
        clean_temp(&job.paths);
    }

    Ok(())
}
