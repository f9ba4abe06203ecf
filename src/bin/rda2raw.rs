//! rda2raw — Convert Siemens RDA spectroscopy exports to LCModel raw format.

use clap::Parser;
use std::path::{Path, PathBuf};

use lcm_core::AcquisitionConfig;

#[derive(Parser)]
#[command(
    name = "rda2raw",
    version,
    about = "Convert Siemens RDA spectroscopy exports to LCModel raw format"
)]
struct Cli {
    /// Input RDA file
    #[arg(short, long)]
    r#in: String,

    /// Output raw file (defaults to the input stem with .raw)
    #[arg(short, long)]
    out: Option<String>,

    /// Verbose mode
    #[arg(short, long, default_value_t = false)]
    verb: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.r#in)?;
    let result = rda2raw::decode_binary_export(&bytes, &AcquisitionConfig::default())?;

    let out = cli
        .out
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&cli.r#in).with_extension("raw"));
    result.artifact.write_to(&out)?;

    if cli.verb {
        eprintln!("RDA conversion complete.");
        eprintln!("  Samples: {}", result.config.sample_count);
        eprintln!("  Echo time: {} ms", result.config.echo_time);
        eprintln!("  Dwell time: {} s", result.config.dwell_time);
        eprintln!("  Field strength: {} T", result.config.field_strength);
        eprintln!("  Output: {}", out.display());
    }

    Ok(())
}
