//! LCModel control-file generation.

use std::fs;
use std::io;
use std::path::Path;

use lcm_core::AcquisitionConfig;
use lcm_io::ResolvedPaths;

/// License key constant LCModel expects in every control file.
const LCMODEL_KEY: &str = "210387309";

/// CSV output selector (`lcsv`): 11 enables the concentration table.
const LCSV: &str = "11";

/// Render the `$LCMODL` control block for one run.
pub fn control_text(config: &AcquisitionConfig, paths: &ResolvedPaths, basis: &Path) -> String {
    format!(
        " $LCMODL\n title= '{title}'\n ppmst= {ppmst}\n ppmend= {ppmend}\n nunfil= {nunfil}\n key= {key}\n hzpppm= {hzpppm}\n filraw= '{filraw}'\n filps= '{filps}'\n filbas= '{filbas}'\n filcsv= '{filcsv}'\n lcsv = {lcsv}\n echot= {echot}\n deltat= {deltat}\n $END",
        title = paths.title,
        ppmst = config.ppm_start,
        ppmend = config.ppm_end,
        nunfil = config.sample_count,
        key = LCMODEL_KEY,
        hzpppm = config.hz_per_ppm,
        filraw = paths.raw.display(),
        filps = paths.ps.display(),
        filbas = basis.display(),
        filcsv = paths.csv.display(),
        lcsv = LCSV,
        echot = config.echo_time,
        deltat = config.dwell_time,
    )
}

/// Write the control file at the resolved `.control` path,
/// overwriting any previous run's file.
pub fn write_control(
    config: &AcquisitionConfig,
    paths: &ResolvedPaths,
    basis: &Path,
) -> io::Result<()> {
    fs::write(&paths.control, control_text(config, paths, basis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_text() {
        let config = AcquisitionConfig::default();
        let paths = ResolvedPaths::from_input(Path::new("/data/out0222.rda"));
        let text = control_text(&config, &paths, Path::new("/opt/basis/press_te30_3t.basis"));

        assert!(text.starts_with(" $LCMODL\n title= 'out0222'\n"));
        assert!(text.contains(" ppmst= 4.0\n ppmend= 0.2\n"));
        assert!(text.contains(" nunfil= 2048\n"));
        assert!(text.contains(" key= 210387309\n"));
        assert!(text.contains(" filraw= '/data/out0222.raw'\n"));
        assert!(text.contains(" filps= '/data/out0222.ps'\n"));
        assert!(text.contains(" filbas= '/opt/basis/press_te30_3t.basis'\n"));
        assert!(text.contains(" filcsv= '/data/out0222.csv'\n"));
        assert!(text.contains(" lcsv = 11\n"));
        assert!(text.ends_with(" $END"));
    }
}
