//! Output path resolution for a fitting run.

use std::path::{Path, PathBuf};

/// Artifact paths derived from one input stem.
///
/// Every file a run touches shares the stem of the input (or of the
/// configured override path): `<stem>.raw`, `<stem>.control`,
/// `<stem>.ps`, `<stem>.csv`, `<stem>.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub raw: PathBuf,
    pub control: PathBuf,
    pub ps: PathBuf,
    pub csv: PathBuf,
    pub pdf: PathBuf,
    /// Stem file name, used as the control-file title.
    pub title: String,
}

impl ResolvedPaths {
    /// Derive artifact paths by dropping the input's final extension.
    pub fn from_input(input: &Path) -> Self {
        let stem = input.with_extension("");
        let title = stem
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            raw: stem.with_extension("raw"),
            control: stem.with_extension("control"),
            ps: stem.with_extension("ps"),
            csv: stem.with_extension("csv"),
            pdf: stem.with_extension("pdf"),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let paths = ResolvedPaths::from_input(Path::new("/data/scans/out0222.rda"));
        assert_eq!(paths.raw, Path::new("/data/scans/out0222.raw"));
        assert_eq!(paths.control, Path::new("/data/scans/out0222.control"));
        assert_eq!(paths.ps, Path::new("/data/scans/out0222.ps"));
        assert_eq!(paths.csv, Path::new("/data/scans/out0222.csv"));
        assert_eq!(paths.pdf, Path::new("/data/scans/out0222.pdf"));
        assert_eq!(paths.title, "out0222");
    }

    #[test]
    fn test_extensionless_input() {
        let paths = ResolvedPaths::from_input(Path::new("scan"));
        assert_eq!(paths.raw, Path::new("scan.raw"));
        assert_eq!(paths.title, "scan");
    }
}
