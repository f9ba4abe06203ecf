//! External collaborators: the fitting binary and the PostScript
//! renderer.
//!
//! Both are narrow blocking traits so the rest of the pipeline has no
//! dependency on any particular executable, and tests can substitute
//! fakes.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Blocking handle on the external spectral-fitting binary.
pub trait FittingTool {
    /// Feed the control file to the tool's standard input and wait
    /// for it to exit. No timeout, no cancellation.
    fn run(&self, control_path: &Path) -> io::Result<ExitStatus>;
}

/// Renders the fitting tool's PostScript report into a document.
pub trait DocumentRenderer {
    fn render(&self, ps_path: &Path, out_path: &Path) -> io::Result<ExitStatus>;
}

/// The stock LCModel install (`~/.lcmodel/bin/lcmodel`).
pub struct LcModelBinary {
    exe: PathBuf,
}

impl LcModelBinary {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// Locate the lcmodel executable.
    ///
    /// Checks the conventional per-user install first, then
    /// system-wide locations, then PATH.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let p = PathBuf::from(home).join(".lcmodel/bin/lcmodel");
            if p.exists() {
                return Some(p);
            }
        }

        let system_paths = ["/usr/local/lcmodel/bin/lcmodel", "/opt/lcmodel/bin/lcmodel"];
        for p in &system_paths {
            if Path::new(p).exists() {
                return Some(PathBuf::from(*p));
            }
        }

        if let Ok(output) = Command::new("which").arg("lcmodel").output() {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    return Some(PathBuf::from(path));
                }
            }
        }

        None
    }
}

impl FittingTool for LcModelBinary {
    fn run(&self, control_path: &Path) -> io::Result<ExitStatus> {
        let control = File::open(control_path)?;
        log::info!(
            "running {} < {}",
            self.exe.display(),
            control_path.display()
        );
        Command::new(&self.exe).stdin(Stdio::from(control)).status()
    }
}

/// Ghostscript-backed PostScript → PDF renderer.
pub struct Ghostscript {
    exe: PathBuf,
}

impl Ghostscript {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }
}

impl Default for Ghostscript {
    fn default() -> Self {
        Self::new(PathBuf::from("gs"))
    }
}

impl DocumentRenderer for Ghostscript {
    fn render(&self, ps_path: &Path, out_path: &Path) -> io::Result<ExitStatus> {
        log::info!(
            "rendering {} -> {}",
            ps_path.display(),
            out_path.display()
        );
        Command::new(&self.exe)
            .args(["-dNOPAUSE", "-dBATCH", "-dSAFER", "-sDEVICE=pdfwrite"])
            .arg(format!("-sOutputFile={}", out_path.display()))
            .arg("-f")
            .arg(ps_path)
            .status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_does_not_panic() {
        // Finds something on systems with LCModel installed,
        // otherwise None.
        if let Some(path) = LcModelBinary::locate() {
            assert!(path.exists());
        }
    }
}
