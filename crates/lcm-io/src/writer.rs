//! LCModel raw artifact rendering and writing.

use std::fs;
use std::io;
use std::path::Path;

use lcm_core::format::{field13, DEFAULT_SEQUENCE, FMTDAT};
use num_complex::Complex64;

/// Subject identifier written when encoding in-memory data, where no
/// real identifier exists. An acquisition-tool default, not computed.
pub const PLACEHOLDER_SUBJECT_ID: &str = "MR341785 ";

/// Voxel volume constant on the `$NMID` line (acquisition default).
pub const VOLUME: &str = "8.000e+00";

/// Transmitter amplitude constant on the `$NMID` line.
pub const TRAMP: &str = "1.0";

/// Values stamped into the `$SEQPAR` / `$NMID` header blocks.
///
/// The sequence line always carries [`DEFAULT_SEQUENCE`], independent
/// of whatever sequence the acquisition config reports.
#[derive(Debug, Clone)]
pub struct RawHeader {
    pub echo_time: String,
    pub hz_per_ppm: String,
    pub subject_id: String,
}

/// A rendered raw-text artifact, ready to be written to disk.
///
/// Written once per invocation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RawArtifact {
    text: String,
}

impl RawArtifact {
    /// Render the header block plus one fixed-width pair line per
    /// sample.
    ///
    /// The imaginary part of each canonical sample is negated on the
    /// way to disk; the reader applies the same negation coming back,
    /// so `re - i*im` survives the round trip.
    pub fn render(header: &RawHeader, samples: &[Complex64]) -> Self {
        // 30 bytes per pair line, plus the header block.
        let mut text = String::with_capacity(256 + samples.len() * 30);

        text.push_str(&format!(
            " $SEQPAR\n echot= {}\n seq= '{}'\n hzpppm= {}\n $END\n $NMID\n id='{}', fmtdat='{}'\n volume={}\n tramp={}\n $END\n  ",
            header.echo_time, DEFAULT_SEQUENCE, header.hz_per_ppm,
            header.subject_id, FMTDAT, VOLUME, TRAMP,
        ));

        for s in samples {
            text.push_str(&field13(s.re));
            text.push_str("  ");
            text.push_str(&field13(-s.im));
            text.push_str("\n  ");
        }

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Overwrite `path` with the artifact contents. No check for
    /// existing content; direct, non-atomic write.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> RawHeader {
        RawHeader {
            echo_time: "30".to_string(),
            hz_per_ppm: "1.277310e+02".to_string(),
            subject_id: PLACEHOLDER_SUBJECT_ID.to_string(),
        }
    }

    #[test]
    fn test_header_block() {
        let artifact = RawArtifact::render(&header(), &[]);
        let text = artifact.as_str();
        assert!(text.starts_with(" $SEQPAR\n echot= 30\n"));
        assert!(text.contains(" seq= 'PRESS'\n"));
        assert!(text.contains(" hzpppm= 1.277310e+02\n"));
        assert!(text.contains(" $NMID\n id='MR341785 ', fmtdat='(2E15.6)'\n"));
        assert!(text.contains(" volume=8.000e+00\n tramp=1.0\n"));
        assert_eq!(text.matches("$END").count(), 2);
    }

    #[test]
    fn test_pair_line_negates_imaginary() {
        let samples = vec![Complex64::new(1.0, 2.0)];
        let artifact = RawArtifact::render(&header(), &samples);
        assert!(artifact
            .as_str()
            .contains(" 1.000000e+00  -2.000000e+00\n"));
    }

    #[test]
    fn test_pair_line_layout() {
        let samples = vec![Complex64::new(0.5, -0.25), Complex64::new(-1.0, 0.0)];
        let artifact = RawArtifact::render(&header(), &samples);
        let data = artifact.as_str().split("$END").nth(2).unwrap();
        let lines: Vec<&str> = data.lines().skip(1).map(|l| l.trim_end()).collect();
        assert_eq!(lines[0].trim_start(), "5.000000e-01   2.500000e-01");
        assert_eq!(lines[1].trim_start(), "-1.000000e+00  -0.000000e+00");
    }
}
