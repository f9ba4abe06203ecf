//! Acquisition configuration carried through every decode/encode call.

use std::path::PathBuf;

/// Acquisition parameters for one spectroscopy dataset.
///
/// Numeric fields hold the exact text that will be stamped into the
/// raw and control headers; nothing is validated at assignment time.
/// A malformed number surfaces as a `NumericParse` failure in whatever
/// decoder eventually consumes it.
///
/// Decoders never mutate a caller's config: they clone it, overwrite
/// the fields they discovered, and return the merged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionConfig {
    /// Echo time in milliseconds.
    pub echo_time: String,
    /// Resonance frequency in Hz per ppm.
    pub hz_per_ppm: String,
    /// Number of complex samples.
    pub sample_count: String,
    /// Start of the fitted ppm window.
    pub ppm_start: String,
    /// End of the fitted ppm window.
    pub ppm_end: String,
    /// Dwell time in seconds.
    pub dwell_time: String,
    /// Magnetic field strength in Tesla.
    pub field_strength: String,
    /// Pulse sequence name.
    pub sequence: String,
    /// Where to write the raw artifact instead of beside the input.
    pub raw_override: Option<PathBuf>,
}

impl Default for AcquisitionConfig {
    /// Defaults for a 3 T PRESS acquisition, matching what LCModel
    /// users typically run when no header is available.
    fn default() -> Self {
        Self {
            echo_time: "30".to_string(),
            hz_per_ppm: "1.27731e+02".to_string(),
            sample_count: "2048".to_string(),
            ppm_start: "4.0".to_string(),
            ppm_end: "0.2".to_string(),
            dwell_time: "2.500e-04".to_string(),
            field_strength: "3.0".to_string(),
            sequence: "PRESS".to_string(),
            raw_override: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AcquisitionConfig::default();
        assert_eq!(cfg.echo_time, "30");
        assert_eq!(cfg.sequence, "PRESS");
        assert_eq!(cfg.ppm_start, "4.0");
        assert_eq!(cfg.ppm_end, "0.2");
        assert!(cfg.raw_override.is_none());
    }
}
