//! Top-level RDA → LCModel raw conversion.

use byteorder::{ByteOrder, LittleEndian};
use num_complex::Complex64;

use lcm_core::format::exp_notation;
use lcm_core::{AcquisitionConfig, CanonicalSignal, ConvertError};
use lcm_io::{RawArtifact, RawHeader};

use crate::header::*;

/// Bytes per complex sample: two packed f64 values.
const BYTES_PER_SAMPLE: usize = 16;

/// Result of an RDA conversion.
#[derive(Debug)]
pub struct RdaResult {
    /// Rendered raw artifact, ready to write.
    pub artifact: RawArtifact,
    /// Canonical time/frequency signal.
    pub signal: CanonicalSignal,
    /// Defaults merged with everything the header supplied.
    pub config: AcquisitionConfig,
}

fn parse_numeric(key: &str, value: &str) -> Result<f64, ConvertError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConvertError::NumericParse {
            field: key.to_string(),
            value: value.to_string(),
        })
}

/// Decode a Siemens RDA export.
///
/// Pure function of the byte buffer and the supplied defaults. The
/// header's dwell time arrives in microseconds and is converted to
/// seconds; the sample count is always measured from the payload,
/// overriding any caller-supplied value. A trailing partial pair in
/// the payload is ignored.
pub fn decode_binary_export(
    bytes: &[u8],
    defaults: &AcquisitionConfig,
) -> Result<RdaResult, ConvertError> {
    let (header_bytes, payload) = split_sections(bytes)?;
    let fields = parse_header(header_bytes);

    let echo_time = required(&fields, KEY_ECHO_TIME)?.to_string();
    let frequency = parse_numeric(KEY_FREQUENCY, required(&fields, KEY_FREQUENCY)?)?;
    let subject_id = required(&fields, KEY_SUBJECT_ID)?.trim().to_string();
    let dwell_us = parse_numeric(KEY_DWELL_TIME, required(&fields, KEY_DWELL_TIME)?)?;
    let field_strength = required(&fields, KEY_FIELD_STRENGTH)?.to_string();

    let sample_count = payload.len() / BYTES_PER_SAMPLE;

    let mut config = defaults.clone();
    config.echo_time = echo_time;
    config.hz_per_ppm = exp_notation(frequency);
    config.dwell_time = exp_notation(dwell_us / 1_000_000.0);
    config.field_strength = field_strength;
    config.sample_count = sample_count.to_string();

    let time_domain: Vec<Complex64> = payload
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|chunk| {
            let re = LittleEndian::read_f64(&chunk[0..8]);
            let im = LittleEndian::read_f64(&chunk[8..16]);
            Complex64::new(re, -im)
        })
        .collect();

    let signal = CanonicalSignal::from_time_domain(time_domain);
    let artifact = RawArtifact::render(
        &RawHeader {
            echo_time: config.echo_time.clone(),
            hz_per_ppm: config.hz_per_ppm.clone(),
            subject_id,
        },
        &signal.time_domain,
    );

    Ok(RdaResult {
        artifact,
        signal,
        config,
    })
}
