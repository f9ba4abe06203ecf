//! LCModel raw-text reader.

use lcm_core::{AcquisitionConfig, CanonicalSignal, ConvertError};
use num_complex::Complex64;

/// Token closing each header block. The data section starts after the
/// second occurrence.
const END_TOKEN: &str = "$END";

/// Config fields recognized while scanning header lines.
#[derive(Debug, Clone, Copy)]
enum HeaderField {
    EchoTime,
    HzPerPpm,
    Sequence,
    SampleCount,
    DwellTime,
}

/// Substring patterns matched against each header line; patterns are
/// tried in order and the first match wins.
const HEADER_KEYS: &[(&str, HeaderField)] = &[
    ("echot", HeaderField::EchoTime),
    ("hzpppm", HeaderField::HzPerPpm),
    ("seq", HeaderField::Sequence),
    ("NumberOfPoints", HeaderField::SampleCount),
    ("dwellTime", HeaderField::DwellTime),
];

/// Parse a raw-text file into a canonical signal plus the acquisition
/// parameters its header carries.
///
/// The header runs through the second `$END`; everything after it is
/// whitespace-separated numeric pairs, stored on disk with negated
/// imaginary parts (`re - i*im` canonical convention). Header fields
/// absent from the file keep their values from `defaults`; a trailing
/// unpaired token is ignored.
pub fn decode_raw_text(
    text: &str,
    defaults: &AcquisitionConfig,
) -> Result<(CanonicalSignal, AcquisitionConfig), ConvertError> {
    let first = text
        .find(END_TOKEN)
        .ok_or_else(|| ConvertError::MalformedRawText("no $END terminator".to_string()))?;
    let after_first = first + END_TOKEN.len();
    let second = text[after_first..]
        .find(END_TOKEN)
        .ok_or_else(|| ConvertError::MalformedRawText("missing second $END terminator".to_string()))?;
    let boundary = after_first + second + END_TOKEN.len();

    let (header, data) = text.split_at(boundary);

    let mut config = defaults.clone();
    for line in header.lines() {
        let field = HEADER_KEYS
            .iter()
            .find(|(pattern, _)| line.contains(pattern))
            .map(|(_, field)| *field);
        let Some(field) = field else { continue };
        let Some((_, value)) = line.split_once('=') else { continue };
        let value = value
            .trim_matches(|c: char| c.is_whitespace() || c == '\'')
            .to_string();
        match field {
            HeaderField::EchoTime => config.echo_time = value,
            HeaderField::HzPerPpm => config.hz_per_ppm = value,
            HeaderField::Sequence => config.sequence = value,
            HeaderField::SampleCount => config.sample_count = value,
            HeaderField::DwellTime => config.dwell_time = value,
        }
    }

    let mut values = Vec::new();
    for token in data.split_whitespace() {
        let parsed: f64 = token.parse().map_err(|_| ConvertError::NumericParse {
            field: "raw data".to_string(),
            value: token.to_string(),
        })?;
        values.push(parsed);
    }

    let time_domain: Vec<Complex64> = values
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], -pair[1]))
        .collect();

    Ok((CanonicalSignal::from_time_domain(time_domain), config))
}
