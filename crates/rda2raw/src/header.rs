//! RDA header block parsing.

use std::collections::HashMap;

use lcm_core::ConvertError;

/// ASCII sentinel opening the header block.
pub const HEADER_BEGIN: &[u8] = b">>> Begin of header <<<";
/// ASCII sentinel closing the header block.
pub const HEADER_END: &[u8] = b">>> End of header <<<";

/// Separator between a header key and its value.
const KEY_SEPARATOR: &str = ": ";

// Required header keys.
pub const KEY_ECHO_TIME: &str = "TE";
pub const KEY_FREQUENCY: &str = "MRFrequency";
pub const KEY_SUBJECT_ID: &str = "PatientID";
pub const KEY_DWELL_TIME: &str = "DwellTime";
pub const KEY_FIELD_STRENGTH: &str = "MagneticFieldStrength";

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Split an RDA byte buffer into its header text region and the
/// binary payload that follows the closing sentinel.
pub fn split_sections(bytes: &[u8]) -> Result<(&[u8], &[u8]), ConvertError> {
    let begin = find_subslice(bytes, HEADER_BEGIN)
        .ok_or(ConvertError::MissingSentinel(">>> Begin of header <<<"))?;
    let header_start = begin + HEADER_BEGIN.len();
    let end = find_subslice(&bytes[header_start..], HEADER_END)
        .ok_or(ConvertError::MissingSentinel(">>> End of header <<<"))?;

    let header = &bytes[header_start..header_start + end];
    // Skip the sentinel line's own newline, and nothing more: the
    // binary payload may legitimately start with 0x0a/0x0d bytes.
    let payload = match &bytes[header_start + end + HEADER_END.len()..] {
        [b'\r', b'\n', rest @ ..] => rest,
        [b'\n', rest @ ..] => rest,
        other => other,
    };

    Ok((header, payload))
}

/// Decode the header region into key/value pairs.
///
/// One `Key: Value` pair per line; lines without the separator are
/// skipped. Keys are unique in practice; a repeated key keeps the
/// later value.
pub fn parse_header(header: &[u8]) -> HashMap<String, String> {
    let text = String::from_utf8_lossy(header);
    let mut fields = HashMap::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if let Some((key, value)) = line.split_once(KEY_SEPARATOR) {
            fields.insert(key.trim_start().to_string(), value.to_string());
        }
    }
    fields
}

/// Look up a required header key.
pub fn required<'a>(
    fields: &'a HashMap<String, String>,
    key: &str,
) -> Result<&'a str, ConvertError> {
    fields
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ConvertError::MissingHeaderField(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_rda(header: &str, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(HEADER_BEGIN);
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(HEADER_END);
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_split_sections() {
        let bytes = synthetic_rda("TE: 30\r\nPatientID: X", &[1, 2, 3, 4]);
        let (header, payload) = split_sections(&bytes).unwrap();
        let fields = parse_header(header);
        assert_eq!(fields.get("TE").map(String::as_str), Some("30"));
        assert_eq!(fields.get("PatientID").map(String::as_str), Some("X"));
        assert_eq!(payload, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_sentinels() {
        let err = split_sections(b"just noise").unwrap_err();
        assert!(matches!(err, ConvertError::MissingSentinel(_)));

        let mut bytes = Vec::new();
        bytes.extend_from_slice(HEADER_BEGIN);
        bytes.extend_from_slice(b"\r\nTE: 30\r\n");
        let err = split_sections(&bytes).unwrap_err();
        assert!(matches!(err, ConvertError::MissingSentinel(_)));
    }

    #[test]
    fn test_separatorless_lines_skipped() {
        let fields = parse_header(b"TE: 30\r\nnonsense line\r\nDwellTime: 250");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("DwellTime").map(String::as_str), Some("250"));
    }

    #[test]
    fn test_required_key_error_names_field() {
        let fields = parse_header(b"TE: 30");
        let err = required(&fields, KEY_FIELD_STRENGTH).unwrap_err();
        match err {
            ConvertError::MissingHeaderField(key) => assert_eq!(key, "MagneticFieldStrength"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
