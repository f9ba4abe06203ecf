//! Fixed-column number formatting shared by the raw writer and headers.

/// Fortran format descriptor stamped into the `$NMID` block.
pub const FMTDAT: &str = "(2E15.6)";

/// Sequence name LCModel expects on the `$SEQPAR` line. Written
/// regardless of the configured sequence.
pub const DEFAULT_SEQUENCE: &str = "PRESS";

/// Width of one data value in the raw pair lines.
pub const RAW_FIELD_WIDTH: usize = 13;

/// Format a value like C's `%e`: six decimal digits and a signed
/// two-digit exponent, e.g. `2.500000e-04`.
///
/// Rust's `{:e}` writes bare exponents (`2.5e-4`), which LCModel's
/// fixed-column reader does not accept.
pub fn exp_notation(val: f64) -> String {
    let formatted = format!("{:.6e}", val);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            format!("{}e{:+03}", mantissa, exp)
        }
        None => formatted,
    }
}

/// Right-align a value in the 13-character field used for raw data
/// pairs.
pub fn field13(val: f64) -> String {
    format!("{:>width$}", exp_notation(val), width = RAW_FIELD_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_notation() {
        assert_eq!(exp_notation(2.5e-4), "2.500000e-04");
        assert_eq!(exp_notation(127.731), "1.277310e+02");
        assert_eq!(exp_notation(0.0), "0.000000e+00");
        assert_eq!(exp_notation(-1.5), "-1.500000e+00");
    }

    #[test]
    fn test_field13_width() {
        assert_eq!(field13(1.0), " 1.000000e+00");
        assert_eq!(field13(1.0).len(), RAW_FIELD_WIDTH);
        // Negative values fill the field exactly.
        assert_eq!(field13(-1.0), "-1.000000e+00");
        assert_eq!(field13(-1.0).len(), RAW_FIELD_WIDTH);
    }
}
