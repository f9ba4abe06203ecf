//! Canonical complex signal with paired time/frequency views.
//!
//! Every supported input — binary export, raw text, or an in-memory
//! array — normalizes to a time-domain complex sequence; the centered
//! spectrum is always derived from it, never stored independently.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward DFT (unnormalized, rustfft convention).
pub fn fft(mut buf: Vec<Complex64>) -> Vec<Complex64> {
    let n = buf.len();
    if n == 0 {
        return buf;
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buf);
    buf
}

/// Inverse DFT, normalized by 1/n so that `ifft(fft(x)) == x` up to
/// floating point.
pub fn ifft(mut buf: Vec<Complex64>) -> Vec<Complex64> {
    let n = buf.len();
    if n == 0 {
        return buf;
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_inverse(n).process(&mut buf);
    let scale = 1.0 / n as f64;
    for c in buf.iter_mut() {
        *c *= scale;
    }
    buf
}

/// Move the zero-frequency bin to the center of the spectrum.
pub fn fft_shift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let n = spectrum.len();
    let mid = n - n / 2;
    let mut shifted = Vec::with_capacity(n);
    shifted.extend_from_slice(&spectrum[mid..]);
    shifted.extend_from_slice(&spectrum[..mid]);
    shifted
}

/// Undo `fft_shift`. For odd lengths the two rotations differ, so
/// this is not simply `fft_shift` applied twice.
pub fn ifft_shift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let n = spectrum.len();
    let mid = n / 2;
    let mut shifted = Vec::with_capacity(n);
    shifted.extend_from_slice(&spectrum[mid..]);
    shifted.extend_from_slice(&spectrum[..mid]);
    shifted
}

/// Analytic signal of a real sequence via the DFT: DC and Nyquist
/// bins kept, positive frequencies doubled, negative frequencies
/// zeroed, then inverse-transformed.
pub fn analytic_signal(signal: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let buf: Vec<Complex64> = signal.iter().map(|&r| Complex64::new(r, 0.0)).collect();
    let mut spectrum = fft(buf);

    let half = n / 2;
    let positive_end = if n % 2 == 0 { half } else { half + 1 };
    for c in spectrum[1..positive_end].iter_mut() {
        *c *= 2.0;
    }
    for c in spectrum[half + 1..].iter_mut() {
        *c = Complex64::new(0.0, 0.0);
    }

    ifft(spectrum)
}

/// An ordered complex sample sequence with both domain views.
///
/// Invariant: `frequency_domain == fft_shift(fft(time_domain))`. The
/// constructors are the only way to build one, so the two views can
/// never drift apart; both are recomputed from scratch on every call.
#[derive(Debug, Clone)]
pub struct CanonicalSignal {
    /// Complex time-domain samples (the FID).
    pub time_domain: Vec<Complex64>,
    /// Centered spectrum derived from `time_domain`.
    pub frequency_domain: Vec<Complex64>,
}

impl CanonicalSignal {
    /// Build from a time-domain sequence; the frequency view is
    /// derived.
    pub fn from_time_domain(time_domain: Vec<Complex64>) -> Self {
        let frequency_domain = fft_shift(&fft(time_domain.clone()));
        Self {
            time_domain,
            frequency_domain,
        }
    }

    /// Build from a centered complex spectrum.
    ///
    /// Exact algebraic inverse of the forward transform, so a decode →
    /// encode round trip through the frequency domain reproduces the
    /// original time-domain sequence up to floating point.
    pub fn from_spectrum(spectrum: &[Complex64]) -> Self {
        Self::from_time_domain(ifft(ifft_shift(spectrum)))
    }

    /// Build from the real part of a one-sided spectrum.
    ///
    /// The imaginary channel is synthesized from the conjugated
    /// analytic signal (Hilbert transform) before the inverse
    /// transform. This is a lossy reconstruction: imaginary content is
    /// fabricated, not recovered.
    pub fn from_real_spectrum(real: &[f64]) -> Self {
        let spectrum: Vec<Complex64> = analytic_signal(real).iter().map(|c| c.conj()).collect();
        Self::from_spectrum(&spectrum)
    }

    /// Number of complex samples.
    pub fn len(&self) -> usize {
        self.time_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_domain.is_empty()
    }
}
