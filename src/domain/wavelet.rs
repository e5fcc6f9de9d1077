//! One-level Daubechies-4 discrete wavelet transform and its inverse.
//!
//! Signals are extended periodically before convolution, so no zero-padding
//! artifacts appear at the boundaries. The wavelet (high-pass) filter is
//! derived from the scaling filter by the quadrature-mirror relation
//! g = [h3, -h2, h1, -h0]; with the fixed reconstruction offset of
//! `FILTER_LEN - 1` samples the inverse compensates the filter pair's group
//! delay exactly, giving idwt(dwt(x)) == x to floating-point accuracy.

use crate::domain::error::WavetraderError;

const FILTER_LEN: usize = 4;

/// db4 scaling (low-pass) and wavelet (high-pass) filter taps.
fn db4_filters() -> ([f64; FILTER_LEN], [f64; FILTER_LEN]) {
    let sqrt3 = 3.0_f64.sqrt();
    let norm = 4.0 * 2.0_f64.sqrt();
    let h = [
        (1.0 + sqrt3) / norm,
        (3.0 + sqrt3) / norm,
        (3.0 - sqrt3) / norm,
        (1.0 - sqrt3) / norm,
    ];
    let g = [h[3], -h[2], h[1], -h[0]];
    (h, g)
}

/// Extend `signal` periodically by `ext` samples on each side.
fn periodic_extend(signal: &[f64], ext: usize) -> Vec<f64> {
    let n = signal.len();
    // Reduce the shift first so short signals (n < ext) cannot underflow.
    let shift = ext % n;
    (0..n + 2 * ext)
        .map(|i| signal[(i + n - shift) % n])
        .collect()
}

/// Valid-mode convolution of the periodically extended signal with `filter`.
/// Output length is `signal.len() + FILTER_LEN - 1`.
fn convolve_periodic(signal: &[f64], filter: &[f64; FILTER_LEN]) -> Vec<f64> {
    let extended = periodic_extend(signal, FILTER_LEN - 1);
    let out_len = extended.len() - FILTER_LEN + 1;

    (0..out_len)
        .map(|i| {
            filter
                .iter()
                .enumerate()
                .map(|(j, &tap)| extended[i + j] * tap)
                .sum()
        })
        .collect()
}

/// Insert a zero after every sample.
fn upsample(signal: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; 2 * signal.len()];
    for (i, &v) in signal.iter().enumerate() {
        out[2 * i] = v;
    }
    out
}

/// Forward one-level DWT. Returns the approximation (low-pass) and detail
/// (high-pass) coefficients, each of length `signal.len() / 2`.
///
/// An odd-length input is a caller contract violation and fails immediately.
pub fn dwt(signal: &[f64]) -> Result<(Vec<f64>, Vec<f64>), WavetraderError> {
    if signal.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }
    if signal.len() % 2 != 0 {
        return Err(WavetraderError::OddWaveletInput { len: signal.len() });
    }

    let (h, g) = db4_filters();
    let conv_h = convolve_periodic(signal, &h);
    let conv_g = convolve_periodic(signal, &g);

    let approx = conv_h[..signal.len()].iter().step_by(2).copied().collect();
    let detail = conv_g[..signal.len()].iter().step_by(2).copied().collect();
    Ok((approx, detail))
}

/// Inverse one-level DWT. Reconstructs a signal of length `2 * approx.len()`
/// from approximation and detail coefficients of equal length.
///
/// Mismatched coefficient lengths are a caller contract violation and fail
/// immediately.
pub fn idwt(approx: &[f64], detail: &[f64]) -> Result<Vec<f64>, WavetraderError> {
    if approx.len() != detail.len() {
        return Err(WavetraderError::WaveletLengthMismatch {
            approx: approx.len(),
            detail: detail.len(),
        });
    }
    if approx.is_empty() {
        return Ok(Vec::new());
    }

    let (h, g) = db4_filters();
    let mut h_rev = h;
    h_rev.reverse();
    let mut g_rev = g;
    g_rev.reverse();

    let conv_h = convolve_periodic(&upsample(approx), &h_rev);
    let conv_g = convolve_periodic(&upsample(detail), &g_rev);

    // Offset of FILTER_LEN - 1 undoes the analysis/synthesis group delay.
    let start = FILTER_LEN - 1;
    let n = 2 * approx.len();
    Ok((start..start + n).map(|i| conv_h[i] + conv_g[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dwt_halves_length() {
        let signal: Vec<f64> = (0..16).map(|i| (i as f64).sin() * 10.0).collect();
        let (approx, detail) = dwt(&signal).unwrap();

        assert_eq!(approx.len(), 8);
        assert_eq!(detail.len(), 8);
    }

    #[test]
    fn dwt_rejects_odd_length() {
        let result = dwt(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(WavetraderError::OddWaveletInput { len: 3 })
        ));
    }

    #[test]
    fn dwt_empty_input() {
        let (approx, detail) = dwt(&[]).unwrap();
        assert!(approx.is_empty());
        assert!(detail.is_empty());
    }

    #[test]
    fn idwt_rejects_mismatched_lengths() {
        let result = idwt(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(WavetraderError::WaveletLengthMismatch {
                approx: 2,
                detail: 1
            })
        ));
    }

    #[test]
    fn constant_signal_has_no_detail() {
        let signal = [5.0; 8];
        let (approx, detail) = dwt(&signal).unwrap();

        // The scaling filter sums to sqrt(2); the wavelet filter sums to 0.
        let expected = 5.0 * 2.0_f64.sqrt();
        for &a in &approx {
            assert_abs_diff_eq!(a, expected, epsilon = 1e-12);
        }
        for &d in &detail {
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn round_trip_reconstructs_prices() {
        let signal = [
            100.0, 102.5, 101.75, 103.0, 104.25, 103.5, 105.0, 106.75, 106.0, 107.5, 108.25,
            107.0, 109.5, 110.0, 109.25, 111.0,
        ];
        let (approx, detail) = dwt(&signal).unwrap();
        let reconstructed = idwt(&approx, &detail).unwrap();

        assert_eq!(reconstructed.len(), signal.len());
        for (orig, rec) in signal.iter().zip(&reconstructed) {
            assert_abs_diff_eq!(orig, rec, epsilon = 1e-9);
        }
    }

    #[test]
    fn round_trip_shortest_even_signal() {
        let signal = [3.0, -7.0];
        let (approx, detail) = dwt(&signal).unwrap();
        let reconstructed = idwt(&approx, &detail).unwrap();

        assert_abs_diff_eq!(reconstructed[0], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(reconstructed[1], -7.0, epsilon = 1e-9);
    }

    #[test]
    fn filters_are_quadrature_mirrors() {
        let (h, g) = db4_filters();
        assert_abs_diff_eq!(g[0], h[3], epsilon = 1e-15);
        assert_abs_diff_eq!(g[1], -h[2], epsilon = 1e-15);
        assert_abs_diff_eq!(g[2], h[1], epsilon = 1e-15);
        assert_abs_diff_eq!(g[3], -h[0], epsilon = 1e-15);

        // Orthonormality of the scaling filter.
        let energy: f64 = h.iter().map(|t| t * t).sum();
        assert_abs_diff_eq!(energy, 1.0, epsilon = 1e-12);
    }
}
