//! Discrete Fourier transform pair used by basis conversion and
//! coefficient multiplication.
//!
//! Conventions: `fft` is unnormalised, `ifft` scales by `1/N`, so
//! `ifft(fft(x)) == x`.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward DFT: `X_k = sum_j x_j exp(-2 pi i j k / N)`.
pub fn fft(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(buffer.len());
    plan.process(&mut buffer);
    buffer
}

/// Inverse DFT with `1/N` normalisation.
pub fn ifft(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let n = buffer.len();
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_inverse(n);
    plan.process(&mut buffer);
    let scale = 1.0 / n as f64;
    for z in &mut buffer {
        *z *= scale;
    }
    buffer
}
