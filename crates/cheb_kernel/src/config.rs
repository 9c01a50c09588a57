//! Numerical constants shared by the kernel.

use crate::error::ChebError;

/// Interior split point used when the rootfinder subdivides `[-1, 1]`.
///
/// Slightly left of zero so that odd and even functions do not place a
/// root exactly on the seam.
pub const SPLIT_POINT: f64 = -0.004849834917525;

/// Largest series length solved directly with a colleague matrix.
pub const COLLEAGUE_MAX_LEN: usize = 50;

/// Largest power of two tried by the adaptive constructor.
pub const MAX_POW2: u32 = 16;

/// Immutable numerical settings, built once and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebConfig {
    /// Relative tolerance; defaults to machine epsilon.
    pub eps: f64,
    /// Interior point at which the rootfinder splits `[-1, 1]`.
    pub split_point: f64,
    /// Series longer than this are subdivided before rootfinding.
    pub colleague_max_len: usize,
    /// Adaptive construction stops at `2^max_pow2 + 1` points.
    pub max_pow2: u32,
    /// Subdivision stops at this depth and solves whatever is left directly.
    pub max_subdivision_depth: u32,
    /// Subdivision stops once a piece is narrower than this (canonical units).
    pub min_subinterval_width: f64,
    /// Whether [`ChebSeries::roots`](crate::ChebSeries::roots) runs Newton polishing.
    pub polish_roots: bool,
}

impl Default for ChebConfig {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            split_point: SPLIT_POINT,
            colleague_max_len: COLLEAGUE_MAX_LEN,
            max_pow2: MAX_POW2,
            max_subdivision_depth: 40,
            min_subinterval_width: 1e-12,
            polish_roots: true,
        }
    }
}

impl ChebConfig {
    /// Same defaults with a different base tolerance.
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            ..Self::default()
        }
    }

    /// Imaginary-part cutoff used by the rootfinder (`100 * eps`).
    pub fn default_htol(&self) -> f64 {
        1e2 * self.eps
    }

    /// Step-size tolerance used by Newton polishing (`2 * eps`).
    pub fn default_newton_tol(&self) -> f64 {
        2.0 * self.eps
    }

    pub fn validate(&self) -> Result<(), ChebError> {
        if !self.eps.is_finite() || self.eps <= 0.0 || self.eps >= 1.0 {
            return Err(ChebError::InvalidConfig("eps must lie in (0, 1)"));
        }
        if !(self.split_point > -1.0 && self.split_point < 1.0) {
            return Err(ChebError::InvalidConfig(
                "split_point must lie strictly inside (-1, 1)",
            ));
        }
        if self.colleague_max_len < 2 {
            return Err(ChebError::InvalidConfig(
                "colleague_max_len must be at least 2",
            ));
        }
        if self.max_pow2 < 4 || self.max_pow2 > 30 {
            return Err(ChebError::InvalidConfig("max_pow2 must lie in [4, 30]"));
        }
        if !(self.min_subinterval_width >= 0.0) {
            return Err(ChebError::InvalidConfig(
                "min_subinterval_width must be non-negative",
            ));
        }
        Ok(())
    }
}
