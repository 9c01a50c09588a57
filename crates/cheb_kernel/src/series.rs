//! A Chebyshev series on an arbitrary interval.

use crate::adaptive::{AdaptiveFit, adaptive_degree};
use crate::arithmetic::{differentiate_coefficients, multiply_coefficients};
use crate::chebyshev::clenshaw;
use crate::config::ChebConfig;
use crate::convert::coefficients_to_values;
use crate::error::ChebError;
use crate::interval::Interval;
use crate::points::chebyshev_points;
use crate::polish::{Differentiable, Evaluate, polish_roots};
use crate::roots::roots_on_canonical_domain;

/// Real function `sum(c_k * T_k(y))` with `y` the canonical coordinate of
/// `x` in `interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebSeries {
    coeffs: Vec<f64>,
    interval: Interval,
    converged: bool,
}

impl ChebSeries {
    /// Wrap existing coefficients. Errors on an empty sequence.
    pub fn from_coefficients(coeffs: Vec<f64>, interval: Interval) -> Result<Self, ChebError> {
        if coeffs.is_empty() {
            return Err(ChebError::EmptyInput("coefficients"));
        }
        Ok(Self {
            coeffs,
            interval,
            converged: true,
        })
    }

    /// Adaptively approximate `f` on `interval`.
    ///
    /// A fit that hit the resolution ceiling is still returned;
    /// [`ChebSeries::converged`] reports it.
    pub fn from_fn<F>(f: F, interval: Interval, config: &ChebConfig) -> Result<Self, ChebError>
    where
        F: Fn(f64) -> f64,
    {
        config.validate()?;
        let AdaptiveFit {
            coefficients,
            converged,
            ..
        } = adaptive_degree(
            |ys: &[f64]| ys.iter().map(|&y| f(interval.map(y))).collect::<Vec<f64>>(),
            config.max_pow2,
            config.eps,
        )?;
        Ok(Self {
            coeffs: coefficients,
            interval,
            converged,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Number of coefficients; never zero.
    pub fn length(&self) -> usize {
        self.coeffs.len()
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Values at the Chebyshev points mapped into the interval.
    pub fn values(&self) -> Vec<f64> {
        coefficients_to_values(&self.coeffs)
    }

    /// The Chebyshev points matching [`ChebSeries::values`].
    pub fn points(&self) -> Vec<f64> {
        self.interval.map_slice(&chebyshev_points(self.coeffs.len()))
    }

    /// Evaluate at points of the interval.
    pub fn eval(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter()
            .map(|&x| clenshaw(&self.coeffs, self.interval.invmap(x)))
            .collect()
    }

    pub fn eval_at(&self, x: f64) -> f64 {
        self.eval(&[x])[0]
    }

    /// Derivative with respect to `x`, on the same interval.
    pub fn diff(&self) -> Self {
        let scale = 2.0 / self.interval.width();
        let coeffs = differentiate_coefficients(&self.coeffs)
            .into_iter()
            .map(|c| c * scale)
            .collect();
        Self {
            coeffs,
            interval: self.interval,
            converged: self.converged,
        }
    }

    /// Pointwise product truncated to the longer operand's length.
    pub fn product(&self, other: &Self) -> Result<Self, ChebError> {
        if self.interval != other.interval {
            return Err(ChebError::InvalidArgument(
                "product requires operands on the same interval",
            ));
        }
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut a = self.coeffs.clone();
        let mut b = other.coeffs.clone();
        a.resize(n, 0.0);
        b.resize(n, 0.0);
        Ok(Self {
            coeffs: multiply_coefficients(&a, &b)?,
            interval: self.interval,
            converged: self.converged && other.converged,
        })
    }

    /// Sorted roots inside the interval, Newton-polished when
    /// `config.polish_roots` is set.
    pub fn roots(&self, config: &ChebConfig) -> Result<Vec<f64>, ChebError> {
        let canonical = roots_on_canonical_domain(&self.coeffs, config.default_htol(), config)?;
        let mut rts = self.interval.map_slice(&canonical);
        if config.polish_roots {
            rts = polish_roots(self, &rts, config.default_newton_tol(), 10)?;
            // Newton may step a hair outside; keep the ends on the interval.
            for r in &mut rts {
                *r = r.clamp(self.interval.a(), self.interval.b());
            }
            rts.sort_by(f64::total_cmp);
        }
        Ok(rts)
    }
}

impl Evaluate for ChebSeries {
    fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        self.eval(xs)
    }
}

impl Differentiable for ChebSeries {
    type Derivative = ChebSeries;

    fn derivative(&self) -> ChebSeries {
        self.diff()
    }
}
