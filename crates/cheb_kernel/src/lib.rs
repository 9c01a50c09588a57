//! Numerical kernel for truncated Chebyshev series on `[-1, 1]`.
//!
//! This crate provides:
//! - Chebyshev points of the second kind and barycentric weights
//! - Value ↔ coefficient conversion through a mirrored DFT
//! - Clenshaw and barycentric evaluation
//! - Aurentz–Trefethen chopping and adaptive degree selection
//! - Coefficient-space multiplication and differentiation
//! - Colleague-matrix rootfinding with recursive subdivision, plus Newton polishing
//!
//! An [`Interval`] maps the canonical domain onto `[a, b]`, and [`ChebSeries`]
//! ties coefficients to an interval as a small function object.

pub mod adaptive;
pub mod arithmetic;
pub mod chebyshev;
pub mod chop;
pub mod config;
pub mod convert;
pub mod error;
pub mod interval;
pub mod points;
pub mod polish;
pub mod roots;
pub mod scalar;
pub mod series;
pub mod transform;

pub use adaptive::{AdaptiveFit, adaptive_degree};
pub use arithmetic::{differentiate_coefficients, multiply_coefficients};
pub use chebyshev::{barycentric_at, barycentric_evaluate, clenshaw_at, clenshaw_evaluate};
pub use chop::standard_chop;
pub use config::{COLLEAGUE_MAX_LEN, ChebConfig, MAX_POW2, SPLIT_POINT};
pub use convert::{coefficients_to_values, values_to_coefficients};
pub use error::ChebError;
pub use interval::Interval;
pub use num_complex::Complex64;
pub use points::{barycentric_weights, chebyshev_points};
pub use polish::{Differentiable, Evaluate, polish_roots};
pub use roots::roots_on_canonical_domain;
pub use scalar::Scalar;
pub use series::ChebSeries;
