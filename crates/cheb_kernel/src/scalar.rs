//! Real and complex scalars accepted by the kernel.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex64;
use num_traits::Zero;

/// Element type of value and coefficient sequences.
///
/// Implemented for `f64` and [`Complex64`]. Transforms always run in complex
/// arithmetic; `from_complex` decides what survives the trip back.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Div<Output = Self>
    + Div<f64, Output = Self>
{
    fn to_complex(self) -> Complex64;

    /// Real scalars keep the real part.
    fn from_complex(z: Complex64) -> Self;

    fn is_nan(self) -> bool;

    fn magnitude(self) -> f64;

    fn from_real(x: f64) -> Self;
}

impl Scalar for f64 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }

    fn from_complex(z: Complex64) -> Self {
        z.re
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }

    fn from_real(x: f64) -> Self {
        x
    }
}

impl Scalar for Complex64 {
    fn to_complex(self) -> Complex64 {
        self
    }

    fn from_complex(z: Complex64) -> Self {
        z
    }

    fn is_nan(self) -> bool {
        Complex64::is_nan(self)
    }

    fn magnitude(self) -> f64 {
        self.norm()
    }

    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
}

/// Which component of a transform result carries the information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Real,
    Imaginary,
    Complex,
}

/// Classify a sequence: every imaginary part zero, else every real part zero,
/// else general complex. An all-zero sequence counts as real.
pub(crate) fn classify(zs: &[Complex64]) -> Kind {
    if zs.iter().all(|z| z.im == 0.0) {
        Kind::Real
    } else if zs.iter().all(|z| z.re == 0.0) {
        Kind::Imaginary
    } else {
        Kind::Complex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_kinds() {
        let real = [Complex64::new(1.0, 0.0), Complex64::new(-2.0, 0.0)];
        let imag = [Complex64::new(0.0, 1.0), Complex64::new(0.0, -3.0)];
        let mixed = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)];
        assert_eq!(classify(&real), Kind::Real);
        assert_eq!(classify(&imag), Kind::Imaginary);
        assert_eq!(classify(&mixed), Kind::Complex);
        assert_eq!(classify(&[Complex64::new(0.0, 0.0)]), Kind::Real);
    }

    #[test]
    fn real_from_complex_drops_imaginary() {
        assert_eq!(<f64 as Scalar>::from_complex(Complex64::new(2.5, 7.0)), 2.5);
    }
}
