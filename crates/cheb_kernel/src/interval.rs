//! Affine map between the canonical domain `[-1, 1]` and `[a, b]`.

use crate::error::ChebError;

/// A finite interval `[a, b]` with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self { a: -1.0, b: 1.0 }
    }
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Self, ChebError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(ChebError::InvalidArgument("interval ends must be finite"));
        }
        if a >= b {
            return Err(ChebError::InvalidArgument("interval requires a < b"));
        }
        Ok(Self { a, b })
    }

    /// The canonical domain `[-1, 1]`.
    pub fn canonical() -> Self {
        Self::default()
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }

    /// Canonical coordinate `y` in `[-1, 1]` to `[a, b]`.
    pub fn map(&self, y: f64) -> f64 {
        0.5 * (self.b - self.a) * y + 0.5 * (self.a + self.b)
    }

    pub fn map_slice(&self, ys: &[f64]) -> Vec<f64> {
        ys.iter().map(|&y| self.map(y)).collect()
    }

    /// Inverse of [`Interval::map`].
    pub fn invmap(&self, x: f64) -> f64 {
        (2.0 * x - self.a - self.b) / (self.b - self.a)
    }

    /// Split at canonical coordinate `t`, returning the left and right parts.
    pub fn subdivide(&self, t: f64) -> Result<(Self, Self), ChebError> {
        if !(t > -1.0 && t < 1.0) {
            return Err(ChebError::InvalidArgument(
                "split point must lie strictly inside (-1, 1)",
            ));
        }
        let mid = self.map(t);
        Ok((Self { a: self.a, b: mid }, Self { a: mid, b: self.b }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-15;

    #[test]
    fn rejects_empty_interval() {
        assert!(Interval::new(1.0, 1.0).is_err());
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn map_endpoints() {
        let iv = Interval::new(2.0, 6.0).unwrap();
        assert_eq!(iv.map(-1.0), 2.0);
        assert_eq!(iv.map(1.0), 6.0);
        assert_eq!(iv.map(0.0), 4.0);
    }

    #[test]
    fn invmap_inverts_map() {
        let iv = Interval::new(-3.0, 0.5).unwrap();
        for &y in &[-1.0, -0.3, 0.0, 0.77, 1.0] {
            assert!((iv.invmap(iv.map(y)) - y).abs() < EPS);
        }
    }

    #[test]
    fn contains_is_closed() {
        let iv = Interval::new(-2.0, 0.5).unwrap();
        assert!(iv.contains(-2.0) && iv.contains(0.5) && iv.contains(0.0));
        assert!(!iv.contains(0.6) && !iv.contains(f64::NAN));
    }

    #[test]
    fn subdivide_canonical() {
        let (l, r) = Interval::canonical().subdivide(0.5).unwrap();
        assert_eq!((l.a(), l.b()), (-1.0, 0.5));
        assert_eq!((r.a(), r.b()), (0.5, 1.0));
        assert!(Interval::canonical().subdivide(1.0).is_err());
    }
}
