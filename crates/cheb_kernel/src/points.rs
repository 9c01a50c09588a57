//! Chebyshev points of the second kind and their barycentric weights.

use std::f64::consts::PI;

/// `n` Chebyshev points of the second kind, `cos(k pi / (n - 1))` for
/// `k = n-1, ..., 0`, so the sequence runs from `-1` up to `1`.
///
/// `n = 1` gives the single point `0`; `n = 0` gives nothing.
pub fn chebyshev_points(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let h = PI / (n - 1) as f64;
            (0..n).rev().map(|k| (k as f64 * h).cos()).collect()
        }
    }
}

/// Barycentric weights paired index-for-index with [`chebyshev_points`].
///
/// Unit magnitude with alternating sign, the last weight is `+0.5` and the
/// first is `±0.5`.
pub fn barycentric_weights(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let mut w = vec![1.0; n];
            w[n - 1] = 0.5;
            for k in (0..n - 1).rev().step_by(2) {
                w[k] = -1.0;
            }
            w[0] *= 0.5;
            w
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-15;

    #[test]
    fn degenerate_sizes() {
        assert!(chebyshev_points(0).is_empty());
        assert_eq!(chebyshev_points(1), vec![0.0]);
        assert!(barycentric_weights(0).is_empty());
        assert_eq!(barycentric_weights(1), vec![1.0]);
    }

    #[test]
    fn endpoints_and_order() {
        let x = chebyshev_points(5);
        assert_eq!(x.len(), 5);
        assert!((x[0] + 1.0).abs() < EPS);
        assert!((x[4] - 1.0).abs() < EPS);
        assert!(x[2].abs() < EPS);
        for pair in x.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn weights_five() {
        assert_eq!(barycentric_weights(5), vec![0.5, -1.0, 1.0, -1.0, 0.5]);
    }

    #[test]
    fn weights_four() {
        assert_eq!(barycentric_weights(4), vec![-0.5, 1.0, -1.0, 0.5]);
    }

    #[test]
    fn weights_two() {
        assert_eq!(barycentric_weights(2), vec![-0.5, 0.5]);
    }
}
