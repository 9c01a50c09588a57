//! Real roots of a Chebyshev series on `[-1, 1]`.
//!
//! Degree up to [`ChebConfig::colleague_max_len`] - 1 is solved through the
//! eigenvalues of the colleague matrix (Good 1961); longer series are split
//! at [`ChebConfig::split_point`] and each half is re-interpolated and solved
//! again (Boyd 2002; Trefethen, ATAP ch. 18).

use faer::Mat;
use tracing::{debug, trace, warn};

use crate::chebyshev::clenshaw_evaluate;
use crate::chop::standard_chop;
use crate::config::ChebConfig;
use crate::convert::values_to_coefficients;
use crate::error::ChebError;
use crate::interval::Interval;
use crate::points::chebyshev_points;

/// A piece of `[-1, 1]` still waiting to be solved.
struct Piece {
    coeffs: Vec<f64>,
    htol: f64,
    /// Where this piece's local `[-1, 1]` sits in canonical coordinates.
    domain: Interval,
    depth: u32,
}

/// Sorted real roots in `[-1, 1]` of the series with coefficients `coeffs`.
///
/// Eigenvalues whose imaginary part exceeds `htol` are dropped; real parts
/// within `htol` outside the domain are kept and clamped onto it. Each
/// subdivision doubles `htol` for its children.
pub fn roots_on_canonical_domain(
    coeffs: &[f64],
    htol: f64,
    config: &ChebConfig,
) -> Result<Vec<f64>, ChebError> {
    config.validate()?;
    if !(htol >= 0.0) {
        return Err(ChebError::InvalidArgument("htol must be non-negative"));
    }
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(ChebError::InvalidArgument("coefficients must be finite"));
    }

    let mut roots = Vec::new();
    let mut stack = vec![Piece {
        coeffs: coeffs.to_vec(),
        htol,
        domain: Interval::canonical(),
        depth: 0,
    }];

    while let Some(piece) = stack.pop() {
        let n = standard_chop(&piece.coeffs, config.eps);
        let ak = &piece.coeffs[..n];

        if n > config.colleague_max_len {
            let narrow = piece.domain.width() < config.min_subinterval_width;
            if piece.depth < config.max_subdivision_depth && !narrow {
                trace!(depth = piece.depth, length = n, "subdividing");
                let (left, right) = split(ak, &piece, config)?;
                // Right first so the left half is popped next.
                stack.push(right);
                stack.push(left);
                continue;
            }
            warn!(
                depth = piece.depth,
                length = n,
                a = piece.domain.a(),
                b = piece.domain.b(),
                "subdivision limit reached; solving colleague matrix directly"
            );
        }

        let local = local_roots(ak, piece.htol)?;
        roots.extend(local.into_iter().map(|r| piece.domain.map(r)));
    }

    roots.sort_by(f64::total_cmp);
    debug!(count = roots.len(), "canonical rootfinding done");
    Ok(roots)
}

/// Re-interpolate `ak` on the two halves of `piece` split at the configured
/// point.
fn split(ak: &[f64], piece: &Piece, config: &ChebConfig) -> Result<(Piece, Piece), ChebError> {
    let (lmap, rmap) = Interval::canonical().subdivide(config.split_point)?;
    let (ldom, rdom) = piece.domain.subdivide(config.split_point)?;
    let pts = chebyshev_points(ak.len());

    let lvals = clenshaw_evaluate(&lmap.map_slice(&pts), ak)?;
    let rvals = clenshaw_evaluate(&rmap.map_slice(&pts), ak)?;

    let child = |vals: Vec<f64>, domain: Interval| Piece {
        coeffs: values_to_coefficients(&vals),
        htol: 2.0 * piece.htol,
        domain,
        depth: piece.depth + 1,
    };
    Ok((child(lvals, ldom), child(rvals, rdom)))
}

/// Roots of a chopped series on its own `[-1, 1]`, without subdivision.
fn local_roots(ak: &[f64], htol: f64) -> Result<Vec<f64>, ChebError> {
    // Trailing coefficients too small to normalise by only lower the degree.
    let n = ak
        .iter()
        .rposition(|&c| (0.5 / c).is_finite())
        .map_or(0, |i| i + 1);
    let ak = &ak[..n];
    if n <= 1 {
        return Ok(Vec::new());
    }

    let candidates: Vec<(f64, f64)> = if n == 2 {
        vec![(-ak[0] / ak[1], 0.0)]
    } else {
        let mut c = colleague_matrix(ak);
        let m = c.nrows();
        if (0..m).any(|j| !c[(m - 1, j)].is_finite()) {
            return Err(ChebError::InvalidArgument(
                "coefficient ratios overflow the colleague matrix",
            ));
        }
        balance(&mut c);
        c.as_ref()
            .eigenvalues()
            .map_err(|_| ChebError::NoConvergence("colleague matrix eigenvalues"))?
            .iter()
            .map(|z| (z.re, z.im))
            .collect()
    };

    let mut rts: Vec<f64> = candidates
        .into_iter()
        .filter(|&(_, im)| im.abs() <= htol)
        .map(|(re, _)| re)
        .filter(|re| re.abs() <= 1.0 + htol)
        .collect();
    rts.sort_by(f64::total_cmp);

    if let Some(first) = rts.first_mut() {
        *first = first.max(-1.0);
    }
    if let Some(last) = rts.last_mut() {
        *last = last.min(1.0);
    }
    Ok(rts)
}

/// Colleague matrix of the degree `n - 1` series `ak` (`n >= 3`).
///
/// Tridiagonal with `0.5` off the diagonal and `1` at `(0, 1)`, minus
/// `ak[..n-1] / (2 ak[n-1])` along the last row.
fn colleague_matrix(ak: &[f64]) -> Mat<f64> {
    let m = ak.len() - 1;
    let mut c = Mat::<f64>::zeros(m, m);
    for i in 0..m - 1 {
        c[(i, i + 1)] = 0.5;
        c[(i + 1, i)] = 0.5;
    }
    c[(0, 1)] = 1.0;
    let scale = 0.5 / ak[m];
    for j in 0..m {
        c[(m - 1, j)] -= scale * ak[j];
    }
    c
}

/// Upper bound on balancing sweeps; each sweep rescales by powers of two.
const MAX_BALANCE_SWEEPS: usize = 64;

/// Diagonal similarity scaling (Parlett & Reinsch 1969) so that each row
/// and its matching column have comparable off-diagonal norms.
///
/// Scale factors are powers of two, so the eigenvalues are unchanged.
fn balance(c: &mut Mat<f64>) {
    const RADIX: f64 = 2.0;
    const SQRDX: f64 = RADIX * RADIX;
    let m = c.nrows();

    for _ in 0..MAX_BALANCE_SWEEPS {
        let mut done = true;
        for i in 0..m {
            let mut col = 0.0;
            let mut row = 0.0;
            for j in (0..m).filter(|&j| j != i) {
                col += c[(j, i)].abs();
                row += c[(i, j)].abs();
            }
            if col == 0.0 || row == 0.0 {
                continue;
            }

            let total = col + row;
            let mut f = 1.0;
            let mut g = row / RADIX;
            while col < g {
                f *= RADIX;
                col *= SQRDX;
            }
            g = row * RADIX;
            while col > g {
                f /= RADIX;
                col /= SQRDX;
            }

            if (col + row) / f < 0.95 * total {
                done = false;
                let inv = 1.0 / f;
                for j in 0..m {
                    c[(i, j)] *= inv;
                }
                for j in 0..m {
                    c[(j, i)] *= f;
                }
            }
        }
        if done {
            return;
        }
    }
    trace!("balancing stopped at the sweep limit");
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn solve(coeffs: &[f64]) -> Vec<f64> {
        let cfg = ChebConfig::default();
        roots_on_canonical_domain(coeffs, cfg.default_htol(), &cfg).unwrap()
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(solve(&[3.0]).is_empty());
        assert!(solve(&[]).is_empty());
    }

    #[test]
    fn linear_root() {
        // 0.25 + x
        let r = solve(&[0.25, 1.0]);
        assert_eq!(r.len(), 1);
        assert!((r[0] + 0.25).abs() < TOL);
    }

    #[test]
    fn linear_root_outside_domain() {
        assert!(solve(&[3.0, 1.0]).is_empty());
    }

    #[test]
    fn roots_of_t3() {
        let r = solve(&[0.0, 0.0, 0.0, 1.0]);
        let s = (3.0f64).sqrt() / 2.0;
        assert_eq!(r.len(), 3);
        assert!((r[0] + s).abs() < 1e-10);
        assert!(r[1].abs() < 1e-10);
        assert!((r[2] - s).abs() < 1e-10);
    }

    #[test]
    fn complex_roots_discarded() {
        // x^2 + 1 = 1.5 T_0 + 0.5 T_2
        assert!(solve(&[1.5, 0.0, 0.5]).is_empty());
    }

    #[test]
    fn colleague_matrix_shape() {
        let c = colleague_matrix(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!((c.nrows(), c.ncols()), (3, 3));
        assert_eq!(c[(0, 1)], 1.0);
        assert_eq!(c[(1, 0)], 0.5);
        assert!((c[(2, 1)] - (0.5 - 2.0 / 8.0)).abs() < 1e-15);
        assert!((c[(2, 0)] + 1.0 / 8.0).abs() < 1e-15);
    }

    #[test]
    fn first_kind_polynomials_up_to_colleague_limit() {
        // T_k vanishes at cos((2j - 1) pi / 2k), j = 1..=k.
        for k in 2..=49usize {
            let mut c = vec![0.0; k + 1];
            c[k] = 1.0;
            let r = solve(&c);
            assert_eq!(r.len(), k, "T_{k}: {r:?}");
            for (i, &x) in r.iter().enumerate() {
                let j = k - i;
                let expected =
                    ((2 * j - 1) as f64 * std::f64::consts::PI / (2 * k) as f64).cos();
                assert!((x - expected).abs() < 1e-11, "T_{k} root {i}: {x} vs {expected}");
            }
        }
    }

    #[test]
    fn noisy_leading_coefficient_keeps_roots() {
        // T_7 with a rounding-level T_8 term on top.
        let mut c = vec![0.0; 9];
        c[7] = 1.0;
        c[8] = 3e-17;
        let r = local_roots(&c, 1e-13).unwrap();
        assert_eq!(r.len(), 7, "{r:?}");
        for &x in &r {
            assert!(clenshaw_evaluate(&[x], &c).unwrap()[0].abs() < 1e-12, "{x}");
        }
    }

    #[test]
    fn balancing_evens_out_row_and_column() {
        let mut c = Mat::<f64>::zeros(2, 2);
        c[(0, 0)] = 1.0;
        c[(0, 1)] = 1e8;
        c[(1, 0)] = 1e-8;
        c[(1, 1)] = 1.0;
        balance(&mut c);
        let (p, q) = (c[(0, 1)].abs(), c[(1, 0)].abs());
        assert!(p.max(q) / p.min(q) < 4.0, "{p} vs {q}");
        assert_eq!(c[(0, 0)], 1.0);
        assert_eq!(c[(1, 1)], 1.0);
        // Similarity scaling keeps the product of the off-diagonals.
        assert!((p * q - 1.0).abs() < 1e-12);
    }

    #[test]
    fn overflowing_ratio_rejected() {
        let err = local_roots(&[1e300, 0.0, 1e-10], 1e-13).unwrap_err();
        assert!(matches!(err, ChebError::InvalidArgument(_)));
    }

    #[test]
    fn clamps_single_root_onto_domain() {
        let r = local_roots(&[1.0 + 1e-15, 1.0], 1e-13).unwrap();
        assert_eq!(r, vec![-1.0]);
    }

    #[test]
    fn high_degree_triggers_subdivision() {
        // T_60 has 60 roots cos((2k-1) pi / 120).
        let mut c = vec![0.0; 61];
        c[60] = 1.0;
        let r = solve(&c);
        assert_eq!(r.len(), 60);
        for (k, &x) in r.iter().enumerate() {
            let j = 60 - k;
            let expected = ((2 * j - 1) as f64 * std::f64::consts::PI / 120.0).cos();
            assert!((x - expected).abs() < 1e-8, "root {k}: {x} vs {expected}");
        }
    }

    #[test]
    fn depth_guard_still_returns_roots() {
        let cfg = ChebConfig {
            max_subdivision_depth: 0,
            ..ChebConfig::default()
        };
        let mut c = vec![0.0; 61];
        c[60] = 1.0;
        let r = roots_on_canonical_domain(&c, cfg.default_htol(), &cfg).unwrap();
        assert_eq!(r.len(), 60);
    }

    #[test]
    fn trailing_zeros_lower_degree() {
        // 0.5 + x padded with zeros
        let r = solve(&[0.5, 1.0, 0.0, 0.0]);
        assert_eq!(r.len(), 1);
        assert!((r[0] + 0.5).abs() < TOL);
    }

    #[test]
    fn non_finite_rejected() {
        let cfg = ChebConfig::default();
        assert!(roots_on_canonical_domain(&[f64::NAN, 1.0], 1e-12, &cfg).is_err());
    }

    #[test]
    fn negative_htol_rejected() {
        let cfg = ChebConfig::default();
        assert!(roots_on_canonical_domain(&[0.0, 1.0], -1.0, &cfg).is_err());
    }
}
