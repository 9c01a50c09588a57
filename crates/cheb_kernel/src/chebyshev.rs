//! Evaluation of Chebyshev series and Chebyshev interpolants.
//!
//! Clenshaw recurrence for coefficient space, the second barycentric
//! formula (Berrut & Trefethen 2004) for value space.

use crate::error::ChebError;
use crate::scalar::Scalar;

/// Evaluate the series `sum(c_k * T_k(x))` at every point of `points`.
///
/// Errors if `coeffs` is empty.
pub fn clenshaw_evaluate<T: Scalar>(points: &[f64], coeffs: &[T]) -> Result<Vec<T>, ChebError> {
    if coeffs.is_empty() {
        return Err(ChebError::EmptyInput("coefficients"));
    }
    Ok(points.iter().map(|&x| clenshaw(coeffs, x)).collect())
}

/// Clenshaw recurrence at a single point, two coefficients per step.
///
/// `coeffs` must be non-empty.
pub(crate) fn clenshaw<T: Scalar>(coeffs: &[T], x: f64) -> T {
    let n = coeffs.len();
    let two_x = 2.0 * x;
    let mut b_k1 = T::zero(); // b_{k+1}
    let mut b_k2 = T::zero(); // b_{k+2}

    // k = n-1, n-3, ... while k > 1
    let mut k = n - 1;
    while k > 1 {
        b_k2 = coeffs[k] + b_k1 * two_x - b_k2;
        b_k1 = coeffs[k - 1] + b_k2 * two_x - b_k1;
        k -= 2;
    }
    // One unpaired step left when the degree is odd.
    if (n - 1) % 2 == 1 {
        let b = coeffs[1] + b_k1 * two_x - b_k2;
        b_k2 = b_k1;
        b_k1 = b;
    }
    coeffs[0] + b_k1 * x - b_k2
}

/// Scalar form of [`clenshaw_evaluate`].
pub fn clenshaw_at<T: Scalar>(x: f64, coeffs: &[T]) -> Result<T, ChebError> {
    at_scalar(x, |xs| clenshaw_evaluate(xs, coeffs))
}

/// Evaluate the polynomial interpolating `values` at `nodes` with
/// barycentric `weights`.
///
/// Points that coincide exactly with a node return that node's value.
pub fn barycentric_evaluate<T: Scalar>(
    points: &[f64],
    values: &[T],
    nodes: &[f64],
    weights: &[f64],
) -> Result<Vec<T>, ChebError> {
    if nodes.is_empty() {
        return Err(ChebError::EmptyInput("interpolation nodes"));
    }
    if values.len() != nodes.len() {
        return Err(ChebError::LengthMismatch {
            what: "values",
            expected: nodes.len(),
            found: values.len(),
        });
    }
    if weights.len() != nodes.len() {
        return Err(ChebError::LengthMismatch {
            what: "weights",
            expected: nodes.len(),
            found: weights.len(),
        });
    }

    let mut out = if points.len() < 4 * nodes.len() {
        bary_point_outer(points, values, nodes, weights)
    } else {
        bary_node_outer(points, values, nodes, weights)
    };

    // Exact node hits divide 0/0 above; substitute the sampled value.
    for (k, o) in out.iter_mut().enumerate() {
        if o.is_nan() {
            if let Some(j) = nodes.iter().position(|&xj| xj == points[k]) {
                *o = values[j];
            }
        }
    }
    Ok(out)
}

/// Scalar form of [`barycentric_evaluate`].
pub fn barycentric_at<T: Scalar>(
    x: f64,
    values: &[T],
    nodes: &[f64],
    weights: &[f64],
) -> Result<T, ChebError> {
    at_scalar(x, |xs| barycentric_evaluate(xs, values, nodes, weights))
}

fn bary_point_outer<T: Scalar>(points: &[f64], values: &[T], nodes: &[f64], weights: &[f64]) -> Vec<T> {
    points
        .iter()
        .map(|&x| {
            let mut numer = T::zero();
            let mut denom = 0.0;
            for ((&xj, &wj), &fj) in nodes.iter().zip(weights).zip(values) {
                let t = wj / (x - xj);
                numer = numer + fj * t;
                denom += t;
            }
            numer / denom
        })
        .collect()
}

fn bary_node_outer<T: Scalar>(points: &[f64], values: &[T], nodes: &[f64], weights: &[f64]) -> Vec<T> {
    let mut numer = vec![T::zero(); points.len()];
    let mut denom = vec![0.0; points.len()];
    for ((&xj, &wj), &fj) in nodes.iter().zip(weights).zip(values) {
        for ((n, d), &x) in numer.iter_mut().zip(denom.iter_mut()).zip(points) {
            let t = wj / (x - xj);
            *n = *n + fj * t;
            *d += t;
        }
    }
    numer.into_iter().zip(denom).map(|(n, d)| n / d).collect()
}

/// Run an array evaluator on a single point and unwrap the single result.
fn at_scalar<T, F>(x: f64, eval: F) -> Result<T, ChebError>
where
    F: FnOnce(&[f64]) -> Result<Vec<T>, ChebError>,
{
    eval(&[x])?
        .into_iter()
        .next()
        .ok_or(ChebError::EmptyInput("evaluation result"))
}
