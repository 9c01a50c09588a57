//! Newton refinement of computed roots.

use tracing::trace;

use crate::error::ChebError;

/// A real function that can be sampled at many points at once.
pub trait Evaluate {
    fn evaluate(&self, xs: &[f64]) -> Vec<f64>;
}

/// A function that can produce its own derivative.
pub trait Differentiable: Evaluate {
    type Derivative: Evaluate;

    fn derivative(&self) -> Self::Derivative;
}

/// Refine `roots` of `fun` by simultaneous Newton iteration.
///
/// Iterates while the largest step exceeds `tol`, for at most `max_iter`
/// steps. There is no convergence check beyond that; the result is refined,
/// not certified.
///
/// Errors if `fun` or its derivative returns a different number of values
/// than it was given points.
pub fn polish_roots<F: Differentiable>(
    fun: &F,
    roots: &[f64],
    tol: f64,
    max_iter: usize,
) -> Result<Vec<f64>, ChebError> {
    let mut rts = roots.to_vec();
    if rts.is_empty() {
        return Ok(rts);
    }
    let dfun = fun.derivative();

    for count in 0..max_iter {
        let f = fun.evaluate(&rts);
        check_len("function values", rts.len(), f.len())?;
        let df = dfun.evaluate(&rts);
        check_len("derivative values", rts.len(), df.len())?;
        let mut step_norm = 0.0_f64;
        for ((r, fx), dfx) in rts.iter_mut().zip(f).zip(df) {
            let step = fx / dfx;
            *r -= step;
            step_norm = step_norm.max(step.abs());
        }
        trace!(iteration = count + 1, step = step_norm, "newton step");
        if !(step_norm > tol) {
            break;
        }
    }
    Ok(rts)
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), ChebError> {
    if expected != found {
        return Err(ChebError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}
