use std::ops::{Add, Mul};

use crate::curve_error::{CurveError, CurveResult};

/// Evaluates the degree `n` curve defined by `points` (n + 1 control values)
/// at parameter `u` by recursive linear interpolation.
///
/// Works for any real `u`; values outside `[0, 1]` extrapolate. The caller's
/// points are copied into a scratch buffer and left untouched.
pub fn evaluate<T>(points: &[T], u: f64) -> CurveResult<T>
where
    T: Clone + Add<Output = T> + Mul<f64, Output = T>,
{
    if points.is_empty() {
        return Err(CurveError::invalid_input(
            "cannot evaluate a curve without control points",
        ));
    }
    let mut beta = points.to_vec();
    reduce(&mut beta, u);
    Ok(beta[0].clone())
}

/// Runs all `n` blending rounds on `beta` in place, leaving the curve point
/// in `beta[0]`.
///
/// The inner loop must run with increasing `k`: when `beta[k]` is overwritten
/// in round `j`, `beta[k + 1]` still holds its value from round `j - 1`.
pub(crate) fn reduce<T>(beta: &mut [T], u: f64)
where
    T: Clone + Add<Output = T> + Mul<f64, Output = T>,
{
    let n = beta.len();
    for j in 1..n {
        for k in 0..n - j {
            beta[k] = beta[k].clone() * (1.0 - u) + beta[k + 1].clone() * u;
        }
    }
}
