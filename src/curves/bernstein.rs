use std::ops::{Add, Mul};

use crate::curve_error::{CurveError, CurveResult};
use crate::zero::Zero;

// Exact for n up to ~50; every intermediate value is an integer.
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n + 1 - i) as f64 / i as f64)
}

/// `B_{i,n}(u) = C(n, i) u^i (1 - u)^(n - i)`, with `0^0 = 1`.
pub fn bernstein_basis(i: usize, n: usize, u: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial_coefficient(n, i) * u.powi(i as i32) * (1.0 - u).powi((n - i) as i32)
}

/// Evaluates the curve as the explicit sum `Σ B_{i,n}(u) P_i`.
///
/// Same curve as [`super::de_casteljau::evaluate`], but each control value
/// is weighted once by its basis polynomial instead of blended pairwise.
pub fn evaluate_bernstein<T>(points: &[T], u: f64) -> CurveResult<T>
where
    T: Zero + Clone + Add<Output = T> + Mul<f64, Output = T>,
{
    if points.is_empty() {
        return Err(CurveError::invalid_input(
            "cannot evaluate a curve without control points",
        ));
    }
    Ok(bernstein_sum(points, u))
}

pub(crate) fn bernstein_sum<T>(points: &[T], u: f64) -> T
where
    T: Zero + Clone + Add<Output = T> + Mul<f64, Output = T>,
{
    let n = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, p)| {
            acc + p.clone() * bernstein_basis(i, n, u)
        })
}
