use glam::DVec2;
use tracing::debug;

use crate::{
    curve_error::{CurveError, CurveResult, WithContext},
    curves::{algorithm::Algorithm, curve_like::CurveLike},
};

/// Number of samples a host uses when it has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Parameter of sample `i` out of `sample_count` evenly spaced samples on
/// `[0, 1]`. The first is exactly `0.0` and the last exactly `1.0`.
pub fn parameter_at(i: usize, sample_count: usize) -> f64 {
    i as f64 / (sample_count - 1) as f64
}

fn check_sample_count(sample_count: usize) -> CurveResult<()> {
    if sample_count < 2 {
        return Err(CurveError::invalid_input(format!(
            "need at least 2 samples to span a curve, got {}",
            sample_count
        )));
    }
    Ok(())
}

/// Samples the graph of the polynomial function given by the control
/// ordinates `points`, returning `(u_i, y(u_i))` for `sample_count` evenly
/// spaced parameters.
pub fn sample(points: &[f64], sample_count: usize) -> CurveResult<Vec<DVec2>> {
    sample_with(points, sample_count, Algorithm::Nli)
}

pub fn sample_with(
    points: &[f64],
    sample_count: usize,
    algorithm: Algorithm,
) -> CurveResult<Vec<DVec2>> {
    let context = |err: CurveError| {
        err.with_context(format!(
            "sampling {} control points at {} parameters",
            points.len(),
            sample_count
        ))
    };

    check_sample_count(sample_count).with_context(&context)?;
    if points.is_empty() {
        return Err(CurveError::invalid_input(
            "cannot sample a curve without control points",
        ))
        .with_context(&context);
    }

    debug!(
        degree = points.len() - 1,
        sample_count,
        %algorithm,
        "sampling polynomial function"
    );
    (0..sample_count)
        .map(|i| {
            let u = parameter_at(i, sample_count);
            let y = algorithm.evaluate(points, u).with_context(&context)?;
            Ok(DVec2::new(u, y))
        })
        .collect()
}

/// Samples a parametric curve evenly over its span into a polyline.
pub fn rasterize_curve<T, C>(curve: &C, sample_count: usize) -> CurveResult<Vec<T>>
where
    C: CurveLike<T>,
{
    check_sample_count(sample_count)?;
    let (start, end) = curve.span();
    debug!(start, end, sample_count, "rasterizing curve");
    Ok((0..sample_count)
        .map(|i| curve.eval(start + (end - start) * parameter_at(i, sample_count)))
        .collect())
}
