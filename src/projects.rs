//! Catalog of the teaching projects a host can offer, and the limits its
//! control-point editor works within.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;

/// Fewest control points the editor offers (a line).
pub const MIN_CONTROL_POINTS: usize = 2;
/// Most control points the editor offers (degree 20).
pub const MAX_CONTROL_POINTS: usize = 21;
/// Range the editor's ordinate sliders cover. Evaluation accepts any value.
pub const ORDINATE_RANGE: RangeInclusive<f64> = -3.0..=3.0;
/// Value every control point is reset to when the count changes.
pub const RESET_ORDINATE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Project {
    DeCasteljauFunctions,
    DeCasteljauBezier,
    PolynomialInterpolation,
    CubicSplineInterpolation,
    DeBoorSplineFunctions,
    DeBoorPolynomialCurves,
    DeBoorBSplineCurves,
    DeCasteljau3d,
    HermiteInterpolation,
    BestFitLineAndParabola,
    BernsteinAudio,
}

impl Project {
    pub const ALL: [Project; 11] = [
        Project::DeCasteljauFunctions,
        Project::DeCasteljauBezier,
        Project::PolynomialInterpolation,
        Project::CubicSplineInterpolation,
        Project::DeBoorSplineFunctions,
        Project::DeBoorPolynomialCurves,
        Project::DeBoorBSplineCurves,
        Project::DeCasteljau3d,
        Project::HermiteInterpolation,
        Project::BestFitLineAndParabola,
        Project::BernsteinAudio,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Project::DeCasteljauFunctions => "1.) De Casteljau Algorithm for Polynomial Functions",
            Project::DeCasteljauBezier => "2.) De Casteljau Algorithm for Bezier Curves",
            Project::PolynomialInterpolation => "3.) Interpolation with Polynomials",
            Project::CubicSplineInterpolation => "4.) Interpolation with Cubic Splines",
            Project::DeBoorSplineFunctions => "5.) De Boor Algorithm: Spline Functions",
            Project::DeBoorPolynomialCurves => "6.) De Boor Algorithm: Polynomial Curves",
            Project::DeBoorBSplineCurves => "7.) De Boor Algorithm: B-Spline Curves",
            Project::DeCasteljau3d => {
                "8.) 3D Curves: De Casteljau Algorithm for Polynomial Functions"
            }
            Project::HermiteInterpolation => "EC 1.) Hermite Interpolation (Osculation)",
            Project::BestFitLineAndParabola => "EC 2.) Best Fit Line and Parabola",
            Project::BernsteinAudio => "EC 3.) Audio Signals with Bernstein Polynomials",
        }
    }

    /// Whether this crate can drive the project. The de Casteljau projects are
    /// covered by evaluating scalar, planar or spatial control values.
    pub fn is_implemented(self) -> bool {
        matches!(
            self,
            Project::DeCasteljauFunctions | Project::DeCasteljauBezier | Project::DeCasteljau3d
        )
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
