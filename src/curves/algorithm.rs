use std::fmt::{self, Display};
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve_error::{CurveError, CurveResult};
use crate::zero::Zero;

use super::{bernstein::evaluate_bernstein, de_casteljau::evaluate};

/// How a curve point is computed from its control values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Nested linear interpolation (de Casteljau).
    #[default]
    Nli,
    /// Direct sum over the Bernstein basis.
    Bb,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Nli, Algorithm::Bb];

    pub fn evaluate<T>(self, points: &[T], u: f64) -> CurveResult<T>
    where
        T: Zero + Clone + Add<Output = T> + Mul<f64, Output = T>,
    {
        match self {
            Algorithm::Nli => evaluate(points, u),
            Algorithm::Bb => evaluate_bernstein(points, u),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Nli => "nli",
            Algorithm::Bb => "bb",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CurveError;

    fn from_str(s: &str) -> CurveResult<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CurveError::invalid_input(format!(
                    "unknown algorithm '{}', expected one of: nli, bb",
                    s
                ))
            })
    }
}
