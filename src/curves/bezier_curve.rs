use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

use crate::{
    curve_error::CurveResult,
    curves::{
        algorithm::Algorithm, bernstein::bernstein_sum, control_points::ControlPoints,
        curve_like::CurveLike, de_casteljau::reduce,
    },
    zero::Zero,
};

// Represents a curve in the form of sum_i P_i B_{i,n}(t) over t in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<T> {
    control_points: ControlPoints<T>,
}

impl<T> BezierCurve<T> {
    pub fn new(control_points: ControlPoints<T>) -> Self {
        Self { control_points }
    }

    pub fn try_new(points: Vec<T>) -> CurveResult<Self> {
        Ok(Self::new(ControlPoints::try_new(points)?))
    }

    pub fn degree(&self) -> usize {
        self.control_points.degree()
    }

    pub fn control_points(&self) -> &ControlPoints<T> {
        &self.control_points
    }
}

impl<T> BezierCurve<T>
where
    T: Zero + Clone + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    pub fn eval(&self, t: f64) -> T {
        let mut beta = self.control_points.as_slice().to_vec();
        reduce(&mut beta, t);
        beta[0].clone()
    }

    pub fn eval_with(&self, t: f64, algorithm: Algorithm) -> T {
        match algorithm {
            Algorithm::Nli => self.eval(t),
            Algorithm::Bb => bernstein_sum(self.control_points.as_slice(), t),
        }
    }

    // Use de Casteljau's algorithm to split the curve at t. The left half
    // covers [0, t] and the right half [t, 1], each reparametrized to [0, 1].
    pub fn subdivide(&self, t: f64) -> (BezierCurve<T>, BezierCurve<T>) {
        let mut beta = self.control_points.as_slice().to_vec();
        let n = beta.len();
        let mut left = vec![T::zero(); n];
        let mut right = vec![T::zero(); n];

        left[0] = beta[0].clone();
        right[n - 1] = beta[n - 1].clone();
        for j in 1..n {
            for k in 0..n - j {
                beta[k] = beta[k].clone() * (1.0 - t) + beta[k + 1].clone() * t;
            }
            left[j] = beta[0].clone();
            right[n - j - 1] = beta[n - j - 1].clone();
        }

        (Self::from_nonempty(left), Self::from_nonempty(right))
    }

    // Hodograph: degree n - 1 with control values n (P_{i+1} - P_i).
    pub fn derivative(&self) -> BezierCurve<T> {
        let n = self.degree();
        if n == 0 {
            return Self::from_nonempty(vec![T::zero()]);
        }

        let scale = n as f64;
        let coefficients = self.control_points.as_slice();
        let deriv_coeffs = (0..n)
            .map(|i| (coefficients[i + 1].clone() - coefficients[i].clone()) * scale)
            .collect();
        Self::from_nonempty(deriv_coeffs)
    }

    // Only for vectors built from an existing non-empty polygon.
    fn from_nonempty(points: Vec<T>) -> Self {
        Self::new(ControlPoints::new_unchecked(points))
    }
}

impl<T> CurveLike<T> for BezierCurve<T>
where
    T: Zero + Clone + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    fn span(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn eval(&self, t: f64) -> T {
        self.eval(t)
    }
}

impl<T> Display for BezierCurve<T>
where
    T: Display + Zero + PartialEq,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let n = self.degree();
        for (i, coeff) in self.control_points.iter().enumerate() {
            if *coeff != T::zero() {
                if !first {
                    write!(f, " + ")?;
                }
                write!(f, "{} B_{{{},{}}}(t)", coeff, i, n)?;
                first = false;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
