use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

use float_next_after::NextAfter;

/// A float carried as an interval `[lower_bound, upper_bound]`.
///
/// Every arithmetic operation rounds the resulting bounds outward by one ulp,
/// so a value computed from exact inputs always encloses the result the same
/// expression would produce in plain `f64` arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EFloat64 {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl EFloat64 {
    pub fn new(lower_bound: f64, upper_bound: f64) -> Self {
        debug_assert!(
            !(lower_bound > upper_bound),
            "EFloat64 bounds out of order: [{}, {}]",
            lower_bound,
            upper_bound
        );
        Self {
            lower_bound,
            upper_bound,
        }
    }

    pub fn zero() -> Self {
        Self::from(0.0)
    }

    pub fn one() -> Self {
        Self::from(1.0)
    }

    // Widen by one ulp in each direction.
    fn rounded(lower_bound: f64, upper_bound: f64) -> Self {
        Self::new(
            lower_bound.next_after(f64::NEG_INFINITY),
            upper_bound.next_after(f64::INFINITY),
        )
    }

    /// Midpoint of the interval.
    pub fn to_f64(&self) -> f64 {
        self.lower_bound * 0.5 + self.upper_bound * 0.5
    }

    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }
}

impl From<f64> for EFloat64 {
    fn from(value: f64) -> Self {
        Self::new(value, value)
    }
}

impl Add for EFloat64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::rounded(
            self.lower_bound + rhs.lower_bound,
            self.upper_bound + rhs.upper_bound,
        )
    }
}

impl Sub for EFloat64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::rounded(
            self.lower_bound - rhs.upper_bound,
            self.upper_bound - rhs.lower_bound,
        )
    }
}

impl Mul for EFloat64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let products = [
            self.lower_bound * rhs.lower_bound,
            self.lower_bound * rhs.upper_bound,
            self.upper_bound * rhs.lower_bound,
            self.upper_bound * rhs.upper_bound,
        ];
        let lower = products.iter().copied().fold(f64::INFINITY, f64::min);
        let upper = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::rounded(lower, upper)
    }
}

impl Mul<f64> for EFloat64 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        if rhs >= 0.0 {
            Self::rounded(self.lower_bound * rhs, self.upper_bound * rhs)
        } else {
            Self::rounded(self.upper_bound * rhs, self.lower_bound * rhs)
        }
    }
}

impl Display for EFloat64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lower_bound == self.upper_bound {
            write!(f, "{}", self.lower_bound)
        } else {
            write!(f, "[{}, {}]", self.lower_bound, self.upper_bound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::*;

    #[test]
    fn test_exact_values_have_zero_width() {
        let x = EFloat64::from(2.5);
        assert_eq!(x.width(), 0.0);
        assert_eq!(x.to_f64(), 2.5);
        assert_eq!(x.to_string(), "2.5");
    }

    #[test]
    fn test_operations_enclose_plain_f64() {
        let a = 0.1;
        let b = 0.7;
        let ea = EFloat64::from(a);
        let eb = EFloat64::from(b);

        assert!((ea + eb).contains(a + b));
        assert!((ea - eb).contains(a - b));
        assert!((ea * eb).contains(a * b));
        assert!((ea * 3.3).contains(a * 3.3));
        assert!((ea * -3.3).contains(a * -3.3));
    }

    #[test]
    fn test_rounding_widens_outward() {
        let sum = EFloat64::from(1.0) + EFloat64::from(2.0);
        assert_lt!(sum.lower_bound, 3.0);
        assert_gt!(sum.upper_bound, 3.0);
        assert_gt!(sum.width(), 0.0);
    }

    #[test]
    fn test_negative_scalar_keeps_bounds_ordered() {
        let x = EFloat64::new(1.0, 2.0) * -1.0;
        assert_le!(x.lower_bound, -2.0);
        assert_ge!(x.upper_bound, -1.0);
    }
}
