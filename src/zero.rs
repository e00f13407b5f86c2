use glam::{DVec2, DVec3};

use crate::primitives::efloat::EFloat64;

/// Additive identity for control values.
pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for EFloat64 {
    fn zero() -> Self {
        EFloat64::zero()
    }
}

impl Zero for DVec2 {
    fn zero() -> Self {
        DVec2::ZERO
    }
}

impl Zero for DVec3 {
    fn zero() -> Self {
        DVec3::ZERO
    }
}
