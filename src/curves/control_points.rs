use crate::curve_error::{CurveError, CurveResult};

/// The control polygon of a curve: a non-empty, ordered list of `n + 1`
/// control values for a degree `n` curve.
///
/// The sequence is only ever swapped out as a whole (see [`ControlPoints::replace`]),
/// never edited in place, so no evaluation can observe a half-updated polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints<T> {
    points: Vec<T>,
}

impl<T> ControlPoints<T> {
    pub fn try_new(points: Vec<T>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::invalid_input(
                "a curve needs at least one control point",
            ));
        }
        Ok(Self { points })
    }

    pub(super) fn new_unchecked(points: Vec<T>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Replaces the whole polygon. On error the previous points are kept.
    pub fn replace(&mut self, points: Vec<T>) -> CurveResult<()> {
        *self = Self::try_new(points)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    // Never true, the constructor rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    pub fn as_slice(&self) -> &[T] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    pub fn first(&self) -> &T {
        &self.points[0]
    }

    pub fn last(&self) -> &T {
        &self.points[self.points.len() - 1]
    }

    pub fn into_vec(self) -> Vec<T> {
        self.points
    }
}

impl<T: Clone> ControlPoints<T> {
    /// `count` copies of `value`, e.g. a flat polygon after the user changes
    /// the number of control points.
    pub fn uniform(count: usize, value: T) -> CurveResult<Self> {
        Self::try_new(vec![value; count])
    }
}

impl<T> AsRef<[T]> for ControlPoints<T> {
    fn as_ref(&self) -> &[T] {
        &self.points
    }
}

impl<T> TryFrom<Vec<T>> for ControlPoints<T> {
    type Error = CurveError;

    fn try_from(points: Vec<T>) -> CurveResult<Self> {
        Self::try_new(points)
    }
}

impl<'a, T> IntoIterator for &'a ControlPoints<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
