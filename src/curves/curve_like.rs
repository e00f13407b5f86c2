// CurveLike is the parametric view of a curve that the rasterizer needs:
// a parameter domain and a way to evaluate a point inside it.
pub trait CurveLike<T> {
    // Parameter domain (start, end).
    fn span(&self) -> (f64, f64);

    // Point on the curve at parameter t.
    fn eval(&self, t: f64) -> T;
}
