pub mod algorithm;
pub mod bernstein;
pub mod bezier_curve;
pub mod control_points;
pub mod curve_like;
pub mod de_casteljau;
