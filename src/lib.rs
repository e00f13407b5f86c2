pub mod config;
pub mod curve_error;
pub mod curves;
pub mod primitives;
pub mod projects;
pub mod rasterize;
pub mod zero;
