// Configuration constants for the checker module
pub const EPSILON: f64 = 1e-9;
