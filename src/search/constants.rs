// Configuration constants for the search module
pub const EPSILON: f64 = 1e-6;
pub const DEFAULT_TARGET: f64 = 100.0;
pub const DEFAULT_MAX_DIGITS: usize = 12;

// Hard cap on input length. Keeps every group value exactly representable in f64
// and the base-5 assignment counter within u64.
pub const MAX_SUPPORTED_DIGITS: usize = 15;
