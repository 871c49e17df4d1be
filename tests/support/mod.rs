//! Test support library
//! Provides various helper functions & utilities for tests.

use roundel::float_types::Real;

/// Approximate scalar equality with an explicit tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
