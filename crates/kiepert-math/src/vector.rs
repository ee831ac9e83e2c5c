use kiepert_core::Tolerance;

use crate::Vector3;

/// Normalize `v`, or return `fallback` when its length is zero within `tolerance`.
///
/// Unlike `DVec3::normalize`, this never produces NaN components for
/// degenerate input.
pub fn normalize_or(v: Vector3, tolerance: Tolerance, fallback: Vector3) -> Vector3 {
    let len = v.length();
    if !len.is_finite() || tolerance.is_zero(len) {
        fallback
    } else {
        v / len
    }
}
