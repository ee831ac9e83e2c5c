//! Numeric surface normals by forward finite differences.

use kiepert_core::Tolerance;
use kiepert_math::{normalize_or, Point3, Vector3};

/// Default forward-difference step, in the parameter units of the surface.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Estimate the unit normal of the point function `point` at `(u, v)`.
///
/// The partial derivatives are taken as backward-signed forward differences
/// `dU = (P(u,v) - P(u+ε,v)) / ε` and `dV = (P(u,v) - P(u,v+ε)) / ε`, and the
/// normal is `normalize(dU × dV)`. Both differences carry the same sign, so
/// the orientation equals that of `∂P/∂u × ∂P/∂v`.
///
/// Where the two differences are parallel (the cross product has zero length
/// within the default linear tolerance) the zero vector is returned instead
/// of NaN components.
pub fn finite_difference_normal<F>(point: F, u: f64, v: f64, epsilon: f64) -> Vector3
where
    F: Fn(f64, f64) -> Point3,
{
    let p = point(u, v);
    let du = (p - point(u + epsilon, v)) / epsilon;
    let dv = (p - point(u, v + epsilon)) / epsilon;
    normalize_or(du.cross(dv), Tolerance::default(), Vector3::ZERO)
}
