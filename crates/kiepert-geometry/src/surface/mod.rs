//! Surface traits and implementations.

mod kiepert;
mod spherical;

use kiepert_math::{Point3, Vector3};

pub use kiepert::{KiepertSurface, SurfaceParams};
pub use spherical::SphericalSurface;

/// Trait for parametric surfaces in 3D space.
///
/// Parameters are always in radians.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Evaluate the surface normal at parameters `(u, v)`.
    ///
    /// Implementations return a unit vector, or the zero vector where the
    /// normal is undefined.
    fn normal_at(&self, u: f64, v: f64) -> Vector3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);
}
