//! Spherical surface.

use std::f64::consts::{PI, TAU};

use kiepert_math::{Point3, Vector3, DVec3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A spherical surface parameterized by longitude `u` in `[0, 2*PI]` and
/// polar angle `t` in `[0, PI]` measured from +Z.
///
/// `P(u, t) = center + radius * (cos(u)*sin(t), sin(u)*sin(t), cos(t))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalSurface {
    pub center: Point3,
    pub radius: f64,
}

impl SphericalSurface {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    fn direction(u: f64, t: f64) -> DVec3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_t, cos_t) = t.sin_cos();
        DVec3::new(cos_u * sin_t, sin_u * sin_t, cos_t)
    }
}

impl Surface for SphericalSurface {
    fn point_at(&self, u: f64, t: f64) -> Point3 {
        self.center + self.radius * Self::direction(u, t)
    }

    fn normal_at(&self, u: f64, t: f64) -> Vector3 {
        // Already unit length; the sign keeps it outward for negative radii.
        Self::direction(u, t) * self.radius.signum()
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, PI)
    }
}
