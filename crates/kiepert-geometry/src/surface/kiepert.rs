//! Kiepert-like tube surface.

use std::f64::consts::TAU;

use kiepert_core::{KiepertError, Result};
use kiepert_core::traits::Validate;
use kiepert_math::{Point3, Vector3, DVec3};
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::differentiate::{finite_difference_normal, DEFAULT_EPSILON};

/// Shape constants `(a, b, c, d)` of the surface family.
///
/// `a` and `b` shape the cross-section profile `F`, `c` and `d` enter only
/// through `d² - c²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl SurfaceParams {
    pub const DEFAULT: SurfaceParams = SurfaceParams {
        a: 1.5,
        b: 3.0,
        c: 2.0,
        d: 1.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Profile function `F(θ) = a·b / sqrt(a² + sin²θ + b²·cos²θ)`.
    ///
    /// Never zero while `a` and `b` are non-zero.
    pub fn profile(&self, theta: f64) -> f64 {
        let (sin, cos) = theta.sin_cos();
        (self.a * self.b) / (self.a * self.a + sin * sin + self.b * self.b * cos * cos).sqrt()
    }

    /// The `d² - c²` term.
    pub fn offset(&self) -> f64 {
        self.d * self.d - self.c * self.c
    }
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Validate for SurfaceParams {
    fn validate(&self) -> Result<()> {
        let values = [self.a, self.b, self.c, self.d];
        if values.iter().any(|x| !x.is_finite()) {
            return Err(KiepertError::Geometry(format!(
                "surface parameters must be finite: {:?}",
                self
            )));
        }
        if self.a <= 0.0 || self.b <= 0.0 {
            return Err(KiepertError::Geometry(format!(
                "surface parameters a and b must be positive (a={}, b={})",
                self.a, self.b
            )));
        }
        Ok(())
    }
}

/// A closed tube surface parameterized by `u` (around the tube) and `v`
/// (around the axis), both in `[0, 2*PI]`.
///
/// ```text
/// r(u, v) = ½·(F(v)·(1 + cos u) + (d² - c²)·(1 - cos u) / F(v))
/// P(u, v) = (r·cos v, r·sin v, ½·(F(v) - (d² - c²) / F(v))·sin u)
/// ```
///
/// Normals are estimated numerically with a forward difference of step
/// `epsilon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KiepertSurface {
    pub params: SurfaceParams,
    pub epsilon: f64,
}

impl KiepertSurface {
    pub fn new(params: SurfaceParams) -> Self {
        Self {
            params,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for KiepertSurface {
    fn default() -> Self {
        Self::new(SurfaceParams::default())
    }
}

impl Surface for KiepertSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let f = self.params.profile(v);
        let k = self.params.offset();
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();

        let radial = 0.5 * (f * (1.0 + cos_u) + k * (1.0 - cos_u) / f);
        let height = 0.5 * (f - k / f) * sin_u;
        DVec3::new(radial * cos_v, radial * sin_v, height)
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        finite_difference_normal(|u, v| self.point_at(u, v), u, v, self.epsilon)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_origin_matches_closed_form() {
        let surface = KiepertSurface::default();
        let p = surface.point_at(0.0, 0.0);

        // F(0) = ab / sqrt(a² + b²)
        let f0 = 1.5 * 3.0 / (1.5f64 * 1.5 + 3.0 * 3.0).sqrt();
        assert!((p.x - f0).abs() < 1e-12, "x: expected {}, got {}", f0, p.x);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_point_is_bit_deterministic() {
        let surface = KiepertSurface::default();
        for i in 0..36 {
            for j in 0..36 {
                let u = i as f64 * 10f64.to_radians();
                let v = j as f64 * 10f64.to_radians();
                let a = surface.point_at(u, v);
                let b = surface.point_at(u, v);
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
                assert_eq!(a.z.to_bits(), b.z.to_bits());
            }
        }
    }

    #[test]
    fn test_profile_extremes() {
        let params = SurfaceParams::default();
        // cos²θ = 1: a·b / sqrt(a² + b²)
        let at_zero = params.profile(0.0);
        // sin²θ = 1: a·b / sqrt(a² + 1)
        let at_quarter = params.profile(FRAC_PI_2);
        assert!((at_zero - 4.5 / 11.25f64.sqrt()).abs() < 1e-12);
        assert!((at_quarter - 4.5 / 3.25f64.sqrt()).abs() < 1e-12);
        assert!(params.offset() == -3.0);
    }

    #[test]
    fn test_z_vanishes_at_u_zero_and_pi() {
        let surface = KiepertSurface::default();
        for j in 0..24 {
            let v = j as f64 * PI / 12.0;
            assert!(surface.point_at(0.0, v).z.abs() < 1e-12);
            assert!(surface.point_at(PI, v).z.abs() < 1e-12);
        }
    }

    #[test]
    fn test_inner_side_at_u_pi() {
        // At u = π only the (d² - c²)/F term survives in the radial component.
        let surface = KiepertSurface::default();
        let p = surface.point_at(PI, 0.0);
        let expected = -3.0 / surface.params.profile(0.0);
        assert!((p.x - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rotational_profile_in_v() {
        // The radial distance depends on v only through F(v), so v and v + π agree.
        let surface = KiepertSurface::default();
        let p1 = surface.point_at(1.0, 0.4);
        let p2 = surface.point_at(1.0, 0.4 + PI);
        let r1 = (p1.x * p1.x + p1.y * p1.y).sqrt();
        let r2 = (p2.x * p2.x + p2.y * p2.y).sqrt();
        assert!((r1 - r2).abs() < 1e-12);
        assert!((p1.z - p2.z).abs() < 1e-12);
    }

    #[test]
    fn test_normals_are_unit_and_orthogonal_to_tangents() {
        let surface = KiepertSurface::default();
        for i in 1..12 {
            for j in 0..12 {
                let u = i as f64 * PI / 6.0 + 0.05;
                let v = j as f64 * PI / 6.0 + 0.05;
                let n = surface.normal_at(u, v);
                assert!((n.length() - 1.0).abs() < 1e-5, "normal length {}", n.length());

                let h = 1e-6;
                let du = surface.point_at(u + h, v) - surface.point_at(u - h, v);
                let dv = surface.point_at(u, v + h) - surface.point_at(u, v - h);
                assert!(n.dot(du.normalize()).abs() < 1e-2);
                assert!(n.dot(dv.normalize()).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn test_validate_params() {
        assert!(SurfaceParams::default().validate().is_ok());
        assert!(SurfaceParams::new(1.5, 0.0, 2.0, 1.0).validate().is_err());
        assert!(SurfaceParams::new(-1.0, 3.0, 2.0, 1.0).validate().is_err());
        assert!(SurfaceParams::new(1.5, 3.0, f64::NAN, 1.0).validate().is_err());
    }
}
