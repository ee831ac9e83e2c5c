//! Triangle mesh of the marker sphere.

use kiepert_geometry::{SphericalSurface, Surface};
use kiepert_math::Point3;

use crate::grid::{tessellate_grid, AngleGrid, AngleUnit};
use crate::triangle_mesh::TriangleMesh;

/// Angular step of the marker sphere grid, in radians.
pub const DEFAULT_SPHERE_STEP: f64 = 0.1;

/// Tessellate a sphere of `radius` centred at the origin, stepping longitude
/// over `[0, 2π)` and polar angle over `[0, π)` by `angular_step` radians.
///
/// The triangle count follows from the step alone (63 x 32 cells for 0.1),
/// so callers must not assume a fixed vertex count. No texture coordinates.
pub fn build_sphere_mesh(radius: f64, angular_step: f64) -> TriangleMesh {
    let sphere = SphericalSurface::new(Point3::ZERO, radius);
    let longitude = AngleGrid::over_domain(sphere.domain_u(), angular_step, AngleUnit::Radians);
    let polar = AngleGrid::over_domain(sphere.domain_v(), angular_step, AngleUnit::Radians);
    tessellate_grid(&sphere, &longitude, &polar, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_counts() {
        let mesh = build_sphere_mesh(0.15, DEFAULT_SPHERE_STEP);
        assert_eq!(mesh.triangle_count(), 63 * 32 * 2);
        assert!(!mesh.has_texcoords());
    }

    #[test]
    fn test_points_on_sphere_with_outward_normals() {
        let radius = 0.2;
        let mesh = build_sphere_mesh(radius, DEFAULT_SPHERE_STEP);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((p.length() - radius).abs() < 1e-12, "dist={}", p.length());
            assert!((n.length() - 1.0).abs() < 1e-12);
            assert!((*n - p.normalize()).length() < 1e-9);
        }
    }

    #[test]
    fn test_radius_does_not_change_count() {
        let small = build_sphere_mesh(0.1, DEFAULT_SPHERE_STEP);
        let large = build_sphere_mesh(0.2, DEFAULT_SPHERE_STEP);
        assert_eq!(small.vertex_count(), large.vertex_count());

        let coarse = build_sphere_mesh(0.1, 0.5);
        assert!(coarse.vertex_count() < small.vertex_count());
    }

    #[test]
    fn test_unusable_step_builds_nothing() {
        assert_eq!(build_sphere_mesh(0.15, 1e-9).vertex_count(), 0);
        assert_eq!(build_sphere_mesh(0.15, 0.0).vertex_count(), 0);
        // Wider than the polar range.
        assert_eq!(build_sphere_mesh(0.15, 4.0).vertex_count(), 0);
    }
}
