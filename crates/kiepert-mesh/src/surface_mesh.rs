//! Triangle mesh of the Kiepert surface.

use kiepert_geometry::{KiepertSurface, Surface, SurfaceParams, DEFAULT_EPSILON};

use crate::grid::{tessellate_grid, AngleGrid, AngleUnit};
use crate::triangle_mesh::TriangleMesh;

/// Resolution and output options for [`build_surface_mesh_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMeshOptions {
    /// Grid step in degrees, applied to both `u` and `v` over `[0, 360]`.
    pub grid_step_degrees: f64,
    /// Forward-difference step for normal estimation, in radians.
    pub epsilon: f64,
    /// Emit `(u/360, v/360)` texture coordinates.
    pub texcoords: bool,
}

impl SurfaceMeshOptions {
    pub const DEFAULT_GRID_STEP_DEGREES: f64 = 5.0;
}

impl Default for SurfaceMeshOptions {
    fn default() -> Self {
        Self {
            grid_step_degrees: Self::DEFAULT_GRID_STEP_DEGREES,
            epsilon: DEFAULT_EPSILON,
            texcoords: true,
        }
    }
}

/// Tessellate the surface for `params` on a `grid_step_degrees` grid, with
/// texture coordinates and the default normal epsilon.
///
/// Produces `6 * (360 / grid_step_degrees)²` vertices when the step divides
/// 360, and an empty mesh for steps the grid rejects (more than
/// [`AngleGrid::MAX_CELLS`] cells per axis). `params` must keep `F(θ)`
/// non-zero (`a, b > 0`); this is not checked.
pub fn build_surface_mesh(params: SurfaceParams, grid_step_degrees: f64) -> TriangleMesh {
    build_surface_mesh_with(
        params,
        &SurfaceMeshOptions {
            grid_step_degrees,
            ..SurfaceMeshOptions::default()
        },
    )
}

pub fn build_surface_mesh_with(params: SurfaceParams, options: &SurfaceMeshOptions) -> TriangleMesh {
    let surface = KiepertSurface::new(params).with_epsilon(options.epsilon);
    let step = options.grid_step_degrees;
    let u_grid = AngleGrid::over_domain(surface.domain_u(), step, AngleUnit::Degrees);
    let v_grid = AngleGrid::over_domain(surface.domain_v(), step, AngleUnit::Degrees);
    let mesh = tessellate_grid(&surface, &u_grid, &v_grid, options.texcoords);
    log::debug!(
        "surface mesh: step {}°, {} vertices",
        options.grid_step_degrees,
        mesh.vertex_count()
    );
    mesh
}
