pub mod grid;
pub mod sphere_mesh;
pub mod surface_mesh;
pub mod triangle_mesh;

pub use grid::{tessellate_grid, AngleGrid, AngleUnit};
pub use sphere_mesh::{build_sphere_mesh, DEFAULT_SPHERE_STEP};
pub use surface_mesh::{build_surface_mesh, build_surface_mesh_with, SurfaceMeshOptions};
pub use triangle_mesh::{TriangleMesh, Vertex};
