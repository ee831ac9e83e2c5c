//! Kiepert viewer geometry: parametric surfaces, finite-difference normals,
//! and the mapping from a marker's angular position to a point on the surface.

pub mod differentiate;
pub mod marker;
pub mod surface;

pub use differentiate::{finite_difference_normal, DEFAULT_EPSILON};
pub use marker::{MarkerCommand, MarkerPosition, MarkerProjector};
pub use surface::{KiepertSurface, SphericalSurface, Surface, SurfaceParams};
