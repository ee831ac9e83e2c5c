//! Rendering side of the Kiepert viewer: camera, GPU-ready mesh packing,
//! configuration and the session that drives a [`MeshRenderer`].

pub mod camera;
pub mod config;
pub mod pipeline;
pub mod recorder;
pub mod session;
pub mod texture;

// Re-export main types
pub use camera::Camera;
pub use config::{MarkerConfig, SessionConfig, TextureConfig};
pub use pipeline::{prepare_mesh, DrawUniforms, GpuVertex, RenderMesh};
pub use recorder::{DrawCall, RecordingRenderer, Upload};
pub use session::{MeshHandle, MeshRenderer, MeshStats, RenderSession};
pub use texture::{TextureInfo, TextureState};
