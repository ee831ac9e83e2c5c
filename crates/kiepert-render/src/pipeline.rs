use bytemuck::{Pod, Zeroable};
use kiepert_math::{Point2, Point3, Transform, Vector3};
use kiepert_mesh::TriangleMesh;

use crate::camera::Camera;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3, uv: Point2) -> Self {
        Self {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
            uv: [uv.x as f32, uv.y as f32],
        }
    }
}

/// Mesh data in the form handed to the rendering backend.
///
/// `positions`, `normals` and `texcoords` are the parallel flat arrays
/// (3, 3 and 2 floats per vertex, same vertex order); `vertices` is the same
/// data interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub texcoords: Option<Vec<f32>>,
}

impl RenderMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn has_texcoords(&self) -> bool {
        self.texcoords.is_some()
    }

    /// Interleaved vertex data as raw bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Convert a TriangleMesh to GPU-ready buffers.
///
/// Meshes without texture coordinates get `(0, 0)` in the interleaved data
/// and `None` for `texcoords`.
pub fn prepare_mesh(mesh: &TriangleMesh) -> RenderMesh {
    let vertices = (0..mesh.vertex_count())
        .map(|i| {
            let pos = mesh.positions[i];
            let normal = mesh.normals.get(i).copied().unwrap_or(Vector3::ZERO);
            let uv = mesh.uvs.get(i).copied().unwrap_or(Point2::ZERO);
            GpuVertex::from_mesh_vertex(pos, normal, uv)
        })
        .collect();

    RenderMesh {
        vertices,
        positions: mesh.position_buffer(),
        normals: mesh.normal_buffer(),
        texcoords: mesh.texcoord_buffer(),
    }
}

/// Per-draw uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub model_view_projection: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub use_texture: u32,
    pub _padding: [u32; 3],
}

impl DrawUniforms {
    /// Uniforms for drawing a mesh placed by `model` as seen through `camera`.
    pub fn new(camera: &Camera, model: &Transform, color: [f32; 4], textured: bool) -> Self {
        let mvp = Transform::from_mat4(camera.view_projection() * model.to_mat4());
        let normal = Transform::from_mat4(camera.normal_matrix());
        Self {
            model_view_projection: mvp.to_cols_f32(),
            normal_matrix: normal.to_cols_f32(),
            color,
            use_texture: u32::from(textured),
            _padding: [0; 3],
        }
    }

    pub fn textured(&self) -> bool {
        self.use_texture != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
