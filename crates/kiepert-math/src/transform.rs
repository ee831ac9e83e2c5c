use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Model transform applied to a mesh at draw time, stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    /// Pure translation, used to place the marker sphere on the surface.
    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().project_point3(p)
    }

    /// Column-major matrix narrowed to `f32` for GPU uniforms.
    pub fn to_cols_f32(&self) -> [[f32; 4]; 4] {
        let mut out = [[0.0f32; 4]; 4];
        for (col, chunk) in out.iter_mut().zip(self.matrix.chunks_exact(4)) {
            for (dst, &src) in col.iter_mut().zip(chunk) {
                *dst = src as f32;
            }
        }
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
