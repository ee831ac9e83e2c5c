//! A [`MeshRenderer`] that records what it is asked to do instead of drawing.
//!
//! Used by the headless viewer and by tests.

use kiepert_core::{KiepertError, Result};

use crate::pipeline::{DrawUniforms, RenderMesh};
use crate::session::{MeshHandle, MeshRenderer};

/// One recorded mesh upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub label: String,
    pub vertex_count: usize,
    pub textured: bool,
}

/// One recorded draw, tagged with the frame it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub frame: usize,
    pub mesh: MeshHandle,
    pub uniforms: DrawUniforms,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    uploads: Vec<Upload>,
    draws: Vec<DrawCall>,
    frames: usize,
    failure: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer whose pipeline setup fails, as a shader that does not
    /// compile would.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> &[Upload] {
        &self.uploads
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Number of frames begun so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Draws of the most recent frame.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .draws
            .iter()
            .position(|d| d.frame == self.frames)
            .unwrap_or(self.draws.len());
        &self.draws[start..]
    }

    pub fn label(&self, handle: MeshHandle) -> Option<&str> {
        self.uploads.get(handle.0).map(|u| u.label.as_str())
    }
}

impl MeshRenderer for RecordingRenderer {
    fn begin_frame(&mut self, _clear_color: [f32; 4]) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn upload(&mut self, label: &str, mesh: &RenderMesh) -> Result<MeshHandle> {
        if let Some(reason) = &self.failure {
            return Err(KiepertError::Pipeline(reason.clone()));
        }
        self.uploads.push(Upload {
            label: label.to_string(),
            vertex_count: mesh.vertex_count(),
            textured: mesh.has_texcoords(),
        });
        Ok(MeshHandle(self.uploads.len() - 1))
    }

    fn draw(&mut self, mesh: MeshHandle, uniforms: &DrawUniforms) -> Result<()> {
        if mesh.0 >= self.uploads.len() {
            return Err(KiepertError::InvalidOperation(format!(
                "draw of unknown mesh {:?}",
                mesh
            )));
        }
        self.draws.push(DrawCall {
            frame: self.frames,
            mesh,
            uniforms: *uniforms,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use kiepert_math::Transform;

    fn empty_mesh() -> RenderMesh {
        RenderMesh {
            vertices: Vec::new(),
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: None,
        }
    }

    #[test]
    fn test_handles_are_sequential() {
        let mut renderer = RecordingRenderer::new();
        let a = renderer.upload("a", &empty_mesh()).unwrap();
        let b = renderer.upload("b", &empty_mesh()).unwrap();
        assert_eq!((a, b), (MeshHandle(0), MeshHandle(1)));
        assert_eq!(renderer.label(b), Some("b"));
    }

    #[test]
    fn test_failing_upload() {
        let mut renderer = RecordingRenderer::failing("link failed");
        let err = renderer.upload("surface", &empty_mesh()).unwrap_err();
        assert!(matches!(err, KiepertError::Pipeline(ref m) if m == "link failed"));
    }

    #[test]
    fn test_unknown_handle_rejected() {
        let mut renderer = RecordingRenderer::new();
        let uniforms = DrawUniforms::new(&Camera::default(), &Transform::identity(), [1.0; 4], false);
        assert!(renderer.draw(MeshHandle(3), &uniforms).is_err());
    }

    #[test]
    fn test_last_frame() {
        let mut renderer = RecordingRenderer::new();
        let handle = renderer.upload("a", &empty_mesh()).unwrap();
        let uniforms = DrawUniforms::new(&Camera::default(), &Transform::identity(), [1.0; 4], false);
        for _ in 0..3 {
            renderer.begin_frame([0.0; 4]).unwrap();
            renderer.draw(handle, &uniforms).unwrap();
            renderer.draw(handle, &uniforms).unwrap();
        }
        assert_eq!(renderer.frame_count(), 3);
        assert_eq!(renderer.draws().len(), 6);
        assert_eq!(renderer.last_frame().len(), 2);
        assert!(renderer.last_frame().iter().all(|d| d.frame == 3));
    }
}
