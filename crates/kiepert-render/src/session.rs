//! The render session: everything a viewer needs between frames.

use kiepert_core::traits::Validate;
use kiepert_core::Result;
use kiepert_geometry::{MarkerCommand, MarkerPosition, MarkerProjector};
use kiepert_math::{Aabb3, Point3, Transform};
use kiepert_mesh::{build_sphere_mesh, build_surface_mesh_with, TriangleMesh};

use crate::camera::Camera;
use crate::config::SessionConfig;
use crate::pipeline::{prepare_mesh, DrawUniforms, RenderMesh};
use crate::texture::{TextureInfo, TextureState};

/// Opaque reference to a mesh uploaded to a [`MeshRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub usize);

/// The rendering backend the session drives.
///
/// Implementations own shaders, buffers and the draw call itself. Any error
/// from `upload` during session setup is fatal to the session.
pub trait MeshRenderer {
    fn begin_frame(&mut self, clear_color: [f32; 4]) -> Result<()>;
    fn upload(&mut self, label: &str, mesh: &RenderMesh) -> Result<MeshHandle>;
    fn draw(&mut self, mesh: MeshHandle, uniforms: &DrawUniforms) -> Result<()>;
}

/// Summary of a built mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub degenerate_normals: usize,
    pub bounds: Option<Aabb3>,
}

impl MeshStats {
    fn of(mesh: &TriangleMesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            degenerate_normals: mesh.degenerate_normal_count(),
            bounds: mesh.aabb(),
        }
    }
}

/// Surface, marker, camera and texture state for one viewer.
///
/// Single-threaded: input handlers mutate the session between frames and
/// [`RenderSession::render_frame`] reads it.
#[derive(Debug)]
pub struct RenderSession {
    config: SessionConfig,
    camera: Camera,
    projector: MarkerProjector,
    marker_position: MarkerPosition,
    surface: MeshHandle,
    surface_stats: MeshStats,
    marker: Option<MeshHandle>,
    texture: TextureState,
}

impl RenderSession {
    /// Validate `config`, build the surface and marker meshes and upload
    /// them through `renderer`.
    pub fn new(config: SessionConfig, renderer: &mut impl MeshRenderer) -> Result<Self> {
        config.validate()?;

        let surface_mesh = build_surface_mesh_with(config.surface, &config.mesh_options());
        let surface_stats = MeshStats::of(&surface_mesh);
        let surface = renderer.upload("surface", &prepare_mesh(&surface_mesh))?;

        let marker = if config.marker.enabled {
            let sphere = build_sphere_mesh(config.marker.radius, config.marker.angular_step);
            log::debug!("marker sphere: {} triangles", sphere.triangle_count());
            Some(renderer.upload("marker", &prepare_mesh(&sphere))?)
        } else {
            None
        };

        let texture = if config.texture.enabled {
            TextureState::Pending
        } else {
            TextureState::Disabled
        };

        log::info!(
            "render session ready: {} surface triangles ({} degenerate normals), marker {}",
            surface_stats.triangle_count,
            surface_stats.degenerate_normals,
            if marker.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            projector: MarkerProjector::new(config.surface),
            marker_position: config.marker_start(),
            camera: Camera::default(),
            config,
            surface,
            surface_stats,
            marker,
            texture,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn surface_stats(&self) -> &MeshStats {
        &self.surface_stats
    }

    pub fn surface_handle(&self) -> MeshHandle {
        self.surface
    }

    pub fn marker_handle(&self) -> Option<MeshHandle> {
        self.marker
    }

    pub fn marker_position(&self) -> MarkerPosition {
        self.marker_position
    }

    pub fn set_marker_position(&mut self, position: MarkerPosition) {
        self.marker_position = position;
    }

    /// Move the marker by the configured increment.
    pub fn handle_command(&mut self, command: MarkerCommand) {
        self.marker_position
            .apply(command, self.config.marker.increment);
    }

    /// Where the marker sphere is drawn: the surface point under the marker.
    pub fn marker_translation(&self) -> Point3 {
        self.projector.project(self.marker_position)
    }

    pub fn texture_state(&self) -> &TextureState {
        &self.texture
    }

    /// Record a successfully decoded texture.
    ///
    /// Returns `true` when the caller should render one more frame so the
    /// texture shows up. Ignored while texturing is disabled.
    pub fn texture_loaded(&mut self, info: TextureInfo) -> bool {
        if self.texture == TextureState::Disabled {
            log::warn!("texture loaded while texturing is disabled; ignoring");
            return false;
        }
        log::debug!("texture ready: {}x{}", info.width, info.height);
        self.texture = TextureState::Ready(info);
        true
    }

    /// Record a texture load failure. The surface keeps rendering untextured.
    pub fn texture_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("texture unavailable, drawing untextured: {}", reason);
        if self.texture != TextureState::Disabled {
            self.texture = TextureState::Failed(reason);
        }
    }

    /// Draw the surface, then the marker translated onto it.
    pub fn render_frame(&self, renderer: &mut impl MeshRenderer) -> Result<()> {
        renderer.begin_frame(self.config.clear_color)?;

        let surface = DrawUniforms::new(
            &self.camera,
            &Transform::identity(),
            self.config.surface_color,
            self.texture.is_ready(),
        );
        renderer.draw(self.surface, &surface)?;

        if let Some(marker) = self.marker {
            let model = Transform::from_translation(self.marker_translation());
            let uniforms = DrawUniforms::new(&self.camera, &model, self.config.marker.color, false);
            renderer.draw(marker, &uniforms)?;
        }
        Ok(())
    }
}
