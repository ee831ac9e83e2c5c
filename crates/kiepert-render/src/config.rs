//! Session configuration, loaded from TOML.
//!
//! Every field has a default, so an empty document yields the stock viewer:
//! the default surface on a 5° grid, a yellow surface, a 0.15-radius marker
//! moving 0.1 rad per command, texturing off.

use std::path::{Path, PathBuf};

use kiepert_core::traits::Validate;
use kiepert_core::{KiepertError, Result};
use kiepert_geometry::{
    KiepertSurface, MarkerPosition, SphericalSurface, Surface, SurfaceParams, DEFAULT_EPSILON,
};
use kiepert_math::Point3;
use kiepert_mesh::{AngleGrid, AngleUnit, SurfaceMeshOptions, DEFAULT_SPHERE_STEP};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Surface grid step in degrees.
    pub grid_step_degrees: f64,
    /// Normal estimation step in radians.
    pub epsilon: f64,
    pub surface_color: [f32; 4],
    pub clear_color: [f32; 4],
    pub surface: SurfaceParams,
    pub marker: MarkerConfig,
    pub texture: TextureConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub enabled: bool,
    pub radius: f64,
    /// Sphere tessellation step in radians.
    pub angular_step: f64,
    /// Distance moved per directional command, in radians.
    pub increment: f64,
    pub start_u: f64,
    pub start_v: f64,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_step_degrees: SurfaceMeshOptions::DEFAULT_GRID_STEP_DEGREES,
            epsilon: DEFAULT_EPSILON,
            surface_color: [1.0, 1.0, 0.0, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
            surface: SurfaceParams::default(),
            marker: MarkerConfig::default(),
            texture: TextureConfig::default(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 0.15,
            angular_step: DEFAULT_SPHERE_STEP,
            increment: 0.1,
            start_u: 0.0,
            start_v: 0.0,
            color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl SessionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SessionConfig =
            toml::from_str(source).map_err(|e| KiepertError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| KiepertError::Parse(e.to_string()))
    }

    /// Options for the surface mesh. Texture coordinates are only generated
    /// when texturing is enabled.
    pub fn mesh_options(&self) -> SurfaceMeshOptions {
        SurfaceMeshOptions {
            grid_step_degrees: self.grid_step_degrees,
            epsilon: self.epsilon,
            texcoords: self.texture.enabled,
        }
    }

    pub fn marker_start(&self) -> MarkerPosition {
        MarkerPosition::new(self.marker.start_u, self.marker.start_v)
    }
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KiepertError::Config(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

/// Reject steps whose grid is empty, too coarse for the range or too fine
/// to tessellate.
fn require_grid(name: &str, grid: &AngleGrid) -> Result<()> {
    grid.validate()
        .map_err(|e| KiepertError::Config(format!("{}: {}", name, e)))
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        self.surface
            .validate()
            .map_err(|e| KiepertError::Config(e.to_string()))?;
        require_positive("grid_step_degrees", self.grid_step_degrees)?;
        let surface = KiepertSurface::new(self.surface);
        for domain in [surface.domain_u(), surface.domain_v()] {
            let grid = AngleGrid::over_domain(domain, self.grid_step_degrees, AngleUnit::Degrees);
            require_grid("grid_step_degrees", &grid)?;
        }
        require_positive("epsilon", self.epsilon)?;
        self.marker.validate()?;
        self.texture.validate()
    }
}

impl Validate for MarkerConfig {
    fn validate(&self) -> Result<()> {
        require_positive("marker.radius", self.radius)?;
        require_positive("marker.angular_step", self.angular_step)?;
        let sphere = SphericalSurface::new(Point3::ZERO, self.radius);
        for domain in [sphere.domain_u(), sphere.domain_v()] {
            let grid = AngleGrid::over_domain(domain, self.angular_step, AngleUnit::Radians);
            require_grid("marker.angular_step", &grid)?;
        }
        require_positive("marker.increment", self.increment)
    }
}

impl Validate for TextureConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.path.is_none() {
            return Err(KiepertError::Config(
                "texture.enabled requires texture.path".into(),
            ));
        }
        Ok(())
    }
}
