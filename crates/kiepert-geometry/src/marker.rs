//! Marker placement on the Kiepert surface.

use std::f64::consts::TAU;

use kiepert_math::Point3;

use crate::surface::{KiepertSurface, Surface, SurfaceParams};

/// A discrete directional input that nudges the marker along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCommand {
    IncreaseU,
    DecreaseU,
    IncreaseV,
    DecreaseV,
}

/// Where the marker sits on the surface, as an angle pair in radians.
///
/// Both coordinates always lie in `[0, 2*PI]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPosition {
    u: f64,
    v: f64,
}

impl MarkerPosition {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = TAU;

    /// Create a position, clamping each coordinate into the domain.
    pub fn new(u: f64, v: f64) -> Self {
        Self {
            u: Self::clamp(u),
            v: Self::clamp(v),
        }
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    /// Move one axis by `increment` in the direction of `command`.
    pub fn apply(&mut self, command: MarkerCommand, increment: f64) {
        match command {
            MarkerCommand::IncreaseU => self.u = Self::clamp(self.u + increment),
            MarkerCommand::DecreaseU => self.u = Self::clamp(self.u - increment),
            MarkerCommand::IncreaseV => self.v = Self::clamp(self.v + increment),
            MarkerCommand::DecreaseV => self.v = Self::clamp(self.v - increment),
        }
        log::trace!("marker {:?} -> ({:.3}, {:.3})", command, self.u, self.v);
    }

    fn clamp(x: f64) -> f64 {
        // NaN collapses to the lower bound.
        if x.is_nan() {
            Self::MIN
        } else {
            x.clamp(Self::MIN, Self::MAX)
        }
    }
}

impl Default for MarkerPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Maps a [`MarkerPosition`] to the point it designates on the surface.
///
/// Uses the same point function as the surface mesh, so the marker lies on
/// the surface regardless of how finely the mesh was tessellated.
#[derive(Debug, Clone, Copy)]
pub struct MarkerProjector {
    surface: KiepertSurface,
}

impl MarkerProjector {
    pub fn new(params: SurfaceParams) -> Self {
        Self {
            surface: KiepertSurface::new(params),
        }
    }

    pub fn project(&self, position: MarkerPosition) -> Point3 {
        self.surface.point_at(position.u, position.v)
    }
}
