//! Uniform angular grids and the quad-splitting tessellator built on them.

use kiepert_core::traits::Validate;
use kiepert_core::{KiepertError, Result};
use kiepert_geometry::Surface;
use kiepert_math::Point2;

use crate::triangle_mesh::{TriangleMesh, Vertex};

/// Unit in which an [`AngleGrid`] is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// One sampled parameter axis: `start`, `start + step`, … up to `end`.
///
/// Cell `i` spans `[start + i*step, start + (i+1)*step]`. When `step` does
/// not divide the span, the last cell overshoots `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleGrid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub unit: AngleUnit,
}

impl AngleGrid {
    /// Upper bound on cells per axis accepted by validation.
    pub const MAX_CELLS: usize = 720;

    pub fn degrees(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            end,
            step,
            unit: AngleUnit::Degrees,
        }
    }

    pub fn radians(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            end,
            step,
            unit: AngleUnit::Radians,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Number of cells along the axis: `ceil(span / step)`, with spans that
    /// divide evenly (up to rounding) giving exactly `span / step`.
    ///
    /// A non-positive or non-finite step yields zero cells.
    pub fn cell_count(&self) -> usize {
        let span = self.span();
        if !(self.step > 0.0) || !self.step.is_finite() || !(span > 0.0) || !span.is_finite() {
            return 0;
        }
        let ratio = span / self.step;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }

    /// Parameter value at grid line `i`, in the grid's unit.
    pub fn sample(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn to_radians(&self, value: f64) -> f64 {
        match self.unit {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }

    /// Grid over a surface parameter domain given in radians, expressed in
    /// `unit` with `step` in that unit.
    pub fn over_domain(domain: (f64, f64), step: f64, unit: AngleUnit) -> Self {
        let (start, end) = domain;
        match unit {
            AngleUnit::Degrees => Self::degrees(start.to_degrees(), end.to_degrees(), step),
            AngleUnit::Radians => Self::radians(start, end, step),
        }
    }

    /// Linear map of `value` from `[start, end]` onto `[0, 1]`.
    pub fn texcoord(&self, value: f64) -> f64 {
        ((value - self.start) / self.span()).clamp(0.0, 1.0)
    }
}

impl Validate for AngleGrid {
    fn validate(&self) -> Result<()> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(KiepertError::Geometry(format!(
                "grid step must be positive and finite, got {}",
                self.step
            )));
        }
        if !(self.span() > 0.0) || !self.span().is_finite() {
            return Err(KiepertError::Geometry(format!(
                "grid range [{}, {}] is empty",
                self.start, self.end
            )));
        }
        if self.step > self.span() {
            return Err(KiepertError::Geometry(format!(
                "grid step {} exceeds range {}",
                self.step,
                self.span()
            )));
        }
        if self.cell_count() > Self::MAX_CELLS {
            return Err(KiepertError::Geometry(format!(
                "grid step {} gives {} cells, more than {}",
                self.step,
                self.cell_count(),
                Self::MAX_CELLS
            )));
        }
        Ok(())
    }
}

/// Tessellate `surface` over the product of two angular grids.
///
/// For every cell (outer `u`, inner `v`) the four corners
/// `P1=(u,v)`, `P2=(u+s,v)`, `P3=(u,v+s)`, `P4=(u+s,v+s)` are evaluated
/// independently (position, normal, texcoord) and emitted as the two
/// triangles `(P1,P2,P3)` and `(P3,P2,P4)`. Neighbouring cells do not share
/// or average anything, and no blending happens across the seam.
///
/// A grid that fails validation yields an empty mesh.
pub fn tessellate_grid(
    surface: &dyn Surface,
    u_grid: &AngleGrid,
    v_grid: &AngleGrid,
    texcoords: bool,
) -> TriangleMesh {
    if let Err(err) = u_grid.validate().and_then(|_| v_grid.validate()) {
        log::warn!("not tessellating: {}", err);
        return TriangleMesh::default();
    }
    let u_cells = u_grid.cell_count();
    let v_cells = v_grid.cell_count();
    let triangles = u_cells
        .checked_mul(v_cells)
        .and_then(|cells| cells.checked_mul(2))
        .unwrap_or(0);
    let mut mesh = TriangleMesh::with_capacity(triangles, texcoords);

    let corner = |u: f64, v: f64| {
        let (ur, vr) = (u_grid.to_radians(u), v_grid.to_radians(v));
        Vertex {
            position: surface.point_at(ur, vr),
            normal: surface.normal_at(ur, vr),
            uv: texcoords.then(|| Point2::new(u_grid.texcoord(u), v_grid.texcoord(v))),
        }
    };

    for i in 0..u_cells {
        let (u0, u1) = (u_grid.sample(i), u_grid.sample(i + 1));
        for j in 0..v_cells {
            let (v0, v1) = (v_grid.sample(j), v_grid.sample(j + 1));

            let p1 = corner(u0, v0);
            let p2 = corner(u1, v0);
            let p3 = corner(u0, v1);
            let p4 = corner(u1, v1);

            mesh.push_triangle([p1, p2, p3]);
            mesh.push_triangle([p3, p2, p4]);
        }
    }

    log::debug!(
        "tessellated {}x{} cells into {} triangles ({} degenerate normals)",
        u_cells,
        v_cells,
        mesh.triangle_count(),
        mesh.degenerate_normal_count()
    );
    mesh
}
