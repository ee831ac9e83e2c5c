use kiepert_core::traits::BoundingBox;
use kiepert_math::{Aabb3, Point2, Point3, Vector3};

/// One mesh corner: position, normal and optional texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3,
    pub normal: Vector3,
    pub uv: Option<Point2>,
}

/// Non-indexed triangle mesh: every three consecutive vertices form a triangle.
///
/// `positions` and `normals` always have the same length. `uvs` is either
/// empty (no texture coordinates) or the same length as `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Empty mesh with room for `triangles` triangles.
    pub fn with_capacity(triangles: usize, texcoords: bool) -> Self {
        let vertices = triangles * 3;
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: if texcoords {
                Vec::with_capacity(vertices)
            } else {
                Vec::new()
            },
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn has_texcoords(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Append one triangle in the given corner order.
    ///
    /// Texture coordinates are kept only when every corner of every triangle
    /// carries one.
    pub fn push_triangle(&mut self, corners: [Vertex; 3]) {
        for corner in corners {
            self.positions.push(corner.position);
            self.normals.push(corner.normal);
            if let Some(uv) = corner.uv {
                self.uvs.push(uv);
            }
        }
        debug_assert!(
            self.uvs.is_empty() || self.uvs.len() == self.positions.len(),
            "mixed textured and untextured corners"
        );
    }

    /// Vertex `i` assembled from the parallel arrays.
    pub fn vertex(&self, i: usize) -> Option<Vertex> {
        Some(Vertex {
            position: *self.positions.get(i)?,
            normal: *self.normals.get(i)?,
            uv: self.uvs.get(i).copied(),
        })
    }

    /// Triangles as corner triples, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        (0..self.triangle_count()).filter_map(move |t| {
            Some([
                self.vertex(3 * t)?,
                self.vertex(3 * t + 1)?,
                self.vertex(3 * t + 2)?,
            ])
        })
    }

    /// Number of corners whose normal fell back to the zero vector.
    pub fn degenerate_normal_count(&self) -> usize {
        self.normals.iter().filter(|n| **n == Vector3::ZERO).count()
    }

    pub fn aabb(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.positions)
    }

    /// Positions flattened to `x, y, z` triples for vertex upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Normals flattened to `x, y, z` triples, in vertex order.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Texture coordinates flattened to `s, t` pairs, if the mesh has any.
    pub fn texcoord_buffer(&self) -> Option<Vec<f32>> {
        if !self.has_texcoords() {
            return None;
        }
        Some(
            self.uvs
                .iter()
                .flat_map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
        )
    }
}

impl BoundingBox for TriangleMesh {
    type Point = Point3;

    /// Bounds of all positions; an empty mesh reports a zero-size box at the origin.
    fn bounding_box(&self) -> (Point3, Point3) {
        self.aabb()
            .map(|b| (b.min, b.max))
            .unwrap_or((Point3::ZERO, Point3::ZERO))
    }
}
