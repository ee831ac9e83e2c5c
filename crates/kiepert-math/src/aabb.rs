use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Tight bounds of `points`, `None` when empty.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(first, first), |b, &p| {
            Self::new(b.min.min(p), b.max.max(p))
        }))
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Point3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Grow by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        let pad = Vector3::splat(amount);
        Self::new(self.min - pad, self.max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_bounds_of_points() {
        let pts = [dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
        assert_eq!(aabb.extents(), dvec3(4.0, 6.0, 3.0));
        assert!(pts.iter().all(|&p| aabb.contains_point(p)));
    }

    #[test]
    fn test_empty_has_no_bounds() {
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_expand() {
        let aabb = Aabb3::new(Point3::ZERO, Point3::ONE);
        assert!(!aabb.contains_point(dvec3(1.05, 0.5, 0.5)));
        assert!(aabb.expand(0.1).contains_point(dvec3(1.05, 0.5, 0.5)));
    }
}
