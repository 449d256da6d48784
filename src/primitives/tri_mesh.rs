use serde::{Deserialize, Serialize};

use crate::primitives::material::Material;
use crate::primitives::triangle::Triangle;

/// Triangle soup with one material. Vertices are embedded in each triangle,
/// so the serialized form carries no index buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    pub material: Material,
    pub triangles: Vec<Triangle>,
}

impl TriMesh {
    pub fn new() -> Self {
        TriMesh {
            material: Material::mesh_default(),
            triangles: Vec::new(),
        }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices());
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }
}

impl Default for TriMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_vertices() {
        let mut mesh = TriMesh::new();
        assert_eq!(mesh.bounds(), None);

        mesh.push(Triangle::new([0.0, 0.0, 0.0], [1.0, -2.0, 0.5], [0.0, 1.0, 3.0]));
        mesh.push(Triangle::new([-1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]));

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, [-1.0, -2.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 3.0]);
    }
}
