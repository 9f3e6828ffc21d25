// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cabinetry Inc.

//! Mesh representation

use super::BoundingBox;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh: an ordered vertex set plus triangles indexing into it.
///
/// Vertex order is significant - it is the index space the triangles
/// reference. Generators produce a mesh once; transforms re-express it as a
/// fresh mesh and never touch the triangle list (topology is invariant under
/// affine transforms).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Arithmetic mean of the vertex positions
    pub fn centroid(&self) -> Point3<f64> {
        if self.vertices.is_empty() {
            return Point3::origin();
        }

        let mut sum = nalgebra::Vector3::zeros();
        for vertex in &self.vertices {
            sum += vertex.coords;
        }
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Check that every triangle references a valid vertex index.
    /// An out-of-range index is a construction bug, not a runtime input.
    pub fn indices_valid(&self) -> bool {
        let n = self.vertices.len();
        self.triangles
            .iter()
            .all(|t| t.indices.iter().all(|&i| i < n))
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_vertex_returns_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)), 0);
        assert_eq!(mesh.add_vertex(Point3::new(1.0, 0.0, 0.0)), 1);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_centroid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(-1.0, -1.0, -1.0));
        mesh.add_vertex(Point3::new(1.0, 1.0, 1.0));
        let c = mesh.centroid();
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn test_indices_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(Triangle::new([0, 1, 2]));
        assert!(mesh.indices_valid());

        mesh.add_triangle(Triangle::new([0, 1, 3]));
        assert!(!mesh.indices_valid());
    }
}
