//! Core triangle mesh type.
//!
//! The mesh is the render-side view of a simulation: the cloth path
//! simulates its vertices directly, the solid path drives them through
//! the barycentric embedder. Positions are stored contiguously and the
//! triangle index buffer is flat (`[t0v0, t0v1, t0v2, t1v0, ...]`).

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::{VelumError, VelumResult};

/// A triangle mesh: contiguous vertex positions plus a flat index buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions in the mesh's local frame.
    pub positions: Vec<Vec3>,

    /// Triangle indices — each triangle is `[v0, v1, v2]`, stored flat.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Creates a mesh from positions and a flat index buffer, validating it.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> VelumResult<Self> {
        let mesh = Self { positions, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Index count divisible by 3
    /// - Triangle indices within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> VelumResult<()> {
        let n = self.positions.len();

        if self.indices.len() % 3 != 0 {
            return Err(VelumError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(VelumError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(VelumError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }
}
