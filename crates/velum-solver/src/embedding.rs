//! Barycentric embedding — drives a dense render mesh from the coarse
//! simulation mesh.
//!
//! Binding runs once at setup: each render vertex is tested against the
//! tetrahedra in construction order and recorded against the first cell
//! that contains it, with four generalized barycentric weights. Every
//! step, the embedded position is reconstructed as the weighted sum of
//! the cell's current corner positions. Binding is pure: two runs over
//! identical geometry produce identical records.

use velum_math::{Mat4, Vec3};
use velum_types::{constants::BARYCENTRIC_EPSILON, TetraId, VertexId};

use crate::particle::ParticleSet;
use crate::tetra::Tetrahedron;

/// One render vertex expressed as an affine combination of a containing
/// tetrahedron's corners. Read-only after setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedVertex {
    /// The render vertex this record drives.
    pub vertex: VertexId,
    /// The containing tetrahedron.
    pub tetra: TetraId,
    /// Barycentric weights over the cell's four corners, summing to 1.
    pub weights: [f32; 4],
}

/// The embedding set for a render mesh.
#[derive(Debug, Clone, Default)]
pub struct Embedding {
    /// One record per embedded render vertex, in vertex order.
    pub records: Vec<EmbeddedVertex>,
}

impl Embedding {
    /// Binds render vertices (world space) to the tetrahedra.
    ///
    /// A vertex is contained when all four weights exceed
    /// `-BARYCENTRIC_EPSILON`, tolerating small numerical negatives at
    /// cell faces. The first containing tetrahedron wins. Vertices
    /// contained in no cell are silently omitted — they keep their
    /// original positions and are not repositioned by the simulation.
    pub fn bind(
        render_positions: &[Vec3],
        tetrahedra: &[Tetrahedron],
        particles: &ParticleSet,
    ) -> Self {
        let mut records = Vec::new();

        for (v, &p) in render_positions.iter().enumerate() {
            for tet in tetrahedra {
                let corners = tet.corner_positions(particles);
                let weights = barycentric_weights(p, corners);
                if weights.iter().all(|&w| w > -BARYCENTRIC_EPSILON) {
                    records.push(EmbeddedVertex {
                        vertex: VertexId(v as u32),
                        tetra: tet.id,
                        weights,
                    });
                    break;
                }
            }
        }

        Self { records }
    }

    /// Number of embedded vertices.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no vertex was embedded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes reconstructed positions for all embedded vertices into
    /// `out` (the render mesh's position buffer, local frame).
    ///
    /// Unembedded vertices are left untouched.
    pub fn reconstruct(
        &self,
        particles: &ParticleSet,
        tetrahedra: &[Tetrahedron],
        world_to_local: Mat4,
        out: &mut [Vec3],
    ) {
        for record in &self.records {
            let tet = &tetrahedra[record.tetra.index()];
            let corners = tet.corner_positions(particles);
            let mut world = Vec3::ZERO;
            for i in 0..4 {
                world += record.weights[i] * corners[i];
            }
            out[record.vertex.index()] = world_to_local.transform_point3(world);
        }
    }
}

/// Generalized barycentric weights of `p` in the tetrahedron `corners`.
///
/// The weight for corner `i` is the ratio of two dot products against
/// the normal of the face opposite `i`: the numerator measures `p`'s
/// offset from that face, the denominator the corner's own offset. Both
/// share the same normal, so the per-face orientation choice cancels
/// and the four weights sum to 1 for any point.
pub fn barycentric_weights(p: Vec3, corners: [Vec3; 4]) -> [f32; 4] {
    let [c0, c1, c2, c3] = corners;

    let n0 = (c2 - c1).cross(c3 - c1);
    let n1 = (c2 - c0).cross(c3 - c0);
    let n2 = (c1 - c0).cross(c3 - c0);
    let n3 = (c1 - c0).cross(c2 - c0);

    [
        n0.dot(p - c1) / n0.dot(c0 - c1),
        n1.dot(p - c0) / n1.dot(c1 - c0),
        n2.dot(p - c0) / n2.dot(c2 - c0),
        n3.dot(p - c0) / n3.dot(c3 - c0),
    ]
}

/// How simulated particle state maps back onto the render mesh.
#[derive(Debug, Clone)]
pub enum RenderCoupling {
    /// Render vertex `i` is particle `i` (cloth path).
    Direct,
    /// Render vertices track tetrahedra barycentrically (solid path).
    Embedded(Embedding),
}

impl RenderCoupling {
    /// Writes render-mesh local positions into `out`.
    ///
    /// For the direct mapping `out` must have one entry per particle;
    /// for the embedded mapping unembedded entries are left untouched.
    pub fn reconstruct(
        &self,
        particles: &ParticleSet,
        tetrahedra: &[Tetrahedron],
        world_to_local: Mat4,
        out: &mut [Vec3],
    ) {
        match self {
            Self::Direct => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = world_to_local.transform_point3(particles.positions[i]);
                }
            }
            Self::Embedded(embedding) => {
                embedding.reconstruct(particles, tetrahedra, world_to_local, out);
            }
        }
    }
}
