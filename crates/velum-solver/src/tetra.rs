//! Tetrahedral cells — rest volumes and volumetric mass distribution.

use velum_math::geometry::tetra_volume;
use velum_types::{constants::DEGENERATE_EPSILON, ParticleId, TetraId, VelumError, VelumResult};

use crate::particle::ParticleSet;

/// A tetrahedral cell over four distinct particles.
///
/// The volume is computed once from the initial positions (rest-volume
/// semantics) and never recomputed: it only distributes mass and spring
/// weights, it is not a strain measure.
#[derive(Debug, Clone)]
pub struct Tetrahedron {
    /// Stable identifier (construction order).
    pub id: TetraId,
    /// The four corner particles.
    pub corners: [ParticleId; 4],
    /// Rest volume (scalar triple product / 6, absolute value).
    pub volume: f32,
}

impl Tetrahedron {
    /// Creates a cell, computing its rest volume from current positions.
    ///
    /// A zero-volume cell is a construction error: volume distribution
    /// would silently zero masses and spring weights.
    pub fn new(id: TetraId, corners: [ParticleId; 4], particles: &ParticleSet) -> VelumResult<Self> {
        let [a, b, c, d] = corners;
        if a == b || a == c || a == d || b == c || b == d || c == d {
            return Err(VelumError::InvalidMesh(format!(
                "tetrahedron {} has repeated corners", id.0
            )));
        }
        let volume = tetra_volume(
            particles.position(a),
            particles.position(b),
            particles.position(c),
            particles.position(d),
        );
        if volume <= DEGENERATE_EPSILON {
            return Err(VelumError::DegenerateGeometry(format!(
                "tetrahedron {} has zero volume", id.0
            )));
        }
        Ok(Self { id, corners, volume })
    }

    /// Returns the corner positions in order.
    pub fn corner_positions(&self, particles: &ParticleSet) -> [velum_math::Vec3; 4] {
        self.corners.map(|c| particles.position(c))
    }
}

/// Distributes tetrahedral mass onto corner particles.
///
/// Each cell contributes `density * volume / 4` to each of its four
/// corners, added on top of the base node mass. The accumulation is
/// commutative, so cell order does not affect the result; run exactly
/// once per setup.
pub fn distribute_mass(tetrahedra: &[Tetrahedron], density: f32, particles: &mut ParticleSet) {
    for tet in tetrahedra {
        let quarter = density * tet.volume / 4.0;
        for corner in tet.corners {
            particles.add_mass(corner.index(), quarter);
        }
    }
}
