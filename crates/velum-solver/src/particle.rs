//! Particle arena — per-particle state channels and anchor bindings.
//!
//! Particles are the only owned simulation entities; springs, tetrahedra,
//! and embedding records refer to them by [`ParticleId`] handle. Channels
//! are stored as parallel contiguous vectors so the per-step force loop
//! walks flat memory.

use velum_math::Vec3;
use velum_types::{AnchorId, ParticleId, VelumError, VelumResult};

/// Kinematic binding of a particle to an anchor.
///
/// The offset is captured once at bind time (`particle_pos - anchor_pos`),
/// preserving the rigid relative placement as the anchor moves.
#[derive(Debug, Clone, Copy)]
pub struct AnchorBinding {
    /// The anchor this particle follows.
    pub anchor: AnchorId,
    /// Rigid offset from the anchor position.
    pub offset: Vec3,
}

/// Arena of point masses.
///
/// All channel vectors have length `len()`. A particle is kinematically
/// fixed iff its `bindings` entry is set; fixed particles bypass
/// integration entirely and are repositioned from their anchor each step.
#[derive(Debug, Clone, Default)]
pub struct ParticleSet {
    /// World-space positions.
    pub positions: Vec<Vec3>,
    /// Velocities.
    pub velocities: Vec<Vec3>,
    /// Per-step force accumulators.
    pub forces: Vec<Vec3>,
    /// Masses (> 0).
    pub masses: Vec<f32>,
    /// Optional kinematic binding per particle.
    pub bindings: Vec<Option<AnchorBinding>>,
}

impl ParticleSet {
    /// Creates an arena from initial positions with a uniform base mass.
    ///
    /// Velocities and forces start at zero; no particle is bound.
    pub fn with_uniform_mass(positions: Vec<Vec3>, mass: f32) -> VelumResult<Self> {
        if mass <= 0.0 {
            return Err(VelumError::InvalidConfig(format!(
                "particle mass must be positive, got {mass}"
            )));
        }
        let n = positions.len();
        Ok(Self {
            positions,
            velocities: vec![Vec3::ZERO; n],
            forces: vec![Vec3::ZERO; n],
            masses: vec![mass; n],
            bindings: vec![None; n],
        })
    }

    /// Returns the number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the position of particle `id`.
    #[inline]
    pub fn position(&self, id: ParticleId) -> Vec3 {
        self.positions[id.index()]
    }

    /// Returns the velocity of particle `id`.
    #[inline]
    pub fn velocity(&self, id: ParticleId) -> Vec3 {
        self.velocities[id.index()]
    }

    /// Returns true if particle `i` is kinematically fixed.
    #[inline]
    pub fn is_fixed(&self, i: usize) -> bool {
        self.bindings[i].is_some()
    }

    /// Binds particle `i` to `anchor`, capturing the current offset
    /// `position - anchor_position`.
    pub fn bind(&mut self, i: usize, anchor: AnchorId, anchor_position: Vec3) {
        let offset = self.positions[i] - anchor_position;
        self.bindings[i] = Some(AnchorBinding { anchor, offset });
    }

    /// Adds `dm` to the mass of particle `i` (volumetric mass accumulation).
    #[inline]
    pub fn add_mass(&mut self, i: usize, dm: f32) {
        self.masses[i] += dm;
    }

    /// Total kinetic energy: `0.5 * Σ m_i * ||v_i||²`.
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.len() {
            let v = self.velocities[i].as_dvec3();
            energy += 0.5 * self.masses[i] as f64 * v.length_squared();
        }
        energy
    }
}
