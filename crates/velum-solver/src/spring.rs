//! Distance springs — elastic links between two particles.
//!
//! A spring applies an elastic force along the line between its
//! endpoints plus a velocity-damping term projected onto that line.
//! The same force is applied to endpoint `a` and negated on `b`, so
//! spring forces are exactly momentum conserving within the pair.

use velum_math::Vec3;
use velum_types::{constants::DEGENERATE_EPSILON, ParticleId, VelumError, VelumResult};

use crate::particle::ParticleSet;

/// Role of a spring in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpringKind {
    /// Stretch resistance along a mesh edge.
    Traction,
    /// Out-of-plane fold resistance between two triangles' opposite
    /// vertices across a shared edge (cloth only).
    Bending,
}

/// An elastic link between two particles.
///
/// The endpoint order matches the canonical edge order chosen during
/// deduplication; it carries no further meaning.
#[derive(Debug, Clone)]
pub struct Spring {
    /// First endpoint (canonical order).
    pub a: ParticleId,
    /// Second endpoint.
    pub b: ParticleId,
    /// Role in the network.
    pub kind: SpringKind,
    /// Rest length, fixed at creation from the initial distance.
    pub rest_length: f32,
    /// Current length, refreshed each step.
    pub length: f32,
    /// Elastic stiffness.
    pub stiffness: f32,
    /// Volume weight for solid springs. When set, the elastic magnitude
    /// is scaled by `weight / rest_length²`; cloth springs leave it unset
    /// and use the unscaled magnitude.
    pub weight: Option<f32>,
}

impl Spring {
    /// Creates a spring between `a` and `b` at their current distance.
    ///
    /// A zero-length rest state is a construction error: the volume
    /// scaling divides by `rest_length²` and the force direction would
    /// be undefined.
    pub fn new(
        a: ParticleId,
        b: ParticleId,
        kind: SpringKind,
        stiffness: f32,
        weight: Option<f32>,
        particles: &ParticleSet,
    ) -> VelumResult<Self> {
        let rest_length = (particles.position(a) - particles.position(b)).length();
        if rest_length <= DEGENERATE_EPSILON {
            return Err(VelumError::DegenerateGeometry(format!(
                "zero-length spring between particles {} and {}",
                a.0, b.0
            )));
        }
        Ok(Self {
            a,
            b,
            kind,
            rest_length,
            length: rest_length,
            stiffness,
            weight,
        })
    }

    /// Accumulates the elastic + damping force into both endpoints.
    ///
    /// `u` points from `b` to `a`; the elastic magnitude is
    /// `stiffness * (length - rest_length)`, scaled by
    /// `weight / rest_length²` for volume-weighted springs. The damping
    /// term is proportional to the stiffness, the configured coefficient,
    /// and the relative velocity's projection onto `u`.
    pub fn accumulate_forces(&self, particles: &mut ParticleSet, spring_damping: f32) {
        let u = (particles.position(self.a) - particles.position(self.b)).normalize_or_zero();

        let scale = match self.weight {
            Some(w) => w / (self.rest_length * self.rest_length),
            None => 1.0,
        };
        let elastic = -scale * self.stiffness * (self.length - self.rest_length) * u;

        let rel_vel = particles.velocity(self.a) - particles.velocity(self.b);
        let damping = -spring_damping * self.stiffness * rel_vel.dot(u) * u;

        let force = elastic + damping;
        particles.forces[self.a.index()] += force;
        particles.forces[self.b.index()] -= force;
    }

    /// Refreshes the current length from particle positions.
    #[inline]
    pub fn update_length(&mut self, particles: &ParticleSet) {
        self.length = (particles.position(self.a) - particles.position(self.b)).length();
    }
}
