//! Per-particle and per-face force accumulation.
//!
//! Spring forces live on [`crate::spring::Spring`]; this module covers
//! the remaining force model: gravity, linear node damping, flat-plate
//! aerodynamic drag, and the seam for step-time collaborators such as
//! the penalty sphere.

use velum_math::geometry::{triangle_area, triangle_normal};
use velum_math::Vec3;

use crate::particle::ParticleSet;

/// A force contributor owned outside the simulation (obstacles, fields).
///
/// Implementations are queried every sub-step, after the internal force
/// model and before integration, so a moving obstacle is sampled at its
/// current placement.
pub trait ExternalForce {
    /// Adds this contributor's forces into the particle accumulators.
    fn accumulate(&self, particles: &mut ParticleSet);
}

/// Zeroes all force accumulators, then adds gravity and node damping.
///
/// Per particle: `f = m * g - node_damping * m * v`. The damping drag is
/// proportional to mass so heavier particles are not slowed faster.
pub fn begin_step(particles: &mut ParticleSet, gravity: Vec3, node_damping: f32) {
    for i in 0..particles.len() {
        let m = particles.masses[i];
        particles.forces[i] = m * gravity - node_damping * m * particles.velocities[i];
    }
}

/// Accumulates flat-plate aerodynamic drag over a face set.
///
/// Per face: the relative velocity of the wind against the face's
/// average particle velocity is projected onto the face normal, scaled
/// by the face area and the friction coefficient, and split equally
/// onto the three corner particles:
///
/// `F = -friction * area * dot(wind - v̄, n) * n`
///
/// Note that still air (`wind == ZERO`) still produces drag from the
/// face's own motion — the term must run every step, not only when a
/// wind vector is configured. This is a flat-plate approximation, not
/// true aerodynamics; the sign and normalization are what give cloth
/// its flutter-versus-damping behavior, so they are fixed.
pub fn apply_wind(particles: &mut ParticleSet, faces: &[u32], wind: Vec3, friction: f32) {
    if friction == 0.0 {
        return;
    }

    for face in faces.chunks_exact(3) {
        let [v0, v1, v2] = [face[0] as usize, face[1] as usize, face[2] as usize];

        let p0 = particles.positions[v0];
        let p1 = particles.positions[v1];
        let p2 = particles.positions[v2];

        let normal = triangle_normal(p0, p1, p2);
        let avg_velocity =
            (particles.velocities[v0] + particles.velocities[v1] + particles.velocities[v2]) / 3.0;

        let relative = wind - avg_velocity;
        let normal_component = relative.dot(normal);
        let area = triangle_area(p0, p1, p2);

        let force = -friction * area * normal_component * normal;
        let third = force / 3.0;

        particles.forces[v0] += third;
        particles.forces[v1] += third;
        particles.forces[v2] += third;
    }
}
