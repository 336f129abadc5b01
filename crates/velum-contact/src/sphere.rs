//! Sphere penalty contact.
//!
//! Discrete penalty method against a single analytic sphere: particles
//! inside the (inflated) radius receive a force proportional to
//! penetration depth along the outward radial direction. The force is
//! discontinuous at the boundary, a standard penalty-method artifact.

use velum_math::Vec3;
use velum_solver::{ExternalForce, ParticleSet};
use velum_types::constants::PENALTY_RADIUS_MARGIN;

/// The penalty sphere obstacle.
///
/// The driver owns the sphere and may move it between ticks; the
/// simulation samples `center` and `radius` every sub-step.
#[derive(Debug, Clone, Copy)]
pub struct PenaltySphere {
    /// Sphere center (world space).
    pub center: Vec3,
    /// Configured radius; the contact test inflates it by the safety
    /// margin.
    pub radius: f32,
    /// Penalty stiffness `k`.
    pub stiffness: f32,
}

impl PenaltySphere {
    /// Creates a penalty sphere.
    pub fn new(center: Vec3, radius: f32, stiffness: f32) -> Self {
        Self { center, radius, stiffness }
    }

    /// Radius actually used for the contact test and penetration depth.
    #[inline]
    pub fn inflated_radius(&self) -> f32 {
        self.radius * PENALTY_RADIUS_MARGIN
    }

    /// Counts particles currently inside the inflated radius.
    pub fn contact_count(&self, particles: &ParticleSet) -> u32 {
        let r2 = self.inflated_radius() * self.inflated_radius();
        particles
            .positions
            .iter()
            .filter(|p| (**p - self.center).length_squared() < r2)
            .count() as u32
    }
}

impl ExternalForce for PenaltySphere {
    /// Adds `k * penetration` along the outward radial unit vector for
    /// every particle inside the inflated radius. No force outside.
    fn accumulate(&self, particles: &mut ParticleSet) {
        let r = self.inflated_radius();
        let r2 = r * r;

        for i in 0..particles.len() {
            let offset = particles.positions[i] - self.center;
            let dist2 = offset.length_squared();
            if dist2 >= r2 || dist2 == 0.0 {
                continue;
            }
            let dist = dist2.sqrt();
            let penetration = r - dist;
            let outward = offset / dist;
            particles.forces[i] += self.stiffness * penetration * outward;
        }
    }
}
