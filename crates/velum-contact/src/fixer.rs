//! Fixer volumes — setup-time kinematic binding.
//!
//! A fixer is an axis-aligned box; every particle inside it at setup is
//! bound to the simulation anchor placed at the box center, capturing
//! the particle's offset at bind time. Moving the anchor afterwards
//! drags the bound particles rigidly.

use velum_math::Vec3;
use velum_solver::Simulation;
use velum_types::AnchorId;

/// An axis-aligned binding volume.
#[derive(Debug, Clone, Copy)]
pub struct FixerVolume {
    /// Box center — also the initial anchor position.
    pub center: Vec3,
    /// Half extents along each axis.
    pub half_extents: Vec3,
}

impl FixerVolume {
    /// Creates a fixer box from center and half extents.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self { center, half_extents }
    }

    /// Returns true if `point` lies inside the box (inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }

    /// Binds every contained particle to a fresh anchor at the box
    /// center. Returns the anchor handle, or `None` when the volume
    /// contains no particles (no anchor is created).
    pub fn bind_particles(&self, sim: &mut Simulation) -> Option<AnchorId> {
        let contained: Vec<usize> = (0..sim.particles.len())
            .filter(|&i| self.contains(sim.particles.positions[i]))
            .collect();

        if contained.is_empty() {
            return None;
        }

        let anchor = sim.add_anchor(self.center);
        for i in contained {
            sim.particles.bind(i, anchor, self.center);
        }
        Some(anchor)
    }
}
