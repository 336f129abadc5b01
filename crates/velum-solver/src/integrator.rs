//! The simulation instance and its time integrator.
//!
//! A [`Simulation`] exclusively owns all particles, springs, and
//! tetrahedra. An external driver calls [`Simulation::tick`] at whatever
//! cadence it wants — the core assumes no frame loop. Each tick runs the
//! configured number of sub-steps sequentially; there is no concurrent
//! mutation anywhere, so identical inputs reproduce identical state
//! sequences exactly.

use velum_math::{Mat4, Vec3};
use velum_types::AnchorId;

use crate::config::{IntegrationScheme, SimulationConfig};
use crate::embedding::RenderCoupling;
use crate::forces::{self, ExternalForce};
use crate::particle::ParticleSet;
use crate::spring::Spring;
use crate::tetra::Tetrahedron;

/// One soft-body simulation instance.
pub struct Simulation {
    /// The particle arena.
    pub particles: ParticleSet,
    /// Deduplicated spring network.
    pub springs: Vec<Spring>,
    /// Tetrahedral cells (empty on the cloth path).
    pub tetrahedra: Vec<Tetrahedron>,
    /// Wind-bearing faces, flat triples of particle indices. Not part of
    /// the mechanical topology.
    pub wind_faces: Vec<u32>,
    /// Render coupling (direct index mapping or barycentric embedding).
    pub coupling: RenderCoupling,
    /// Physics parameters.
    pub config: SimulationConfig,
    /// Anchor positions, updated by the driver between ticks.
    anchors: Vec<Vec3>,
    /// Paused (default) / Running toggle.
    running: bool,
}

impl Simulation {
    /// Creates a paused simulation over the given state.
    pub fn new(
        particles: ParticleSet,
        springs: Vec<Spring>,
        tetrahedra: Vec<Tetrahedron>,
        wind_faces: Vec<u32>,
        coupling: RenderCoupling,
        config: SimulationConfig,
    ) -> Self {
        Self {
            particles,
            springs,
            tetrahedra,
            wind_faces,
            coupling,
            config,
            anchors: Vec::new(),
            running: false,
        }
    }

    /// Toggles between Paused and Running. May be flipped between ticks
    /// but never mid-tick.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Returns true while the simulation advances on tick.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Registers an anchor at `position` and returns its handle.
    pub fn add_anchor(&mut self, position: Vec3) -> AnchorId {
        let id = AnchorId(self.anchors.len() as u32);
        self.anchors.push(position);
        id
    }

    /// Moves an anchor; bound particles follow on the next sub-step.
    pub fn set_anchor_position(&mut self, anchor: AnchorId, position: Vec3) {
        self.anchors[anchor.index()] = position;
    }

    /// Returns an anchor's current position.
    pub fn anchor_position(&self, anchor: AnchorId) -> Vec3 {
        self.anchors[anchor.index()]
    }

    /// Advances one outer tick: `sub_steps` sub-steps of
    /// `time_step / sub_steps` each. Does nothing while paused.
    ///
    /// Render reconstruction is the driver's job, once per tick, via
    /// [`Self::write_render_positions`] — not per sub-step.
    pub fn tick(&mut self, external: &[&dyn ExternalForce]) {
        if !self.running {
            return;
        }
        let dt = self.config.sub_dt();
        for _ in 0..self.config.sub_steps {
            self.step(dt, external);
        }
    }

    /// Advances one sub-step of duration `dt`.
    pub fn step(&mut self, dt: f32, external: &[&dyn ExternalForce]) {
        match self.config.integration {
            // Declared but intentionally unimplemented.
            IntegrationScheme::Explicit => {}
            IntegrationScheme::Symplectic => self.step_symplectic(dt, external),
        }
    }

    /// Symplectic (semi-implicit) Euler: velocity from start-of-step
    /// forces, then position from the new velocity.
    fn step_symplectic(&mut self, dt: f32, external: &[&dyn ExternalForce]) {
        // Force accumulation: gravity + node damping, springs, wind,
        // then external contributors (penalty obstacles).
        forces::begin_step(
            &mut self.particles,
            self.config.gravity,
            self.config.node_damping,
        );
        for spring in &self.springs {
            spring.accumulate_forces(&mut self.particles, self.config.spring_damping);
        }
        forces::apply_wind(
            &mut self.particles,
            &self.wind_faces,
            self.config.wind,
            self.config.wind_friction,
        );
        for force in external {
            force.accumulate(&mut self.particles);
        }

        // Integration with kinematic override: fixed particles are
        // overwritten from their anchor and never integrated.
        for i in 0..self.particles.len() {
            match self.particles.bindings[i] {
                Some(binding) => {
                    self.particles.positions[i] =
                        self.anchors[binding.anchor.index()] + binding.offset;
                    self.particles.velocities[i] = Vec3::ZERO;
                }
                None => {
                    let dv = dt / self.particles.masses[i] * self.particles.forces[i];
                    self.particles.velocities[i] += dv;
                    let v = self.particles.velocities[i];
                    self.particles.positions[i] += dt * v;
                }
            }
        }

        for spring in &mut self.springs {
            spring.update_length(&self.particles);
        }
    }

    /// Writes current render-mesh local positions into `out` via the
    /// configured coupling.
    pub fn write_render_positions(&self, world_to_local: Mat4, out: &mut [Vec3]) {
        self.coupling
            .reconstruct(&self.particles, &self.tetrahedra, world_to_local, out);
    }
}
