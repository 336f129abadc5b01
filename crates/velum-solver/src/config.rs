//! Simulation configuration.
//!
//! All physics parameters are injected, never derived: time step,
//! sub-stepping, gravity, damping coefficients, stiffnesses, wind,
//! penalty stiffness, and the mass model.

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::{constants, VelumError, VelumResult};

/// Time integration scheme.
///
/// `Explicit` is a declared seam and intentionally a no-op; only
/// `Symplectic` (semi-implicit Euler) is functional. Velocity updates
/// use start-of-step forces, position updates use the new velocity —
/// that ordering is what keeps stiff springs energy-stable at realistic
/// stiffness/timestep ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationScheme {
    Explicit,
    Symplectic,
}

/// Injected physics parameters for one simulation instance.
///
/// Deserialization fills missing fields from [`Default`], so scenario
/// files only name the parameters they override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Outer tick duration (seconds).
    pub time_step: f32,

    /// Sub-steps per outer tick; each runs with `time_step / sub_steps`.
    pub sub_steps: u32,

    /// Gravity vector (m/s²).
    pub gravity: Vec3,

    /// Integration scheme.
    pub integration: IntegrationScheme,

    /// Uniform base node mass (kg). The solid path adds quarter-masses
    /// from incident tetrahedra on top.
    pub node_mass: f32,

    /// Mass density for the solid path (kg/m³ of tetrahedron volume).
    pub density: f32,

    /// Per-particle linear drag coefficient.
    pub node_damping: f32,

    /// Per-spring damping coefficient (scales with spring stiffness).
    pub spring_damping: f32,

    /// Stiffness of traction (stretch) springs.
    pub traction_stiffness: f32,

    /// Stiffness of bending (flexion) springs — cloth only.
    pub bending_stiffness: f32,

    /// Wind velocity vector.
    pub wind: Vec3,

    /// Wind friction coefficient (flat-plate drag scale).
    pub wind_friction: f32,

    /// Penalty contact stiffness against the sphere obstacle.
    pub penalty_stiffness: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: constants::DEFAULT_DT,
            sub_steps: constants::DEFAULT_SUB_STEPS,
            gravity: Vec3::new(0.0, -constants::GRAVITY, 0.0),
            integration: IntegrationScheme::Symplectic,
            node_mass: 1.0,
            density: 1.0,
            node_damping: 0.1,
            spring_damping: 0.1,
            traction_stiffness: 100.0,
            bending_stiffness: 50.0,
            wind: Vec3::ZERO,
            wind_friction: 0.5,
            penalty_stiffness: 100.0,
        }
    }
}

impl SimulationConfig {
    /// Validates the configuration. Fatal at setup — an invalid value
    /// here is a logic error in the caller, not a runtime fault.
    pub fn validate(&self) -> VelumResult<()> {
        if !(self.time_step > 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.sub_steps == 0 {
            return Err(VelumError::InvalidConfig("sub_steps must be at least 1".into()));
        }
        if !(self.node_mass > 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "node_mass must be positive, got {}",
                self.node_mass
            )));
        }
        if self.density < 0.0 {
            return Err(VelumError::InvalidConfig("density must be non-negative".into()));
        }
        for (name, value) in [
            ("node_damping", self.node_damping),
            ("spring_damping", self.spring_damping),
            ("traction_stiffness", self.traction_stiffness),
            ("bending_stiffness", self.bending_stiffness),
            ("wind_friction", self.wind_friction),
            ("penalty_stiffness", self.penalty_stiffness),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(VelumError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Duration of one sub-step.
    #[inline]
    pub fn sub_dt(&self) -> f32 {
        self.time_step / self.sub_steps as f32
    }
}
