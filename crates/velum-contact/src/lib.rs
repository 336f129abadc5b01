//! # velum-contact
//!
//! External collaborators of the simulation core:
//!
//! - [`PenaltySphere`] — the single sphere obstacle, applying penalty
//!   contact forces through the solver's `ExternalForce` seam
//! - [`FixerVolume`] — axis-aligned volumes that kinematically bind
//!   contained particles to an anchor at setup time

pub mod fixer;
pub mod sphere;

pub use fixer::FixerVolume;
pub use sphere::PenaltySphere;
