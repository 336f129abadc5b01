//! # velum-solver
//!
//! The Velum simulation core: particle/spring/tetrahedron data model,
//! edge-deduplicating topology builder, force model, sub-stepped
//! symplectic-Euler integrator, and barycentric render embedding.
//!
//! ## Key Types
//!
//! - [`ParticleSet`] — arena of point masses with kinematic anchor bindings
//! - [`Spring`] / [`Tetrahedron`] — elastic links and volumetric cells
//! - [`Simulation`] — owns all state, advances it via [`Simulation::tick`]
//! - [`SimulationConfig`] — injected physics parameters (serde)
//! - [`RenderCoupling`] — direct or barycentric-embedded render mapping
//! - [`ExternalForce`] — seam for step-time collaborators (penalty contact)

pub mod assembly;
pub mod config;
pub mod embedding;
pub mod forces;
pub mod integrator;
pub mod particle;
pub mod spring;
pub mod tetra;
pub mod topology;

pub use assembly::{assemble_cloth, assemble_solid, SolidInput};
pub use config::{IntegrationScheme, SimulationConfig};
pub use embedding::{EmbeddedVertex, Embedding, RenderCoupling};
pub use forces::ExternalForce;
pub use integrator::Simulation;
pub use particle::{AnchorBinding, ParticleSet};
pub use spring::{Spring, SpringKind};
pub use tetra::Tetrahedron;
