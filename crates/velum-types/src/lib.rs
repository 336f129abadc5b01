//! # velum-types
//!
//! Shared foundation types for the Velum soft-body simulation core.
//!
//! ## Key Types
//!
//! - [`VelumError`] / [`VelumResult`] — unified error type and alias
//! - [`ParticleId`], [`TetraId`], [`AnchorId`], [`VertexId`] — typed handles
//! - [`constants`] — physical constants and simulation defaults

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{VelumError, VelumResult};
pub use ids::{AnchorId, ParticleId, TetraId, VertexId};
