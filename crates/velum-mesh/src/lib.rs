//! # velum-mesh
//!
//! Triangle mesh data for the Velum simulation core.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — vertex positions + flat index buffer, with validation
//! - [`generators`] — deterministic procedural meshes for tests and scenarios

pub mod generators;
pub mod mesh;

pub use mesh::TriangleMesh;
