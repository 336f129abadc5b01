//! # velum-math
//!
//! Linear algebra primitives for the Velum simulation core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Triangle normal/area and tetrahedron volume helpers used by the
//!   force model, topology builder, and barycentric embedder.

pub mod geometry;

// Re-export glam types as the canonical math types for Velum.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
