//! Error types for the Velum core.
//!
//! All crates return `VelumResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Velum core.
#[derive(Debug, Error)]
pub enum VelumError {
    /// Configuration value is invalid (non-positive timestep, zero mass, ...).
    /// Fatal at setup: indicates a logic error, not a runtime fault.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A node/element/face file failed to parse. Names the offending line
    /// so a partial load never silently produces a corrupt topology.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Zero-length spring or zero-volume tetrahedron. Both break the force
    /// formulas (division by rest_length² or volume), so construction fails.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Mesh or topology data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, VelumError>`.
pub type VelumResult<T> = Result<T, VelumError>;
