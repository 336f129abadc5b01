//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds).
pub const DEFAULT_DT: f32 = 0.01;

/// Default number of sub-steps per outer tick.
pub const DEFAULT_SUB_STEPS: u32 = 10;

/// Tolerance below which the barycentric containment test still accepts
/// a vertex (allows small negative weights at tetrahedron faces).
pub const BARYCENTRIC_EPSILON: f32 = 0.0005;

/// Safety margin applied to the penalty sphere radius. The contact test
/// and penetration depth both use `radius * PENALTY_RADIUS_MARGIN`.
pub const PENALTY_RADIUS_MARGIN: f32 = 1.1;

/// Epsilon for degenerate geometry detection (edge length, tet volume).
pub const DEGENERATE_EPSILON: f32 = 1.0e-9;
