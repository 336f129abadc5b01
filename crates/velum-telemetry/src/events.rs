//! Simulation event types.
//!
//! Lightweight value types emitted once per outer tick. They carry just
//! enough data for monitoring and regression comparison.

use serde::{Deserialize, Serialize};

/// A telemetry event tagged with its outer tick index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Outer tick number (0-indexed).
    pub tick: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Outer tick completed.
    TickEnd {
        /// Wall-clock time for the tick (seconds).
        wall_time: f64,
    },

    /// Kinetic energy snapshot after the tick.
    Energy {
        /// `0.5 * Σ m_i * ||v_i||²`.
        kinetic: f64,
    },

    /// Penalty contact census after the tick.
    PenaltyContacts {
        /// Particles inside the obstacle's inflated radius.
        count: u32,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u32, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
