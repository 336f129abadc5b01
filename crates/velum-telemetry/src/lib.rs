//! # velum-telemetry
//!
//! Structured telemetry for simulation runs: a broadcast event bus with
//! pluggable sinks. The driver emits events per outer tick (energy,
//! contact counts, wall time); sinks print, collect, or drop them.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{ConsoleSink, EventSink, MemorySink, TracingSink};
