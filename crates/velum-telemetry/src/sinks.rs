//! Event sinks — consumers on the receiving side of the bus.

use crate::events::{EventKind, SimulationEvent};

/// A consumer of simulation events.
pub trait EventSink: Send {
    /// Handles one event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once after the final flush. Close files, flush buffers.
    fn finalize(&mut self) {}

    /// Short sink name for diagnostics.
    fn name(&self) -> &str;
}

/// Prints events to stdout, one line each.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match &event.kind {
            EventKind::TickEnd { wall_time } => {
                println!("[tick {:>5}] wall {:.3}ms", event.tick, wall_time * 1000.0);
            }
            EventKind::Energy { kinetic } => {
                println!("[tick {:>5}] kinetic {kinetic:.6e}", event.tick);
            }
            EventKind::PenaltyContacts { count } => {
                println!("[tick {:>5}] contacts {count}", event.tick);
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Collects events in memory, for tests and post-run inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// All events received, in order.
    pub events: Vec<SimulationEvent>,
}

impl EventSink for MemorySink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Forwards events to the `tracing` ecosystem as structured records.
///
/// Without a subscriber installed the records go nowhere, so the sink is
/// safe to register unconditionally.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match &event.kind {
            EventKind::TickEnd { wall_time } => {
                tracing::info!(tick = event.tick, wall_ms = wall_time * 1000.0, "tick_end");
            }
            EventKind::Energy { kinetic } => {
                tracing::info!(tick = event.tick, kinetic = *kinetic, "energy");
            }
            EventKind::PenaltyContacts { count } => {
                tracing::info!(tick = event.tick, count = *count, "penalty_contacts");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
