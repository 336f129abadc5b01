//! Event bus — buffered broadcast of simulation events to sinks.
//!
//! Events are queued on an `std::sync::mpsc` channel and handed to every
//! registered sink on `flush`, which the driver calls at the end of each
//! outer tick. `finalize` performs the last drain and lets sinks release
//! their resources. A disabled bus discards events and keeps count of
//! what it discarded.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for simulation telemetry.
pub struct EventBus {
    tx: mpsc::Sender<SimulationEvent>,
    rx: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
    dropped: u64,
}

impl EventBus {
    /// Creates an enabled bus with no sinks.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            sinks: Vec::new(),
            enabled: true,
            dropped: 0,
        }
    }

    /// Registers a sink to receive events from the next flush on.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Names of the registered sinks, in registration order.
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for the next flush. A disabled bus discards the
    /// event and increments the dropped count instead.
    pub fn emit(&mut self, event: SimulationEvent) {
        if !self.enabled {
            self.dropped += 1;
            return;
        }
        let _ = self.tx.send(event);
    }

    /// Number of events discarded while the bus was disabled.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Drains queued events to every sink. Returns how many events were
    /// delivered.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.rx.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            delivered += 1;
        }
        delivered
    }

    /// Final drain followed by each sink's `finalize`. Returns how many
    /// events the drain delivered.
    pub fn finalize(&mut self) -> usize {
        let delivered = self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
