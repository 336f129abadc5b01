//! Tests for event delivery through the bus.

use std::sync::{Arc, Mutex};

use velum_telemetry::{EventBus, EventKind, EventSink, MemorySink, SimulationEvent, TracingSink};

/// Sink sharing its event log with the test.
struct SharedSink {
    log: Arc<Mutex<Vec<SimulationEvent>>>,
    finalized: Arc<Mutex<bool>>,
}

impl SharedSink {
    fn new() -> (Self, Arc<Mutex<Vec<SimulationEvent>>>, Arc<Mutex<bool>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let finalized = Arc::new(Mutex::new(false));
        let sink = Self {
            log: Arc::clone(&log),
            finalized: Arc::clone(&finalized),
        };
        (sink, log, finalized)
    }
}

impl EventSink for SharedSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.log.lock().unwrap().push(event.clone());
    }

    fn finalize(&mut self) {
        *self.finalized.lock().unwrap() = true;
    }

    fn name(&self) -> &str {
        "shared"
    }
}

fn tick_end(tick: u32) -> SimulationEvent {
    SimulationEvent::new(tick, EventKind::TickEnd { wall_time: 0.001 })
}

#[test]
fn flush_delivers_buffered_events_in_order() {
    let (sink, log, _) = SharedSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    bus.emit(tick_end(0));
    bus.emit(SimulationEvent::new(0, EventKind::Energy { kinetic: 1.5 }));
    assert!(log.lock().unwrap().is_empty());

    assert_eq!(bus.flush(), 2);

    let events = log.lock().unwrap();
    assert!(matches!(events[0].kind, EventKind::TickEnd { .. }));
    assert!(matches!(events[1].kind, EventKind::Energy { kinetic } if kinetic == 1.5));
}

#[test]
fn every_sink_sees_every_event() {
    let (first_sink, first, _) = SharedSink::new();
    let (second_sink, second, _) = SharedSink::new();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(first_sink));
    bus.add_sink(Box::new(second_sink));
    assert_eq!(bus.sink_count(), 2);
    assert_eq!(bus.sink_names(), vec!["shared", "shared"]);

    bus.emit(SimulationEvent::new(3, EventKind::PenaltyContacts { count: 7 }));
    bus.flush();

    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(second.lock().unwrap().len(), 1);
    assert_eq!(first.lock().unwrap()[0].tick, 3);
}

#[test]
fn disabled_bus_counts_dropped_events() {
    let (sink, log, _) = SharedSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(tick_end(0));
    bus.emit(tick_end(1));
    assert_eq!(bus.flush(), 0);
    assert_eq!(bus.dropped(), 2);
    assert!(log.lock().unwrap().is_empty());

    // Re-enabling resumes delivery without losing the sink.
    bus.set_enabled(true);
    bus.emit(tick_end(2));
    assert_eq!(bus.flush(), 1);
    assert_eq!(bus.dropped(), 2);
}

#[test]
fn flush_drains_the_buffer() {
    let (sink, log, _) = SharedSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    bus.emit(tick_end(0));
    assert_eq!(bus.flush(), 1);
    assert_eq!(bus.flush(), 0);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn finalize_drains_then_notifies_sinks() {
    let (sink, log, finalized) = SharedSink::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    bus.emit(tick_end(0));
    assert_eq!(bus.finalize(), 1);
    assert_eq!(log.lock().unwrap().len(), 1);
    assert!(*finalized.lock().unwrap());
}

#[test]
fn memory_sink_records_in_order() {
    let mut sink = MemorySink::default();
    for tick in 0..3 {
        sink.handle(&tick_end(tick));
    }
    assert_eq!(sink.events.len(), 3);
    assert_eq!(sink.events[2].tick, 2);
    assert_eq!(sink.name(), "memory");
}

#[test]
fn tracing_sink_accepts_events_without_a_subscriber() {
    let mut sink = TracingSink;
    sink.handle(&tick_end(0));
    sink.handle(&SimulationEvent::new(1, EventKind::Energy { kinetic: 0.25 }));
    sink.handle(&SimulationEvent::new(2, EventKind::PenaltyContacts { count: 3 }));
    assert_eq!(sink.name(), "tracing");
}
