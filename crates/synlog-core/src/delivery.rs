use crate::event::LogEvent;
use crate::rate::Pacer;
use crate::traits::{EventSource, Transport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Counters owned by the delivery loop, reported on termination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    /// Events handed to the transport.
    pub attempted: u64,
    /// Events the transport confirmed delivered.
    pub sent: u64,
}

/// Drives a source against a transport at a fixed rate.
///
/// Each iteration synthesizes one event, attempts delivery, prints one
/// status line, and paces. Delivery failures are counted and skipped; the
/// loop never retries and never backs off. Termination is either the
/// configured event count (counted in attempts, not successes) or the
/// shutdown flag, checked between iterations so an interrupt never lands
/// mid-send.
pub struct DeliveryLoop<S> {
    source: S,
    transport: Box<dyn Transport>,
    pacer: Pacer,
    max_events: u64,
    shutdown: Arc<AtomicBool>,
}

impl<S: EventSource> DeliveryLoop<S> {
    /// `max_events = 0` runs until the shutdown flag is raised.
    pub fn new(
        source: S,
        transport: Box<dyn Transport>,
        pacer: Pacer,
        max_events: u64,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            source,
            transport,
            pacer,
            max_events,
            shutdown,
        }
    }

    pub fn run(mut self) -> DeliveryStats {
        let mut stats = DeliveryStats::default();

        while !self.shutdown.load(Ordering::Relaxed) {
            if self.max_events > 0 && stats.attempted >= self.max_events {
                break;
            }

            let event = self.source.next_event();
            let delivered = self.transport.send(&event);
            stats.attempted += 1;
            if delivered {
                stats.sent += 1;
            }
            report(&event, delivered, stats.attempted);

            if self.max_events > 0 && stats.attempted >= self.max_events {
                break;
            }
            self.pacer.pause();
        }

        stats
    }
}

fn report(event: &LogEvent, delivered: bool, attempted: u64) {
    if !delivered {
        println!("✗ [{attempted}] failed to deliver event");
        return;
    }

    let marker = if event.level.is_alert() { "🚨" } else { "✓" };
    println!(
        "{marker} [{attempted}] {:<8} {:<20} {}",
        event.level,
        event.source,
        preview(&event.message)
    );
}

fn preview(message: &str) -> &str {
    match message.char_indices().nth(60) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
