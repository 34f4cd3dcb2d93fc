use crate::event::LogEvent;

/// Produces one well-formed event per call. Synthesis never fails.
pub trait EventSource {
    fn next_event(&mut self) -> LogEvent;
}

/// Delivers one serialized event to the ingestion endpoint.
///
/// Implementations must absorb every failure (connect error, timeout,
/// rejected response) and report it as `false`; `send` never panics and
/// never propagates an error to the loop.
pub trait Transport {
    fn send(&mut self, event: &LogEvent) -> bool;
}
