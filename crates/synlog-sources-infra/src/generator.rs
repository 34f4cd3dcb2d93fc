use crate::catalog::{level_weights, SOURCES};
use crate::templates::{render, ANOMALY_TEMPLATES, NORMAL_TEMPLATES};
use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synlog_core::catalog::{CatalogError, WeightedCatalog};
use synlog_core::event::{LogEvent, LogLevel};
use synlog_core::traits::EventSource;

/// Probability that a generated event is replaced by an anomaly.
pub const ANOMALY_PROBABILITY: f64 = 0.05;

/// Weighted-random log event source.
///
/// Owns its RNG so generation is deterministic under a fixed seed. No I/O
/// and no shared state; the delivery loop drives it one event at a time.
pub struct InfraLogGenerator {
    rng: StdRng,
    levels: WeightedCatalog<LogLevel>,
    anomalies: bool,
}

impl InfraLogGenerator {
    pub fn new(seed: Option<u64>, anomalies: bool) -> Result<Self, CatalogError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let levels = WeightedCatalog::new(level_weights())?;

        Ok(Self {
            rng,
            levels,
            anomalies,
        })
    }

    fn synthesize(&mut self) -> (LogEvent, bool) {
        let is_anomaly = self.anomalies && self.rng.gen_bool(ANOMALY_PROBABILITY);
        let mut level = *self.levels.choose(&mut self.rng);
        let source = SOURCES[self.rng.gen_range(0..SOURCES.len())];

        let template = if is_anomaly {
            level = escalate(level, &mut self.rng);
            ANOMALY_TEMPLATES[self.rng.gen_range(0..ANOMALY_TEMPLATES.len())]
        } else {
            NORMAL_TEMPLATES[self.rng.gen_range(0..NORMAL_TEMPLATES.len())]
        };

        let event = LogEvent {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            level,
            source: source.to_string(),
            message: render(template, &mut self.rng),
        };

        (event, is_anomaly)
    }
}

impl EventSource for InfraLogGenerator {
    fn next_event(&mut self) -> LogEvent {
        self.synthesize().0
    }
}

/// Anomalies are never reported below ERROR: an INFO or WARN draw is
/// replaced by a uniform pick among the high-severity levels, any other
/// draw passes through. Applied after the weighted draw, so anomalous
/// events are high-severity regardless of the base distribution.
fn escalate(level: LogLevel, rng: &mut impl Rng) -> LogLevel {
    match level {
        LogLevel::Info | LogLevel::Warn => {
            const HIGH: [LogLevel; 3] = [LogLevel::Critical, LogLevel::Fatal, LogLevel::Error];
            HIGH[rng.gen_range(0..HIGH.len())]
        }
        other => other,
    }
}
