use std::time::Duration;

/// Error while configuring the pacer.
#[derive(Debug)]
pub enum RateError {
    InvalidRate { value: f64 },
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::InvalidRate { value } => {
                write!(f, "invalid events_per_second: {value}")
            }
        }
    }
}

impl std::error::Error for RateError {}

/// Fixed-interval pacing for the delivery loop.
///
/// Sleeps `1 / rate` between events and does not compensate for time spent
/// inside a send, so slow sends reduce the achieved rate below the target.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(events_per_second: f64) -> Result<Self, RateError> {
        if !events_per_second.is_finite() || events_per_second <= 0.0 {
            return Err(RateError::InvalidRate {
                value: events_per_second,
            });
        }

        Ok(Self {
            interval: Duration::from_secs_f64(1.0 / events_per_second),
        })
    }

    /// Delay between consecutive events.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks for one inter-event interval.
    pub fn pause(&self) {
        std::thread::sleep(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_and_non_finite_rates() {
        assert!(Pacer::new(0.0).is_err());
        assert!(Pacer::new(-1.5).is_err());
        assert!(Pacer::new(f64::NAN).is_err());
        assert!(Pacer::new(f64::INFINITY).is_err());
    }

    #[test]
    fn interval_is_reciprocal_of_rate() {
        let pacer = Pacer::new(4.0).expect("pacer");
        assert_eq!(pacer.interval(), Duration::from_millis(250));
    }
}
