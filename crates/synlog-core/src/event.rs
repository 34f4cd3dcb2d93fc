use serde::{Deserialize, Serialize};

/// A single synthetic log record.
///
/// This is the wire unit for every transport: one JSON object with exactly
/// four string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Generation time (RFC3339 UTC, `Z`-suffixed).
    pub timestamp: String,
    /// Severity of the record.
    pub level: LogLevel,
    /// Synthetic host/service that "emitted" the record.
    pub source: String,
    /// Rendered message text.
    pub message: String,
}

/// Severity levels emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Critical,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Levels that get a distinct marker on the operator console.
    pub fn is_alert(&self) -> bool {
        matches!(self, LogLevel::Critical | LogLevel::Fatal)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_serialize_uppercase() {
        let json = serde_json::to_string(&LogLevel::Critical).expect("level json");
        assert_eq!(json, "\"CRITICAL\"");
        let back: LogLevel = serde_json::from_str("\"WARN\"").expect("level parse");
        assert_eq!(back, LogLevel::Warn);
    }

    #[test]
    fn wire_round_trip_preserves_all_fields() {
        let event = LogEvent {
            timestamp: "2024-03-01T12:00:00.000123Z".to_string(),
            level: LogLevel::Error,
            source: "api-gateway".to_string(),
            message: "503 Service Unavailable".to_string(),
        };

        let wire = serde_json::to_string(&event).expect("event json");
        let back: LogEvent = serde_json::from_str(&wire).expect("event parse");
        assert_eq!(back, event);
    }

    #[test]
    fn only_critical_and_fatal_are_alerts() {
        assert!(LogLevel::Critical.is_alert());
        assert!(LogLevel::Fatal.is_alert());
        assert!(!LogLevel::Info.is_alert());
        assert!(!LogLevel::Warn.is_alert());
        assert!(!LogLevel::Error.is_alert());
    }
}
