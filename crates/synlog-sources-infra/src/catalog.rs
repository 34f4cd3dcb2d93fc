use synlog_core::event::LogLevel;

/// Synthetic hosts and services that appear as event sources.
pub const SOURCES: [&str; 8] = [
    "web-server-01",
    "web-server-02",
    "api-gateway",
    "database-primary",
    "database-replica",
    "auth-service",
    "cache-redis",
    "payment-processor",
];

/// Relative level weights tuned for a realistic severity mix.
pub fn level_weights() -> Vec<(LogLevel, f64)> {
    vec![
        (LogLevel::Info, 70.0),
        (LogLevel::Warn, 20.0),
        (LogLevel::Error, 8.0),
        (LogLevel::Critical, 1.5),
        (LogLevel::Fatal, 0.5),
    ]
}
