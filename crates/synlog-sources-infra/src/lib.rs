//! Infrastructure-style log event synthesizer.
//!
//! Provides the fixed level/source/message catalogs and an
//! `InfraLogGenerator` source with probabilistic anomaly injection.

pub mod catalog;
pub mod generator;
pub mod templates;

pub use catalog::{level_weights, SOURCES};
pub use generator::{InfraLogGenerator, ANOMALY_PROBABILITY};
pub use templates::{render, ANOMALY_TEMPLATES, ENDPOINTS, NORMAL_TEMPLATES};
