//! Request-based transport: one HTTP POST per event.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use synlog_core::event::LogEvent;
use synlog_core::traits::Transport;

/// Bound on each request so a dead endpoint cannot stall the loop.
const SEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Stateless HTTP transport posting each event to the ingestion endpoint.
///
/// Only HTTP 200 counts as delivered; every other status and every
/// transport-level error is reported as a failed send.
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(host: &str, port: u16) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            endpoint: format!("http://{host}:{port}/logs"),
            client,
        })
    }

    /// Full URL events are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, event: &LogEvent) -> bool {
        match self.client.post(&self.endpoint).json(event).send() {
            Ok(response) => response.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}
