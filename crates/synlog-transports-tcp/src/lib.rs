//! Stream-based transport: one TCP connection per event.

use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;
use synlog_core::event::LogEvent;
use synlog_core::traits::Transport;

/// Bound on connect and write so a dead endpoint cannot stall the loop.
const SEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Raw TCP transport writing each event as one JSON line.
///
/// Opens a fresh connection per event and drops it right after the write,
/// so each event's delivery succeeds or fails on its own.
pub struct TcpTransport {
    host: String,
    port: u16,
}

impl TcpTransport {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    /// `host:port` the transport connects to.
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn try_send(&self, event: &LogEvent) -> io::Result<()> {
        let addr = resolve(&self.host, self.port)?;
        let mut stream = TcpStream::connect_timeout(&addr, SEND_TIMEOUT)?;
        stream.set_write_timeout(Some(SEND_TIMEOUT))?;

        let mut buffer = serde_json::to_vec(event)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        buffer.push(b'\n');
        stream.write_all(&buffer)
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, event: &LogEvent) -> bool {
        self.try_send(event).is_ok()
    }
}

fn resolve(host: &str, port: u16) -> io::Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "host resolved to no address"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::thread;
    use synlog_core::event::LogLevel;

    fn sample_event() -> LogEvent {
        LogEvent {
            timestamp: "2024-03-01T12:00:00.000000Z".to_string(),
            level: LogLevel::Fatal,
            source: "database-primary".to_string(),
            message: "FATAL: System crash imminent - memory exhausted".to_string(),
        }
    }

    #[test]
    fn send_writes_one_newline_delimited_json_line() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");

        let reader = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut line = String::new();
            BufReader::new(stream).read_line(&mut line).expect("line");
            line
        });

        let event = sample_event();
        let mut transport = TcpTransport::new(&addr.ip().to_string(), addr.port());
        assert!(transport.send(&event));

        let line = reader.join().expect("reader");
        assert!(line.ends_with('\n'));
        let received: LogEvent = serde_json::from_str(line.trim_end()).expect("wire json");
        assert_eq!(received, event);
    }

    #[test]
    fn send_fails_on_refused_connection() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };

        let mut transport = TcpTransport::new("127.0.0.1", port);
        assert!(!transport.send(&sample_event()));
    }

    #[test]
    fn send_fails_on_unresolvable_host() {
        let mut transport = TcpTransport::new("synlog.invalid", 9090);
        assert!(!transport.send(&sample_event()));
    }

    #[test]
    fn target_is_host_and_port() {
        let transport = TcpTransport::new("localhost", 9090);
        assert_eq!(transport.target(), "localhost:9090");
    }
}
