use clap::{Parser, ValueEnum};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use synlog_core::delivery::DeliveryLoop;
use synlog_core::rate::Pacer;
use synlog_core::traits::Transport;
use synlog_sources_infra::InfraLogGenerator;
use synlog_transports_http::HttpTransport;
use synlog_transports_tcp::TcpTransport;

#[derive(Debug, Parser)]
#[command(name = "synlog")]
#[command(about = "Synthetic log traffic generator", long_about = None)]
struct Cli {
    /// Transport used to deliver events.
    #[arg(long, value_enum, default_value_t = Mode::Http)]
    mode: Mode,
    /// Ingestion host.
    #[arg(long, default_value = "localhost")]
    host: String,
    /// Port for the HTTP transport.
    #[arg(long, default_value_t = 8080)]
    http_port: u16,
    /// Port for the TCP transport.
    #[arg(long, default_value_t = 9090)]
    tcp_port: u16,
    /// Target events per second.
    #[arg(long, default_value_t = 2.0)]
    rate: f64,
    /// Stop after this many events (0 = run until interrupted).
    #[arg(long, default_value_t = 0)]
    count: u64,
    /// Disable anomaly injection.
    #[arg(long)]
    no_anomalies: bool,
    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Http,
    Tcp,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pacer = Pacer::new(cli.rate)?;
    let generator = InfraLogGenerator::new(cli.seed, !cli.no_anomalies)?;

    let (transport, target): (Box<dyn Transport>, String) = match cli.mode {
        Mode::Http => {
            let http = HttpTransport::new(&cli.host, cli.http_port)?;
            let target = http.endpoint().to_string();
            (Box::new(http), target)
        }
        Mode::Tcp => {
            let tcp = TcpTransport::new(&cli.host, cli.tcp_port);
            let target = tcp.target();
            (Box::new(tcp), target)
        }
    };

    println!("starting log generator");
    println!("mode: {}", match cli.mode {
        Mode::Http => "http",
        Mode::Tcp => "tcp",
    });
    println!("rate: {} events/s", cli.rate);
    println!(
        "anomalies: {}",
        if cli.no_anomalies { "disabled" } else { "enabled" }
    );
    println!("target: {target}");
    println!();
    println!("press Ctrl+C to stop");
    println!();

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::Relaxed);
    })?;

    let stats = DeliveryLoop::new(generator, transport, pacer, cli.count, shutdown).run();

    println!();
    println!("stopped: sent {} of {} attempted", stats.sent, stats.attempted);
    Ok(())
}
