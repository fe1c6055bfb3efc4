//! ANAA UHF RFID reader.
//!
//! Runs next to the reader hardware (typically a Raspberry Pi) and forwards
//! every scanned tag to the attendance backend.
//!
//! Usage:
//!   anaa-reader --port /dev/ttyACM0 --api-base-url http://192.168.0.104:5000
//!
//! Exits with status 1 if the serial port cannot be opened, 0 after Ctrl+C.

use anaa_backend::{BackendClient, BackendConfig};
use anaa_reader::{ReaderConfig, ReaderContext, SerialConfig, logging, open_serial};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "anaa-reader")]
#[command(about = "Forwards UHF RFID scans from a serial reader to the ANAA backend")]
struct Args {
    /// Serial device the reader is attached to
    #[arg(short, long, env = "ANAA_SERIAL_PORT", default_value = "/dev/ttyACM0")]
    port: String,

    /// Serial baud rate
    #[arg(short, long, env = "ANAA_BAUD_RATE", default_value = "115200")]
    baud_rate: u32,

    /// Per-read serial timeout in milliseconds
    #[arg(long, env = "ANAA_READ_TIMEOUT_MS", default_value = "1000")]
    read_timeout_ms: u64,

    /// Base URL of the backend API
    #[arg(long, env = "ANAA_API_BASE_URL", default_value = "http://192.168.0.104:5000")]
    api_base_url: String,

    /// Per-request backend timeout in milliseconds
    #[arg(long, env = "ANAA_REQUEST_TIMEOUT_MS", default_value = "5000")]
    request_timeout_ms: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let serial_config = SerialConfig {
        path: args.port,
        baud_rate: args.baud_rate,
        read_timeout_ms: args.read_timeout_ms,
    };
    let backend_config = BackendConfig {
        base_url: args.api_base_url,
        request_timeout_ms: args.request_timeout_ms,
    };

    let client = BackendClient::new(backend_config).context("Failed to create backend client")?;

    let source = match open_serial(&serial_config) {
        Ok(source) => source,
        Err(e) => {
            error!("Could not open serial port {}: {}", serial_config.path, e);
            std::process::exit(1);
        }
    };
    info!("Serial port {} opened successfully", serial_config.path);
    info!("Baud rate: {}", serial_config.baud_rate);
    info!("Connected to backend: {}", client.config().base());

    logging::banner();

    let context = ReaderContext::new(source, client, ReaderConfig::default());
    context.run(shutdown_signal()).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
