use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tower_http::trace::TraceLayer;
use tracing::info;

use ticketd::cors::{build_cors_layer, DEFAULT_CORS_ORIGINS};
use ticketd::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use ticketd::store::DocumentStore;
use ticketd::utils::{default_data_dir, default_log_dir};

const DEFAULT_ADDR: &str = "127.0.0.1:3207";

/// Ticketd - Project-scoped issue tracker REST service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "TICKETD_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Directory holding the issue collection (default: ~/.ticketd)
    #[arg(short, long, env = "TICKETD_DATA_DIR")]
    data_dir: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    #[arg(
        long,
        env = "TICKETD_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "TICKETD_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TICKETD_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.ticketd/logs)
    #[arg(long, env = "TICKETD_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_bind_error(addr: &str, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of ticketd may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill ticketd");
        eprintln!("  2. Use a different port:        ticketd --addr 127.0.0.1:3208");
        eprintln!();
    } else {
        eprintln!();
        eprintln!("Error: Failed to start server: {e}");
        eprintln!();
    }
    eprintln!("Logs: {}", logging::get_log_file_path());
    eprintln!();
}

async fn shutdown_signal() {
    // Errors installing the handler leave the server running until killed
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal, stopping server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    // Configure and initialize logging
    let log_dir = args.log_dir.map(PathBuf::from).unwrap_or_else(default_log_dir);

    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Open the document store; the handle is injected into the router state
    let data_dir = args.data_dir.map(PathBuf::from).unwrap_or_else(default_data_dir);
    let store = Arc::new(DocumentStore::open(&data_dir).await?);
    info!("Issue collection at {}", data_dir.display());

    // Process CORS origins
    let cors_origins: Vec<String> = args
        .cors_origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    info!(
        "CORS origins: {}",
        if allow_all_origins {
            "*".to_string()
        } else {
            cors_origins.join(", ")
        }
    );

    let cors = build_cors_layer(cors_origins);

    let app = ticketd::server::router(store)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = match tokio::net::TcpListener::bind(&args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(&args.addr, &e);
            return Err(e.into());
        }
    };

    info!("Starting ticketd on {}", args.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Ticketd stopped");
    Ok(())
}
