//! E-commerce API — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/ecommerce/config.toml)
//! ecommerce-api
//!
//! # Custom config path
//! ecommerce-api --config /etc/ecommerce/config.toml
//!
//! # Override the port
//! ecommerce-api --api-port 8081
//!
//! # Validate config without starting
//! ecommerce-api --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use ecommerce::config::{AppConfig, StorageDriver};
use ecommerce::server::{init_tracing, ServerHandle, ServerOptions};

/// Customer registration and Pix payment REST API.
#[derive(Parser, Debug)]
#[command(
    name = "ecommerce-api",
    version,
    about = "Customer registration and Pix payment REST API",
    long_about = "REST API for registering customer companies and creating Pix charges.\n\n\
                  Default config: ~/.config/ecommerce/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ECOMMERCE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(ecommerce::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // The log level override must apply before the subscriber is built.
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
        config.server.api_port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let storage = match config.database.driver {
            StorageDriver::Sqlite => config.database.connection_url(),
            StorageDriver::Memory => "in-memory".to_string(),
        };
        println!("Configuration is valid");
        println!("   Config file  : {}", config_path.display());
        println!("   API address  : {}", config.api_address());
        println!("   Storage      : {}", storage);
        println!("   Charge delay : {} ms", config.payment.charge_delay_ms);
        println!("   Log level    : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}
