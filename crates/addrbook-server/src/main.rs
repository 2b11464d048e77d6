//! addrbook: Address book service main binary
//!
//! Usage:
//!   addrbook                   - Start the HTTP API server
//!   addrbook --config <path>   - Start with an explicit config file
//!   addrbook --help            - Show help

use addrbook_core::Config;
use tracing_subscriber::EnvFilter;

/// Run mode
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    /// HTTP API server, optionally with an explicit config file
    Server { config_path: Option<String> },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = match parse_args(&args)? {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("addrbook {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server { config_path } => config_path,
    };

    // Load .env file
    dotenvy::dotenv().ok();

    let config = match config_path {
        Some(path) => Config::from_toml_file(&path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .init();

    tracing::info!("Starting addrbook...");
    tracing::info!(
        "Listening on {}:{} (CORS origins: {})",
        config.server.host,
        config.server.port,
        if config.server.allowed_origins.is_empty() {
            "any".to_string()
        } else {
            config.server.allowed_origins.join(", ")
        }
    );

    addrbook_api::start_server(config).await?;

    tracing::info!("addrbook stopped");
    Ok(())
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<RunMode> {
    let mut config_path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-v" => return Ok(RunMode::Version),
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config_path = Some(path.clone());
            }
            other => anyhow::bail!("Unknown argument: {} (see --help)", other),
        }
    }

    Ok(RunMode::Server { config_path })
}

/// Print help message
fn print_help() {
    println!("addrbook - multi-tenant address book API");
    println!();
    println!("Usage:");
    println!("  addrbook                  Start the HTTP API server");
    println!("  addrbook --config <path>  Load configuration from <path>");
    println!("  addrbook --help           Show this help message");
    println!("  addrbook --version        Show version");
    println!();
    println!("Environment Variables:");
    println!("  ADDRBOOK_HOST             Bind address (default: 0.0.0.0)");
    println!("  ADDRBOOK_PORT             Bind port (default: 8080)");
    println!("  ADDRBOOK_ALLOWED_ORIGINS  Comma-separated CORS origins (default: any)");
    println!("  ADDRBOOK_LOG_LEVEL        Log filter when RUST_LOG is unset (default: info)");
    println!("  RUST_LOG                  Log filter");
}
