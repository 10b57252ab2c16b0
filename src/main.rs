use anyhow::Result;
use gemini_ask::{config, server};
use tracing::{error, info};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn fatal(message: impl std::fmt::Display) -> ! {
    error!("{}", message);
    eprintln!("{}", message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let mut config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting gemini-ask server with log level: {}", log_level);

    if let Err(e) = config::load_env_file(&config.server.env_file) {
        fatal(format!(
            "Error loading {} file: {}",
            config.server.env_file, e
        ));
    }

    config.llm = match config.llm.with_api_key_from_env() {
        Ok(llm) => llm,
        Err(e) => fatal(e),
    };

    info!("Configuration loaded successfully");

    if let Err(e) = server::run(config).await {
        fatal(format!("Server error: {}", e));
    }

    Ok(())
}
