use anyhow::{anyhow, Result};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use call_sequence_formatter::formatter;
use call_sequence_formatter::utils::load_config;

fn main() -> Result<()> {
    // Initialize tracing. Logs go to stderr so the formatted output on stdout
    // stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    info!("=========================== INITIALIZING ===========================");

    // Load config
    let config = match load_config("config.yml") {
        Ok(config) => {
            info!("Config loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Err(anyhow!(e));
        }
    };

    let input_path = config.input_path.as_str();
    info!("Input file: {}", input_path);

    info!("======================== FORMATTING CALLS ==========================");

    let rendered = formatter::process_sequence(input_path)?;

    println!("Formatted calls:");
    println!("{}", rendered);

    Ok(())
}
