use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::models::common::Config;
use crate::models::errors::ConfigError;

pub fn load_config<P: AsRef<Path>>(file_name: P) -> Result<Config> {
    // Build the path to the config file
    let manifest_dir = env!("CARGO_MANIFEST_DIR").to_string();
    let config_path = Path::new(&manifest_dir).join(file_name);
    info!("Config path: {}", config_path.to_string_lossy());

    // Read the file contents to a string
    let contents = fs::read_to_string(config_path).context("failed to read config file")?;

    // Parse the YAML into our Config struct
    let config: Config =
        serde_yaml::from_str(&contents).context("failed to parse config YAML")?;

    if config.input_path.is_empty() {
        return Err(ConfigError::EmptyInputPath.into());
    }

    Ok(config)
}
