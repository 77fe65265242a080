use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Input path must not be empty")]
    EmptyInputPath,
}
