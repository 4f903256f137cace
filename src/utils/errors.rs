use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}
