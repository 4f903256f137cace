use std::str::FromStr;

use tracing::Level;

use crate::utils::StreamliteResult;

pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .init();
}

fn parse_level(level: &str) -> Level {
    Level::from_str(level).unwrap_or(Level::INFO)
}

/// Load `./.env` into the process environment. A missing file is fine.
pub fn load_env() -> StreamliteResult<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn load_config() -> StreamliteResult<crate::config::Config> {
    load_env()?;
    Ok(crate::config::Config::init()?)
}
