use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` falls back to a local SQLite database and `PORT`
    /// defaults to 3000 when unset. A `PORT` value that is set but not a
    /// valid port number is a configuration error rather than a silent
    /// fallback.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
