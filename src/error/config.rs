use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but holds a value that cannot be parsed.
    ///
    /// Check the `.env.example` file for the expected format of each
    /// configuration variable.
    #[error("Invalid value for environment variable {0}: '{1}'")]
    InvalidEnvVar(String, String),
}
