use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// # Fields
    /// - `name` - The environment variable that failed to parse
    /// - `value` - The value found
    /// - `source` - The underlying parse error
    #[error("Invalid value '{value}' for environment variable {name}: {source}")]
    InvalidEnvVar {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
