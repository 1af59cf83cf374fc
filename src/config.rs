use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,

    pub max_connections: u32,
    pub sqlx_logging: bool,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads a `.env` file first if one is present, then delegates to `from_vars`.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError)` - A required variable is missing or a value failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - An optional variable holds an unparsable value
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DATABASE_MAX_CONNECTIONS".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let sqlx_logging = match var("DATABASE_SQLX_LOGGING") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DATABASE_SQLX_LOGGING".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => false,
        };

        Ok(Self {
            database_url,
            max_connections,
            sqlx_logging,
        })
    }
}
