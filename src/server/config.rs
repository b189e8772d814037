use crate::server::error::config::ConfigError;

/// Default bearer token lifetime in days when `JWT_EXPIRES_IN_DAYS` is unset.
pub const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8000)?,
            jwt_secret: require_var("JWT_SECRET")?,
            jwt_expires_in_days: parse_var("JWT_EXPIRES_IN_DAYS", DEFAULT_JWT_EXPIRES_IN_DAYS)?,
        })
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_var<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("failed to parse {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
