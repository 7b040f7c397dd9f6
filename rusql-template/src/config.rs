use std::env::var;

use crate::{Error, Result};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings of a [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, loading a `.env` file first if
    /// there is one.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let database_url =
            var(DATABASE_URL).map_err(|_| Error::Config(format!("{DATABASE_URL} must be set")))?;
        let max_connections = match var(DATABASE_MAX_CONNECTIONS) {
            Ok(value) => parse_max_connections(&value)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

fn parse_max_connections(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!(
            "{DATABASE_MAX_CONNECTIONS} must be a positive integer, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Config::new("sqlite::memory:");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.max_connections(1).max_connections, 1);
    }

    #[test]
    fn test_parse_max_connections() {
        assert_eq!(parse_max_connections(" 8 ").unwrap(), 8);
        assert!(matches!(parse_max_connections("0"), Err(Error::Config(_))));
        assert!(matches!(parse_max_connections("many"), Err(Error::Config(_))));
    }
}
