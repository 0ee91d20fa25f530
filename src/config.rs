//! Runtime configuration from environment variables (and `.env` via dotenvy).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            _ => Err("expected production or development".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL URL. Subjects are kept in memory when unset.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub environment: Environment,
    pub max_connections: u32,
    /// Seed the todo list with the demo item.
    pub seed_todos: bool,
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            environment: Environment::default(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_todos: true,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}

fn parse_flag(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "expected a boolean".into(),
        }),
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Ok(Self {
            database_url: get("DATABASE_URL"),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            environment: get("APP_ENV")
                .map(|v| parse_var("APP_ENV", v))
                .transpose()?
                .unwrap_or(defaults.environment),
            max_connections: get("DB_MAX_CONNECTIONS")
                .map(|v| parse_var("DB_MAX_CONNECTIONS", v))
                .transpose()?
                .unwrap_or(defaults.max_connections),
            seed_todos: get("SEED_TODOS")
                .map(|v| parse_flag("SEED_TODOS", v))
                .transpose()?
                .unwrap_or(defaults.seed_todos),
            body_limit_bytes: get("BODY_LIMIT_BYTES")
                .map(|v| parse_var("BODY_LIMIT_BYTES", v))
                .transpose()?
                .unwrap_or(defaults.body_limit_bytes),
        })
    }
}
