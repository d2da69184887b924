//! Settings read from the environment (after `.env`, if present).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/company";
pub const DEFAULT_SCHEMA: &str = "company";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::Invalid {
                key: "COMPANY_STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    /// PostgreSQL schema holding the collection tables.
    pub schema: String,
    pub store: StoreKind,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let schema = lookup("COMPANY_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&schema) {
            return Err(ConfigError::SchemaName(schema));
        }
        let store = match lookup("COMPANY_STORE") {
            Some(v) => v.parse()?,
            None => StoreKind::Postgres,
        };
        let max_connections = parse_or("DB_MAX_CONNECTIONS", &lookup, DEFAULT_MAX_CONNECTIONS)?;
        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: v,
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: DEFAULT_BIND_ADDR.into(),
                })?,
        };
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", &lookup, DEFAULT_BODY_LIMIT_BYTES)?;
        Ok(Settings {
            database_url,
            schema,
            store,
            max_connections,
            bind_addr,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}

/// Plain unquoted PostgreSQL identifier: letter or `_`, then letters, digits, `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
