//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    log_formats, storage_backends, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: String,
    pub request_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Only required by the postgres storage backend
    pub url: Option<String>,
    pub max_connections: u32,
}

/// Where quizzes and submissions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

/// JWT verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let storage = StorageConfig::from_env()?;
        let database = DatabaseConfig::from_env()?;

        if storage.backend == StorageBackend::Postgres && database.url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL".to_string()));
        }

        Ok(Self {
            server: ServerConfig::from_env()?,
            database,
            storage,
            jwt: JwtConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| log_formats::PRETTY.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string()))?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").ok(),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| storage_backends::POSTGRES.to_string());

        Ok(Self {
            backend: StorageBackend::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("STORAGE_BACKEND".to_string()))?,
        })
    }
}

impl StorageBackend {
    /// Parse a backend identifier (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            storage_backends::POSTGRES => Some(Self::Postgres),
            storage_backends::MEMORY => Some(Self::Memory),
            _ => None,
        }
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
