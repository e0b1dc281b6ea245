use anyhow::{anyhow, Context, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "development" | "dev" | "test" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// `None` allows any origin
    pub cors_origin: Option<String>,
    pub environment: Environment,
    /// Accepted for compatibility with existing deployments; nothing authenticates yet.
    pub jwt_secret: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(value) => Environment::from_str(&value.to_lowercase())
                .ok_or_else(|| anyhow!("APP_ENV must be 'development' or 'production', got '{}'", value))?,
            None => Environment::default(),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") | None => LogFormat::Pretty,
            Some(other) => return Err(anyhow!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other)),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            server_host: lookup("SERVER_HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            cors_origin: lookup("CORS_ORIGIN")
                .filter(|origin| !origin.is_empty() && origin != "*"),
            environment,
            jwt_secret: lookup("JWT_SECRET").filter(|secret| !secret.is_empty()),
            log_format,
        })
    }
}
