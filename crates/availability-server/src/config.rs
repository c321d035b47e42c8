use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// JSON array of resource records loaded into the store at startup.
    pub seed_file: Option<PathBuf>,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset keys fall back to defaults.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("SERVER_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = var("SERVER_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let seed_file = var("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let environment = match var("APP_ENVIRONMENT") {
            Some(value) => value
                .parse::<Environment>()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse APP_ENVIRONMENT")?,
            None => Environment::default(),
        };

        Ok(Self {
            host,
            port,
            seed_file,
            environment,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}
