use crate::error::ConfigError;
use crate::service::Service;
use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";

/// # Server Configuration
///
/// Network settings for one service process. Every value comes from the
/// deployment environment (optionally seeded from a `.env` file); nothing
/// here changes what the routes return.
///
/// ## Keys (shown for the accounts service)
/// - `ACCOUNTS_HOST`, falling back to `HOST`, then `127.0.0.1`
/// - `ACCOUNTS_PORT`, falling back to `PORT`, then the service default
/// - `ACCOUNTS_WORKERS`: optional worker thread count
/// - `ACCOUNTS_API_DOCS`: serve Swagger UI and the OpenAPI document (default off)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub api_docs: bool,
}

impl ServerConfig {
    pub fn defaults(service: Service) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: service.default_port(),
            workers: None,
            api_docs: false,
        }
    }

    pub fn from_env(service: Service) -> Result<Self, ConfigError> {
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    /// Resolves the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service.env_prefix();
        // Blank values count as unset so the next fallback still applies
        let scoped = |name: &str| {
            let key = format!("{}_{}", prefix, name);
            lookup(&key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        };
        let shared = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (name.to_string(), value))
        };

        let mut config = Self::defaults(service);

        if let Some((_, host)) = scoped("HOST").or_else(|| shared("HOST")) {
            config.host = host.trim().to_string();
        }

        if let Some((key, value)) = scoped("PORT").or_else(|| shared("PORT")) {
            config.port = parse_port(&key, &value)?;
        }

        if let Some((key, value)) = scoped("WORKERS") {
            config.workers = Some(parse_workers(&key, &value)?);
        }

        if let Some((key, value)) = scoped("API_DOCS") {
            config.api_docs = parse_flag(&key, &value)?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_workers(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(workers) if workers > 0 => Ok(workers),
        _ => Err(ConfigError::InvalidWorkers {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
