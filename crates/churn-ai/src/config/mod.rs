use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub genie: Option<GenieConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            genie: GenieConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Connection and polling settings for the Genie conversational space.
///
/// Only present when both `GENIE_BASE_URL` and `GENIE_SPACE_ID` are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenieConfig {
    pub base_url: String,
    pub space_id: String,
    pub token: Option<String>,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl GenieConfig {
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
    pub const DEFAULT_MAX_POLLS: u32 = 30;

    fn from_env() -> Result<Option<Self>, ConfigError> {
        let base_url = non_empty_var("GENIE_BASE_URL");
        let space_id = non_empty_var("GENIE_SPACE_ID");

        let (base_url, space_id) = match (base_url, space_id) {
            (Some(base_url), Some(space_id)) => (base_url, space_id),
            _ => return Ok(None),
        };

        let poll_interval_ms = match non_empty_var("GENIE_POLL_INTERVAL_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidPollSetting {
                    name: "GENIE_POLL_INTERVAL_MS",
                })?,
            None => Self::DEFAULT_POLL_INTERVAL_MS,
        };

        let max_polls = match non_empty_var("GENIE_MAX_POLLS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::InvalidPollSetting {
                        name: "GENIE_MAX_POLLS",
                    })
                }
            },
            None => Self::DEFAULT_MAX_POLLS,
        };

        Ok(Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            space_id,
            token: non_empty_var("GENIE_TOKEN"),
            poll_interval_ms,
            max_polls,
        }))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPollSetting { name: &'static str },
    GenieNotConfigured,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPollSetting { name } => {
                write!(f, "{name} must be a positive integer")
            }
            ConfigError::GenieNotConfigured => {
                write!(f, "GENIE_BASE_URL and GENIE_SPACE_ID must both be set")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidPollSetting { .. }
            | ConfigError::GenieNotConfigured => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
