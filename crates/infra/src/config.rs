use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

const DEFAULT_REMINDER_INTERVAL_MINUTES: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Interface for the application to listen on
    pub host: String,
    /// Port for the application to run on
    pub port: usize,
    /// How often the background job re-notifies users that have not
    /// acknowledged an active alert
    pub reminder_interval: Duration,
}

impl Config {
    pub fn new() -> Self {
        let environment = Environment::from_env();
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let reminder_interval = match std::env::var("REMINDER_INTERVAL_MINUTES") {
            Ok(value) => match value.parse::<u64>() {
                Ok(minutes) if minutes > 0 => Duration::from_secs(minutes * 60),
                _ => {
                    warn!(
                        "The given REMINDER_INTERVAL_MINUTES: {} is not valid, falling back to the default: {}.",
                        value, DEFAULT_REMINDER_INTERVAL_MINUTES
                    );
                    Duration::from_secs(DEFAULT_REMINDER_INTERVAL_MINUTES * 60)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_REMINDER_INTERVAL_MINUTES * 60),
        };

        Self {
            environment,
            host,
            port,
            reminder_interval,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
