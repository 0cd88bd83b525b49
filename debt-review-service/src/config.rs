//! Service configuration, read once from the environment at start-up.

use std::net::SocketAddr;

use debt_flow::Branding;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Whether the analysis pause really waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    Typing,
    Instant,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub pacing: PacingMode,
    pub branding: Branding,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "BIND_ADDR".to_string(),
                message: e.to_string(),
            })?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LOG_FORMAT".to_string(),
                    message: format!("expected 'json' or 'pretty', got '{other}'"),
                });
            }
        };

        let pacing = match lookup("PACING").as_deref() {
            None | Some("typing") => PacingMode::Typing,
            Some("instant") => PacingMode::Instant,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "PACING".to_string(),
                    message: format!("expected 'typing' or 'instant', got '{other}'"),
                });
            }
        };

        let defaults = Branding::default();
        let country_code = lookup("CONTACT_COUNTRY_CODE").unwrap_or(defaults.country_code);
        if country_code.is_empty() || !country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                key: "CONTACT_COUNTRY_CODE".to_string(),
                message: format!("expected digits only, got '{country_code}'"),
            });
        }
        let branding = Branding {
            assistant_name: lookup("ASSISTANT_NAME").unwrap_or(defaults.assistant_name),
            firm_name: lookup("FIRM_NAME").unwrap_or(defaults.firm_name),
            country_code,
        };

        Ok(Self {
            bind_addr,
            log_format,
            pacing,
            branding,
        })
    }
}
