//! Verifier configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the tenantadm base address.
pub const ENV_TENANTADM_ADDR: &str = "DEVICEAUTH_TENANTADM_ADDR";

/// Environment variable holding the per-call timeout.
pub const ENV_TENANTADM_TIMEOUT: &str = "DEVICEAUTH_TENANTADM_TIMEOUT";

/// Timeout used when none (or zero) is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`TokenVerifier`](crate::TokenVerifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Tenant administrator service address.
    pub tenantadm_addr: String,

    /// Request timeout; zero means [`DEFAULT_TIMEOUT`].
    #[serde(default)]
    pub timeout: Duration,
}

impl VerifierConfig {
    pub fn new(tenantadm_addr: impl Into<String>) -> Self {
        Self {
            tenantadm_addr: tenantadm_addr.into(),
            timeout: Duration::ZERO,
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `DEVICEAUTH_TENANTADM_ADDR` | tenantadm base address (required) |
    /// | `DEVICEAUTH_TENANTADM_TIMEOUT` | `2s`, `500ms`, or whole seconds (default: 10s) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let tenantadm_addr = std::env::var(ENV_TENANTADM_ADDR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingAddr {
                var: ENV_TENANTADM_ADDR,
            })?;

        let timeout = match std::env::var(ENV_TENANTADM_TIMEOUT) {
            Ok(v) if !v.trim().is_empty() => parse_timeout(&v)?,
            _ => Duration::ZERO,
        };

        Ok(Self {
            tenantadm_addr,
            timeout,
        })
    }

    /// Set the tenantadm address.
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.tenantadm_addr = addr.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout a verifier built from this config will apply.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }
}

/// Parse a timeout given as a humantime duration (`2s`, `1m 30s`) or as
/// whole seconds (`15`).
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(value).map_err(|e| ConfigError::InvalidTimeout {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
