//! Configuration for the gateway's client address resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default trusted proxy header name.
pub const DEFAULT_REAL_IP_HEADER: &str = "X-Real-IP";

/// Gateway configuration, loaded once at startup and passed to the resolver
/// as an explicit parameter rather than held as global state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Header a trusted reverse proxy sets to the originating client
    /// address. Empty disables header lookup entirely and the raw peer
    /// address is used.
    pub real_ip_header: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            real_ip_header: DEFAULT_REAL_IP_HEADER.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Reject header names carrying control characters (header injection
    /// guard). An empty name is valid: it disables header lookup.
    pub fn validate(&self) -> Result<(), GatewayConfigError> {
        if let Some(c) = self.real_ip_header.chars().find(|c| c.is_ascii_control()) {
            return Err(GatewayConfigError::InvalidHeaderName(c));
        }
        Ok(())
    }
}

/// Errors raised by gateway configuration validation.
#[derive(Debug, Error)]
pub enum GatewayConfigError {
    /// Header name contains a character that cannot appear in a header name
    #[error("real_ip_header contains invalid character: {0:?}")]
    InvalidHeaderName(char),
}
