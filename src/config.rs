//! Gateway configuration from environment variables.

use std::net::SocketAddr;

use crate::UltraviabError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the server binds to
    pub addr: SocketAddr,
}

impl GatewayConfig {
    /// Build configuration from `ULTRAVIAB_HOST` / `ULTRAVIAB_PORT`,
    /// falling back to `0.0.0.0:8000`.
    ///
    /// # Errors
    /// Returns `UltraviabError::Config` when a variable is set but does not
    /// parse.
    pub fn from_env() -> crate::Result<Self> {
        let host =
            std::env::var("ULTRAVIAB_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("ULTRAVIAB_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                UltraviabError::Config(format!("ULTRAVIAB_PORT is not a valid port: {raw}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let addr = format!("{host}:{port}").parse::<SocketAddr>().map_err(|_| {
            UltraviabError::Config(format!("ULTRAVIAB_HOST is not a valid host: {host}"))
        })?;

        Ok(Self { addr })
    }
}
