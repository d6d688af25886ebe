use std::env;

use super::env::parse_value;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind, falls back to PORT (default: 5000)
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = env::var("SERVICE_PORT").or_else(|_| env::var("PORT")).ok();
        let port = parse_value("SERVICE_PORT", raw_port, 5000)?;

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
