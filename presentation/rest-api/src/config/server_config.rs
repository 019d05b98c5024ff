use std::env;

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "3000")
    pub fn from_env() -> Self {
        Self::from_parts(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_parts(ip: Option<String>, port: Option<String>) -> Self {
        Self {
            ip: ip.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: port.unwrap_or_else(|| "3000".to_string()),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
