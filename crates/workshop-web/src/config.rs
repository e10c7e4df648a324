//! Fixed server bind configuration.
//!
//! The listening address is deliberately hard-coded: the deployment target
//! (Azure Container Apps) expects the container to listen on `0.0.0.0:8000`,
//! and no environment variables or flags are consulted.

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: &'static str,
    pub port: u16,
}

impl Config {
    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0",
            port: 8000,
        }
    }
}
