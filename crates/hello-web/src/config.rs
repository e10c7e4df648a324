//! Fixed server bind configuration.
//!
//! Hard-coded on purpose: the App Service demo listens on `0.0.0.0:8000`
//! and consults no environment variables or flags.

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
