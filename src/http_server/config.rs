//! HTTP Server Configuration
//!
//! Host, port, CORS, and which collections to serve.

use serde::{Deserialize, Serialize};

use crate::records::BUILTIN_COLLECTIONS;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Pre-populate `items` with a small demo inventory
    #[serde(default)]
    pub seed_demo_data: bool,

    /// Collections to mount (default: every built-in collection)
    #[serde(default = "default_collections")]
    pub collections: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_collections() -> Vec<String> {
    BUILTIN_COLLECTIONS.iter().map(|c| c.to_string()).collect()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            seed_demo_data: false,
            collections: default_collections(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Enabled collection names that are not built in
    pub fn unknown_collections(&self) -> Vec<&str> {
        self.collections
            .iter()
            .map(String::as_str)
            .filter(|name| !BUILTIN_COLLECTIONS.contains(name))
            .collect()
    }
}
