//! Churn Prediction API
//!
//! Configuration types for the churn prediction service.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

// Re-export SPI types
pub use churn_spi::{ChurnError, Result};

/// Default artifact location, relative to the process working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/churn_pipeline.json";

/// Origins the deployed frontend is served from.
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "https://churn-prediction-api-q7sr.onrender.com",
];

// ============================================================================
// Artifact Configuration
// ============================================================================

/// Where to load the serialized model pipeline from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the artifact file.
    pub path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
        }
    }
}

impl ArtifactConfig {
    /// Create a configuration pointing at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `CHURN_ARTIFACT` from the environment, falling back to the
    /// default path.
    pub fn from_env() -> Self {
        match env::var("CHURN_ARTIFACT") {
            Ok(path) => Self::new(path),
            Err(_) => Self::default(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Origins allowed by the CORS layer. Credentials are always allowed,
    /// so a wildcard is never valid here.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, and `CHURN_ALLOWED_ORIGINS` (comma-separated)
    /// from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .map(|p| p.parse().expect("PORT must be a valid number"))
            .unwrap_or(defaults.port);
        let allowed_origins = env::var("CHURN_ALLOWED_ORIGINS")
            .map(|list| {
                list.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            host,
            port,
            allowed_origins,
        }
    }

    /// The `host:port` string to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
