//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// host: 0.0.0.0
/// port: 3000
/// log_filter: wage_calculator=debug,info
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Listening on {}", loader.server().bind_address());
/// # Ok::<(), wage_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    server: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let server = Self::load_yaml::<ServerConfig>(path.as_ref())?;
        Ok(Self { server })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty file deserializes as YAML null; treat it as an empty mapping.
        let content = if content.trim().is_empty() {
            "{}"
        } else {
            content.as_str()
        };

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}
