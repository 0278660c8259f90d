//! Configuration loading for the wage calculator service.
//!
//! The calculation rules themselves are fixed; this module only configures
//! where the HTTP server listens and how verbosely it logs.
//!
//! # Example
//!
//! ```no_run
//! use wage_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/server.yaml").unwrap();
//! println!("Binding to {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServerConfig;
