//! Logger configuration
//!
//! Destinations can be declared in TOML instead of code:
//!
//! ```toml
//! [[destinations]]
//! kind = "console"
//! identifier = "app.console"
//! level = "info"
//! format = "text"
//!
//! [destinations.default_properties]
//! app = "demo"
//!
//! [[destinations]]
//! kind = "tracing"
//! identifier = "app.tracing"
//! level = "warning"
//! ```

use crate::destination::{ConsoleDestination, ConsoleFormat, Destination, TracingDestination};
use crate::errors::{EvlogError, Result};
use crate::logger::EventLogger;
use evlog_core_types::{LevelMask, Properties};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Top-level logger configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
}

/// One configured destination
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DestinationConfig {
    Console {
        identifier: String,
        #[serde(default)]
        level: LevelMask,
        #[serde(default)]
        format: ConsoleFormat,
        #[serde(default)]
        default_properties: Properties,
    },
    Tracing {
        identifier: String,
        #[serde(default)]
        level: LevelMask,
        #[serde(default)]
        default_properties: Properties,
    },
}

impl DestinationConfig {
    pub fn identifier(&self) -> &str {
        match self {
            DestinationConfig::Console { identifier, .. }
            | DestinationConfig::Tracing { identifier, .. } => identifier,
        }
    }

    fn build(&self) -> Arc<dyn Destination> {
        match self {
            DestinationConfig::Console {
                identifier,
                level,
                format,
                default_properties,
            } => Arc::new(
                ConsoleDestination::new(identifier.clone(), *level)
                    .with_format(*format)
                    .with_default_properties(default_properties.clone()),
            ),
            DestinationConfig::Tracing {
                identifier,
                level,
                default_properties,
            } => Arc::new(
                TracingDestination::new(identifier.clone(), *level)
                    .with_default_properties(default_properties.clone()),
            ),
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `EvlogError::ConfigParse` for malformed TOML and
    /// `EvlogError::Config` for semantic problems.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LoggerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    ///
    /// Returns `EvlogError::ConfigRead` if the file cannot be read, otherwise
    /// the same errors as `from_toml_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EvlogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check identifiers are non-empty and unique
    ///
    /// # Errors
    ///
    /// Returns `EvlogError::Config` naming the offending identifier.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for destination in &self.destinations {
            let identifier = destination.identifier();
            if identifier.trim().is_empty() {
                return Err(EvlogError::config("destination identifier cannot be empty"));
            }
            if !seen.insert(identifier) {
                return Err(EvlogError::config(format!(
                    "duplicate destination identifier '{}'",
                    identifier
                )));
            }
        }
        Ok(())
    }

    /// Build a logger with one destination per entry, in declaration order
    ///
    /// # Errors
    ///
    /// Returns `EvlogError::Config` if validation fails.
    pub fn build(&self) -> Result<EventLogger> {
        self.validate()?;
        Ok(EventLogger::with_destinations(
            self.destinations.iter().map(DestinationConfig::build),
        ))
    }
}
