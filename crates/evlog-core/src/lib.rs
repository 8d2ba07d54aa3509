//! evlog Core - Event logging facade
//!
//! This crate routes named, severity-tagged events from call sites to any
//! number of pluggable destinations:
//! - `EventRecord`, the immutable event with captured call-site metadata
//! - The `Destination` capability with per-destination level masks and
//!   default properties
//! - `EventLogger`, which fans records out and isolates failing destinations
//! - A process-wide registry used by the `debug!`/`info!`/`warn!`/
//!   `ui_event!`/`error!` macros
//! - Console, tracing and in-memory mock destinations
//! - TOML configuration and internal diagnostics via `tracing`
//!
//! ```
//! use evlog_core::{info, registry, EventLogger, LevelMask, MockDestination};
//! use std::sync::Arc;
//!
//! let mock = Arc::new(MockDestination::new("mock", LevelMask::ALL));
//! let logger = Arc::new(EventLogger::new());
//! logger.register(mock.clone());
//! registry::set_current(logger);
//!
//! info!("login", "user {} signed in", "alice");
//! assert_eq!(mock.last_event().unwrap().message, "user alice signed in");
//! # registry::reset();
//! ```

pub mod config;
pub mod destination;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub mod logger;
mod macros;
pub mod record;
pub mod registry;
mod sync;

// Re-export commonly used types
pub use config::{DestinationConfig, LoggerConfig};
pub use destination::{
    ConsoleDestination, ConsoleFormat, Destination, DestinationBase, FailureMode,
    MockDestination, MockEvent, TracingDestination,
};
pub use errors::{DestinationError, ErrorKind, EvlogError, Result};
pub use evlog_core_types::{
    call_site, function_name, properties, CallSite, LevelMask, Properties, PropertyValue,
    Severity,
};
pub use logger::{DeliveryReport, ErrorHook, EventLogger};
pub use record::EventRecord;
pub use registry::LoggerRegistry;
