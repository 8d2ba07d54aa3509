//! Tracing destination
//!
//! Forwards events into the `tracing` ecosystem so that they reach whatever
//! subscriber the application installed. Severities map onto tracing levels:
//! debug → DEBUG, info and UI events → INFO, warning → WARN, error → ERROR.

use super::{Destination, DestinationBase};
use crate::errors::DestinationError;
use crate::record::EventRecord;
use evlog_core_types::{describe_properties, LevelMask, Properties, Severity};
use tracing::Level;

/// Target used for forwarded events
pub const TRACING_TARGET: &str = "evlog";

#[derive(Debug)]
pub struct TracingDestination {
    base: DestinationBase,
}

impl TracingDestination {
    pub fn new(identifier: impl Into<String>, level: LevelMask) -> Self {
        Self {
            base: DestinationBase::new(identifier, level),
        }
    }

    pub fn with_default_properties(mut self, properties: Properties) -> Self {
        self.base = self.base.with_default_properties(properties);
        self
    }

    /// Tracing level used for `severity`
    pub fn tracing_level(severity: Severity) -> Level {
        match severity {
            Severity::Debug => Level::DEBUG,
            Severity::Info | Severity::UiEvent => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error => Level::ERROR,
        }
    }
}

macro_rules! forward {
    ($level:ident, $record:expr, $properties:expr) => {
        tracing::$level!(
            target: TRACING_TARGET,
            event_name = $record.event_name(),
            severity = $record.severity().as_str(),
            file = $record.site().file,
            line = $record.site().line,
            function = $record.site().function,
            properties = %$properties,
            "{}",
            $record.message()
        )
    };
}

impl Destination for TracingDestination {
    fn base(&self) -> &DestinationBase {
        &self.base
    }

    fn deliver(&self, record: &EventRecord) -> Result<(), DestinationError> {
        let properties = record
            .properties()
            .map(describe_properties)
            .unwrap_or_default();

        match record.severity() {
            Severity::Debug => forward!(debug, record, properties),
            Severity::Info | Severity::UiEvent => forward!(info, record, properties),
            Severity::Warning => forward!(warn, record, properties),
            Severity::Error => forward!(error, record, properties),
        }
        Ok(())
    }
}
