//! Logging destinations
//!
//! A destination is a sink for `EventRecord`s. Concrete destinations embed a
//! `DestinationBase` (identifier, level mask, default properties) and
//! implement `deliver`; everything else is provided by the trait.
//!
//! - `ConsoleDestination` - one line per event to stdout or any writer
//! - `MockDestination` - in-memory capture for test assertions
//! - `TracingDestination` - forwards events into `tracing`

pub mod console;
pub mod mock;
pub mod trace;

pub use console::{ConsoleDestination, ConsoleFormat};
pub use mock::{FailureMode, MockDestination, MockEvent};
pub use trace::TracingDestination;

use crate::errors::DestinationError;
use crate::record::EventRecord;
use crate::sync;
use evlog_core_types::{describe_properties, CallSite, LevelMask, Properties, Severity};
use std::sync::RwLock;

/// Capability interface implemented by every logging sink
///
/// `deliver` performs the destination-specific side effect synchronously.
/// Failures are returned, not raised: the logger isolates them so that one
/// broken destination never affects another.
pub trait Destination: Send + Sync {
    /// Shared identifier/level/default-properties state
    fn base(&self) -> &DestinationBase;

    /// Deliver one record
    ///
    /// # Errors
    ///
    /// Returns a `DestinationError` when the sink could not accept the record.
    fn deliver(&self, record: &EventRecord) -> Result<(), DestinationError>;

    /// Unique identifier, e.g. `com.example.console`
    ///
    /// A logger holds at most one destination per identifier.
    fn identifier(&self) -> &str {
        self.base().identifier()
    }

    fn level(&self) -> LevelMask {
        self.base().level()
    }

    fn set_level(&self, level: LevelMask) {
        self.base().set_level(level);
    }

    /// Properties substituted for events that carry none
    fn default_properties(&self) -> Properties {
        self.base().default_properties()
    }

    fn add_default_properties(&self, properties: &Properties) {
        self.base().add_default_properties(properties);
    }

    fn remove_default_property(&self, key: &str) {
        self.base().remove_default_property(key);
    }

    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn debug(
        &self,
        event_name: &str,
        message: &str,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::new(
            Severity::Debug,
            event_name,
            message,
            properties,
            site,
        ))
    }

    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn info(
        &self,
        event_name: &str,
        message: &str,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::new(
            Severity::Info,
            event_name,
            message,
            properties,
            site,
        ))
    }

    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn warning(
        &self,
        event_name: &str,
        message: &str,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::new(
            Severity::Warning,
            event_name,
            message,
            properties,
            site,
        ))
    }

    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn ui_event(
        &self,
        event_name: &str,
        message: &str,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::new(
            Severity::UiEvent,
            event_name,
            message,
            properties,
            site,
        ))
    }

    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn error(
        &self,
        event_name: &str,
        message: &str,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::new(
            Severity::Error,
            event_name,
            message,
            properties,
            site,
        ))
    }

    /// Log an error value at error severity
    ///
    /// The default builds the record with `EventRecord::from_error`.
    ///
    /// # Errors
    ///
    /// Propagates the `deliver` failure.
    fn log_error(
        &self,
        error: &(dyn std::error::Error + 'static),
        site: CallSite,
    ) -> Result<(), DestinationError> {
        self.deliver(&EventRecord::from_error(error, site))
    }
}

#[derive(Debug)]
struct BaseState {
    level: LevelMask,
    default_properties: Properties,
}

/// State shared by every destination
///
/// Level and default properties are read and written atomically through a
/// read-write lock, so they can be changed while other threads log.
#[derive(Debug)]
pub struct DestinationBase {
    identifier: String,
    state: RwLock<BaseState>,
}

impl DestinationBase {
    pub fn new(identifier: impl Into<String>, level: LevelMask) -> Self {
        Self {
            identifier: identifier.into(),
            state: RwLock::new(BaseState {
                level,
                default_properties: Properties::new(),
            }),
        }
    }

    pub fn with_default_properties(self, properties: Properties) -> Self {
        sync::write(&self.state).default_properties = properties;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn level(&self) -> LevelMask {
        sync::read(&self.state).level
    }

    pub fn set_level(&self, level: LevelMask) {
        sync::write(&self.state).level = level;
    }

    pub fn default_properties(&self) -> Properties {
        sync::read(&self.state).default_properties.clone()
    }

    /// Replace all default properties
    pub fn set_default_properties(&self, properties: Properties) {
        sync::write(&self.state).default_properties = properties;
    }

    /// Merge `properties` into the defaults; later values win
    pub fn add_default_properties(&self, properties: &Properties) {
        let mut state = sync::write(&self.state);
        for (key, value) in properties {
            state.default_properties.insert(key.clone(), value.clone());
        }
    }

    pub fn remove_default_property(&self, key: &str) {
        sync::write(&self.state).default_properties.remove(key);
    }

    /// Canonical single-line rendering of `record`
    ///
    /// ```text
    /// {✅ "login": {"message": "user alice signed in", "defaultProperties": "app: demo", "location": "auth.rs:42", "function": "sign_in"}}
    /// ```
    ///
    /// Event properties, when present, are rendered after the message.
    /// Properties substituted from the defaults appear only as
    /// `defaultProperties`.
    pub fn render_line(&self, record: &EventRecord) -> String {
        let defaults = describe_properties(&sync::read(&self.state).default_properties);
        let site = record.site();

        let mut body = format!("\"message\": \"{}\"", record.message());
        let own = record
            .properties()
            .filter(|p| !p.is_empty() && !record.properties_are_defaults());
        if let Some(properties) = own {
            body.push_str(&format!(
                ", \"properties\": \"{}\"",
                describe_properties(properties)
            ));
        }

        format!(
            "{{{} \"{}\": {{{}, \"defaultProperties\": \"{}\", \"location\": \"{}:{}\", \"function\": \"{}\"}}}}",
            record.severity().icon(),
            record.event_name(),
            body,
            defaults,
            site.file_name(),
            site.line,
            site.short_function(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evlog_core_types::properties;

    fn site() -> CallSite {
        CallSite::new("src/auth/session.rs", 42, "app::auth::sign_in", "app::auth")
    }

    #[test]
    fn test_render_line_golden() {
        let base = DestinationBase::new("test", LevelMask::ALL)
            .with_default_properties(properties! { "B" => "value 2", "A" => "value 1" });
        let record = EventRecord::new(Severity::Info, "login", "user alice signed in", None, site());

        assert_eq!(
            base.render_line(&record),
            "{✅ \"login\": {\"message\": \"user alice signed in\", \"defaultProperties\": \"A: value 1; B: value 2\", \"location\": \"session.rs:42\", \"function\": \"sign_in\"}}"
        );
    }

    #[test]
    fn test_render_line_includes_event_properties() {
        let base = DestinationBase::new("test", LevelMask::ALL);
        let record = EventRecord::new(
            Severity::Error,
            "sync",
            "failed",
            Some(properties! { "attempt" => 3 }),
            site(),
        );

        let line = base.render_line(&record);
        assert!(line.starts_with("{🛑 \"sync\""));
        assert!(line.contains("\"properties\": \"attempt: 3\""));
        assert!(line.contains("\"defaultProperties\": \"\""));
    }

    #[test]
    fn test_default_properties_merge_and_remove() {
        let base = DestinationBase::new("test", LevelMask::ALL)
            .with_default_properties(properties! { "A" => "value 1", "B" => "value 2" });

        base.add_default_properties(&properties! { "B" => "value 3", "C" => "value 4" });
        assert_eq!(
            describe_properties(&base.default_properties()),
            "A: value 1; B: value 3; C: value 4"
        );

        base.remove_default_property("B");
        assert_eq!(
            describe_properties(&base.default_properties()),
            "A: value 1; C: value 4"
        );

        base.set_default_properties(properties! { "D" => "value 5" });
        assert_eq!(describe_properties(&base.default_properties()), "D: value 5");
    }

    #[test]
    fn test_level_is_mutable_through_shared_reference() {
        let base = DestinationBase::new("test", LevelMask::INFO);
        assert_eq!(base.level(), LevelMask::INFO);
        base.set_level(LevelMask::ERROR);
        assert_eq!(base.level(), LevelMask::ERROR);
    }
}
