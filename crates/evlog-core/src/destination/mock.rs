//! In-memory destination for test assertions
//!
//! Every delivered event is kept twice: as a structured `MockEvent` and as
//! the canonical rendered line. Failure injection lets tests verify that the
//! logger isolates broken destinations.

use super::{Destination, DestinationBase};
use crate::errors::DestinationError;
use crate::record::EventRecord;
use crate::sync;
use evlog_core_types::{CallSite, LevelMask, Properties, Severity};
use std::sync::Mutex;

/// A captured event
#[derive(Debug, Clone, PartialEq)]
pub struct MockEvent {
    pub severity: Severity,
    pub event_name: String,
    pub message: String,
    pub properties: Option<Properties>,
    pub site: CallSite,
}

/// How a mock destination behaves on delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    #[default]
    None,
    /// Return `DestinationError::Rejected`
    Error,
    /// Panic inside `deliver`
    Panic,
}

#[derive(Debug, Default)]
struct Captured {
    events: Vec<MockEvent>,
    messages: Vec<String>,
}

#[derive(Debug)]
pub struct MockDestination {
    base: DestinationBase,
    captured: Mutex<Captured>,
    failure: Mutex<FailureMode>,
}

impl MockDestination {
    pub fn new(identifier: impl Into<String>, level: LevelMask) -> Self {
        Self {
            base: DestinationBase::new(identifier, level),
            captured: Mutex::new(Captured::default()),
            failure: Mutex::new(FailureMode::None),
        }
    }

    /// Mock that rejects every event
    pub fn failing(identifier: impl Into<String>) -> Self {
        let mock = Self::new(identifier, LevelMask::ALL);
        mock.set_failure(FailureMode::Error);
        mock
    }

    /// Mock that panics on every event
    pub fn panicking(identifier: impl Into<String>) -> Self {
        let mock = Self::new(identifier, LevelMask::ALL);
        mock.set_failure(FailureMode::Panic);
        mock
    }

    pub fn with_default_properties(mut self, properties: Properties) -> Self {
        self.base = self.base.with_default_properties(properties);
        self
    }

    pub fn set_failure(&self, mode: FailureMode) {
        *sync::lock(&self.failure) = mode;
    }

    /// Captured events in delivery order
    pub fn events(&self) -> Vec<MockEvent> {
        sync::lock(&self.captured).events.clone()
    }

    /// Rendered lines in delivery order
    pub fn messages(&self) -> Vec<String> {
        sync::lock(&self.captured).messages.clone()
    }

    pub fn last_event(&self) -> Option<MockEvent> {
        sync::lock(&self.captured).events.last().cloned()
    }

    pub fn len(&self) -> usize {
        sync::lock(&self.captured).events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count captured events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&MockEvent) -> bool,
    {
        sync::lock(&self.captured)
            .events
            .iter()
            .filter(|e| predicate(e))
            .count()
    }

    pub fn clear(&self) {
        let mut captured = sync::lock(&self.captured);
        captured.events.clear();
        captured.messages.clear();
    }
}

impl Destination for MockDestination {
    fn base(&self) -> &DestinationBase {
        &self.base
    }

    fn deliver(&self, record: &EventRecord) -> Result<(), DestinationError> {
        let mode = *sync::lock(&self.failure);
        match mode {
            FailureMode::None => {}
            FailureMode::Error => {
                return Err(DestinationError::rejected(format!(
                    "mock destination '{}' is failing",
                    self.base.identifier()
                )))
            }
            FailureMode::Panic => panic!(
                "mock destination '{}' panicked on '{}'",
                self.base.identifier(),
                record.event_name()
            ),
        }

        let event = MockEvent {
            severity: record.severity(),
            event_name: record.event_name().to_string(),
            message: record.message().to_string(),
            properties: record.properties().cloned(),
            site: *record.site(),
        };
        let line = self.base.render_line(record);

        let mut captured = sync::lock(&self.captured);
        captured.events.push(event);
        captured.messages.push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evlog_core_types::call_site;

    #[test]
    fn test_records_event_and_line() {
        let mock = MockDestination::new("mock", LevelMask::ALL);
        let record = EventRecord::new(Severity::Info, "hello", "world", None, call_site!());

        mock.deliver(&record).unwrap();

        assert_eq!(mock.len(), 1);
        let event = mock.last_event().unwrap();
        assert_eq!(event.event_name, "hello");
        assert_eq!(event.message, "world");
        assert_eq!(event.severity, Severity::Info);
        assert_eq!(mock.messages()[0], mock.base().render_line(&record));
    }

    #[test]
    fn test_per_severity_capability_methods() {
        let mock = MockDestination::new("mock", LevelMask::ALL);
        let site = call_site!();

        mock.debug("e", "m", None, site).unwrap();
        mock.info("e", "m", None, site).unwrap();
        mock.warning("e", "m", None, site).unwrap();
        mock.ui_event("e", "m", None, site).unwrap();
        mock.error("e", "m", None, site).unwrap();

        let severities: Vec<_> = mock.events().iter().map(|e| e.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn test_failing_mock_records_nothing() {
        let mock = MockDestination::failing("broken");
        let record = EventRecord::new(Severity::Error, "x", "y", None, call_site!());

        let err = mock.deliver(&record).unwrap_err();
        assert!(matches!(err, DestinationError::Rejected { .. }));
        assert!(mock.is_empty());

        mock.set_failure(FailureMode::None);
        mock.deliver(&record).unwrap();
        assert_eq!(mock.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mock = MockDestination::new("mock", LevelMask::ALL);
        mock.info("e", "m", None, call_site!()).unwrap();
        mock.clear();
        assert!(mock.is_empty());
        assert!(mock.messages().is_empty());
    }
}
