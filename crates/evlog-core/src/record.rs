//! Immutable event records

use chrono::{DateTime, Utc};
use evlog_core_types::schema::{ERROR_EVENT, PROPERTY_ERROR_SOURCE, UNNAMED_EVENT};
use evlog_core_types::{CallSite, Properties, PropertyValue, Severity};
use serde::Serialize;

/// One logged event
///
/// Fully populated at construction and never mutated afterwards. Derived
/// copies (see `with_properties`) are new records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    severity: Severity,
    event_name: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Properties>,
    site: CallSite,
    timestamp: DateTime<Utc>,
    #[serde(skip)]
    defaulted: bool,
}

impl EventRecord {
    /// Build a record stamped with the current time
    ///
    /// An empty `event_name` is replaced by `unnamed_event`.
    pub fn new(
        severity: Severity,
        event_name: impl Into<String>,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> Self {
        let mut event_name = event_name.into();
        if event_name.trim().is_empty() {
            event_name = UNNAMED_EVENT.to_string();
        }
        Self {
            severity,
            event_name,
            message: message.into(),
            properties,
            site,
            timestamp: Utc::now(),
            defaulted: false,
        }
    }

    /// Error-severity record describing `error`
    ///
    /// The message is the error's `Display` text; when the error has a
    /// source chain it is attached as the `source` property.
    pub fn from_error(error: &(dyn std::error::Error + 'static), site: CallSite) -> Self {
        let mut chain = Vec::new();
        let mut next = error.source();
        while let Some(cause) = next {
            chain.push(cause.to_string());
            next = cause.source();
        }

        let properties = if chain.is_empty() {
            None
        } else {
            let mut props = Properties::new();
            props.insert(
                PROPERTY_ERROR_SOURCE.to_string(),
                PropertyValue::Str(chain.join(": ")),
            );
            Some(props)
        };

        Self::new(
            Severity::Error,
            ERROR_EVENT,
            error.to_string(),
            properties,
            site,
        )
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the properties were substituted from a destination's defaults
    pub fn properties_are_defaults(&self) -> bool {
        self.defaulted
    }

    /// Copy of this record carrying `properties`, keeping the original timestamp
    pub fn with_properties(&self, properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            defaulted: false,
            ..self.clone()
        }
    }

    /// Copy carrying a destination's default properties in place of absent ones
    ///
    /// Renderers that already show the defaults skip the substituted copy.
    pub fn with_default_properties(&self, defaults: Properties) -> Self {
        Self {
            properties: Some(defaults),
            defaulted: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evlog_core_types::{call_site, properties};
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("sync failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn test_new_populates_all_fields() {
        let site = call_site!();
        let record = EventRecord::new(
            Severity::Info,
            "login",
            "user alice signed in",
            Some(properties! { "user" => "alice" }),
            site,
        );

        assert_eq!(record.severity(), Severity::Info);
        assert_eq!(record.event_name(), "login");
        assert_eq!(record.message(), "user alice signed in");
        assert_eq!(
            record.properties().and_then(|p| p.get("user")),
            Some(&PropertyValue::from("alice"))
        );
        assert_eq!(record.site(), &site);
    }

    #[test]
    fn test_empty_event_name_is_replaced() {
        let record = EventRecord::new(Severity::Debug, "  ", "msg", None, CallSite::unknown());
        assert_eq!(record.event_name(), UNNAMED_EVENT);
    }

    #[test]
    fn test_from_error_collects_source_chain() {
        let err = Outer(Inner);
        let record = EventRecord::from_error(&err, CallSite::unknown());

        assert_eq!(record.severity(), Severity::Error);
        assert_eq!(record.event_name(), ERROR_EVENT);
        assert_eq!(record.message(), "sync failed");
        assert_eq!(
            record.properties().and_then(|p| p.get(PROPERTY_ERROR_SOURCE)),
            Some(&PropertyValue::from("connection reset"))
        );
    }

    #[test]
    fn test_from_error_without_source_has_no_properties() {
        let record = EventRecord::from_error(&Inner, CallSite::unknown());
        assert!(record.properties().is_none());
    }

    #[test]
    fn test_with_properties_keeps_original_intact() {
        let record = EventRecord::new(Severity::Warning, "w", "m", None, CallSite::unknown());
        let derived = record.with_properties(properties! { "k" => 1 });

        assert!(record.properties().is_none());
        assert_eq!(derived.properties().map(|p| p.len()), Some(1));
        assert_eq!(derived.timestamp(), record.timestamp());
        assert_eq!(derived.event_name(), record.event_name());
        assert!(!derived.properties_are_defaults());
    }

    #[test]
    fn test_with_default_properties_marks_substitution() {
        let record = EventRecord::new(Severity::Info, "e", "m", None, CallSite::unknown());
        let substituted = record.with_default_properties(properties! { "app" => "demo" });

        assert!(substituted.properties_are_defaults());
        assert!(!record.properties_are_defaults());
        assert_eq!(substituted.properties().map(|p| p.len()), Some(1));
        assert_eq!(substituted.timestamp(), record.timestamp());
    }
}
