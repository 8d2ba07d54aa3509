//! Destination Settings Tests
//!
//! This test suite verifies registration, level masks and default properties
//! managed through the logger.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use evlog_core::{
    call_site, properties, Destination, EventLogger, EventRecord, LevelMask, MockDestination,
    PropertyValue, Severity,
};
use std::sync::Arc;

fn two_mocks() -> (EventLogger, Arc<MockDestination>, Arc<MockDestination>) {
    let a = Arc::new(MockDestination::new("settings.a", LevelMask::ALL));
    let b = Arc::new(MockDestination::new("settings.b", LevelMask::ALL));
    let logger = EventLogger::new();
    logger.register(a.clone());
    logger.register(b.clone());
    (logger, a, b)
}

#[test]
fn test_duplicate_identifier_keeps_first() {
    let (logger, a, _b) = two_mocks();
    let impostor = Arc::new(MockDestination::new("settings.a", LevelMask::ERROR));

    assert!(!logger.register(impostor.clone()));
    assert_eq!(logger.len(), 2);

    logger.info("dup", "once", None, call_site!());
    assert_eq!(a.len(), 1);
    assert!(impostor.is_empty());
}

#[test]
fn test_unregister_stops_delivery() {
    let (logger, a, b) = two_mocks();

    assert!(logger.unregister(a.as_ref()));
    assert!(!logger.unregister(a.as_ref()));
    assert!(!logger.unregister_identifier("settings.missing"));

    logger.info("after", "only b", None, call_site!());
    assert!(a.is_empty());
    assert_eq!(b.len(), 1);
    assert_eq!(logger.identifiers(), vec!["settings.b"]);
}

#[test]
fn test_reregister_after_unregister_appends() {
    let (logger, a, _b) = two_mocks();
    logger.unregister(a.as_ref());
    assert!(logger.register(a.clone()));
    assert_eq!(logger.identifiers(), vec!["settings.b", "settings.a"]);
}

#[test]
fn test_set_log_level_targets_named_destinations() {
    let (logger, a, b) = two_mocks();
    logger.set_log_level(LevelMask::ERROR, &["settings.a", "settings.unknown"]);

    assert_eq!(a.level(), LevelMask::ERROR);
    assert_eq!(b.level(), LevelMask::ALL);

    let report = logger.warning("w", "warn", None, call_site!());
    assert_eq!(report.delivered, 1);
    assert_eq!(report.filtered, 1);
    assert!(a.is_empty());
}

#[test]
fn test_off_mask_silences_destination() {
    let (logger, a, _b) = two_mocks();
    logger.set_log_level(LevelMask::OFF, &["settings.a"]);

    logger.error("e", "dropped by a", None, call_site!());
    assert!(a.is_empty());
}

#[test]
fn test_default_properties_substitute_missing_properties() {
    let (logger, a, b) = two_mocks();
    logger.add_default_properties(&properties! { "app" => "demo" }, Some(&["settings.a"]));

    logger.info("no_props", "uses defaults", None, call_site!());
    logger.info(
        "own_props",
        "keeps its own",
        Some(properties! { "user" => "alice" }),
        call_site!(),
    );

    let a_events = a.events();
    assert_eq!(
        a_events[0].properties.as_ref().unwrap().get("app"),
        Some(&PropertyValue::from("demo"))
    );
    assert!(a_events[1].properties.as_ref().unwrap().get("app").is_none());
    assert_eq!(b.events()[0].properties, None);
    assert!(a.messages()[0].contains("\"defaultProperties\": \"app: demo\""));
}

#[test]
fn test_add_default_properties_without_filter_reaches_all() {
    let (logger, a, b) = two_mocks();
    logger.add_default_properties(&properties! { "env" => "test", "build" => 7 }, None);
    logger.remove_default_property("build", Some(&["settings.b"]));

    assert_eq!(a.default_properties().len(), 2);
    assert_eq!(b.default_properties().len(), 1);

    logger.remove_default_property("env", None);
    assert_eq!(a.default_properties().get("build"), Some(&PropertyValue::Int(7)));
    assert!(b.default_properties().is_empty());
}

#[test]
fn test_direct_destination_calls_skip_level_filter() {
    let mock = MockDestination::new("settings.direct", LevelMask::ERROR);

    mock.info("direct", "bypasses the logger", None, call_site!()).unwrap();

    let event = mock.last_event().unwrap();
    assert_eq!(event.severity, Severity::Info);
    assert_eq!(event.event_name, "direct");
}

#[test]
fn test_record_timestamp_survives_default_substitution() {
    let mock = Arc::new(
        MockDestination::new("settings.stamp", LevelMask::ALL)
            .with_default_properties(properties! { "k" => "v" }),
    );
    let logger = EventLogger::new();
    logger.register(mock.clone());

    let record = EventRecord::new(Severity::Debug, "stamp", "m", None, call_site!());
    logger.log(&record);

    let copy = record.with_properties(mock.default_properties());
    assert_eq!(copy.timestamp(), record.timestamp());
    assert_eq!(mock.last_event().unwrap().properties, copy.properties().cloned());
}

#[test]
fn test_substituted_defaults_render_once() {
    let mock = Arc::new(
        MockDestination::new("settings.render", LevelMask::ALL)
            .with_default_properties(properties! { "app" => "demo" }),
    );
    let logger = EventLogger::new();
    logger.register(mock.clone());
    let site = evlog_core::CallSite::new("src/auth/session.rs", 42, "app::auth::sign_in", "app::auth");

    logger.info("e", "m", None, site);

    assert_eq!(
        mock.messages(),
        vec![
            "{✅ \"e\": {\"message\": \"m\", \"defaultProperties\": \"app: demo\", \"location\": \"session.rs:42\", \"function\": \"sign_in\"}}"
                .to_string()
        ]
    );
    assert_eq!(
        mock.last_event().unwrap().properties,
        Some(properties! { "app" => "demo" })
    );
}
