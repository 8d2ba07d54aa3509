//! Event logger: fan-out of records to registered destinations
//!
//! The destination list is copy-on-write. `log` takes a snapshot under a
//! read lock and releases the lock before delivering, so a concurrent
//! `register`/`unregister` is either fully visible to a call or not at all,
//! and destinations may call back into the logger without deadlocking.

use crate::config::LoggerConfig;
use crate::destination::Destination;
use crate::errors::{DestinationError, EvlogError, Result};
use crate::record::EventRecord;
use crate::sync;
use evlog_core_types::schema::{
    EVENT_DESTINATION_DUPLICATE, EVENT_DESTINATION_FAILED, EVENT_DESTINATION_REGISTERED, OP_DELIVER,
    OP_REGISTER,
};
use evlog_core_types::{CallSite, LevelMask, Properties, Severity};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

/// Callback receiving every delivery failure
pub type ErrorHook = Arc<dyn Fn(&EvlogError) + Send + Sync>;

type DestinationList = Arc<Vec<Arc<dyn Destination>>>;

/// Outcome of a single `log` call
///
/// Callers are free to ignore it: failures have already been reported
/// through diagnostics and the error hook.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    /// Destinations that accepted the record
    pub delivered: usize,
    /// Destinations whose level mask excluded the record
    pub filtered: usize,
    /// Destinations that returned an error or panicked
    pub failures: Vec<EvlogError>,
}

impl DeliveryReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Routes event records to zero or more destinations
///
/// Destinations are deduplicated by identifier: registering a destination
/// whose identifier is already present is a no-op, and the first
/// registration wins. Delivery follows registration order.
pub struct EventLogger {
    destinations: RwLock<DestinationList>,
    error_hook: RwLock<Option<ErrorHook>>,
}

impl EventLogger {
    /// Logger with no destinations; logging through it is a no-op
    pub fn new() -> Self {
        Self {
            destinations: RwLock::new(Arc::new(Vec::new())),
            error_hook: RwLock::new(None),
        }
    }

    pub fn with_destinations<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Destination>>,
    {
        let logger = Self::new();
        for destination in destinations {
            logger.register(destination);
        }
        logger
    }

    /// Build a logger from configuration
    ///
    /// # Errors
    ///
    /// Returns `EvlogError::Config` if the configuration is invalid.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.build()
    }

    // === Destination management ===

    /// Add a destination; returns `false` if its identifier is already registered
    pub fn register(&self, destination: Arc<dyn Destination>) -> bool {
        let mut guard = sync::write(&self.destinations);
        if guard
            .iter()
            .any(|d| d.identifier() == destination.identifier())
        {
            tracing::debug!(
                component = module_path!(),
                op = OP_REGISTER,
                event = EVENT_DESTINATION_DUPLICATE,
                destination = destination.identifier(),
                "Destination already registered"
            );
            return false;
        }

        let identifier = destination.identifier().to_string();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(destination);
        *guard = Arc::new(next);
        drop(guard);

        tracing::debug!(
            component = module_path!(),
            op = OP_REGISTER,
            event = EVENT_DESTINATION_REGISTERED,
            destination = identifier.as_str(),
            "Destination registered"
        );
        true
    }

    /// Remove the destination sharing `destination`'s identifier; no-op if absent
    pub fn unregister(&self, destination: &dyn Destination) -> bool {
        self.unregister_identifier(destination.identifier())
    }

    pub fn unregister_identifier(&self, identifier: &str) -> bool {
        let mut guard = sync::write(&self.destinations);
        if !guard.iter().any(|d| d.identifier() == identifier) {
            return false;
        }

        let next: Vec<_> = guard
            .iter()
            .filter(|d| d.identifier() != identifier)
            .cloned()
            .collect();
        *guard = Arc::new(next);
        true
    }

    /// Snapshot of the registered destinations in registration order
    pub fn destinations(&self) -> Vec<Arc<dyn Destination>> {
        self.snapshot().iter().cloned().collect()
    }

    pub fn destination(&self, identifier: &str) -> Option<Arc<dyn Destination>> {
        self.snapshot()
            .iter()
            .find(|d| d.identifier() == identifier)
            .cloned()
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|d| d.identifier().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn snapshot(&self) -> DestinationList {
        Arc::clone(&sync::read(&self.destinations))
    }

    // === Error hook ===

    /// Install a callback that receives every delivery failure
    pub fn set_error_hook<F>(&self, hook: F)
    where
        F: Fn(&EvlogError) + Send + Sync + 'static,
    {
        *sync::write(&self.error_hook) = Some(Arc::new(hook));
    }

    pub fn clear_error_hook(&self) {
        *sync::write(&self.error_hook) = None;
    }

    // === Logging ===

    /// Deliver `record` to every destination whose level admits it
    ///
    /// A destination without its own properties on the record receives its
    /// default properties instead. Failures are isolated per destination.
    pub fn log(&self, record: &EventRecord) -> DeliveryReport {
        self.dispatch(record.severity(), |destination| {
            if record.properties().is_none() {
                let defaults = destination.default_properties();
                if !defaults.is_empty() {
                    return destination.deliver(&record.with_default_properties(defaults));
                }
            }
            destination.deliver(record)
        })
    }

    /// Log an error value at error severity on every admitting destination
    pub fn log_error(
        &self,
        error: &(dyn std::error::Error + 'static),
        site: CallSite,
    ) -> DeliveryReport {
        self.dispatch(Severity::Error, |destination| {
            destination.log_error(error, site)
        })
    }

    pub fn debug(
        &self,
        event_name: &str,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> DeliveryReport {
        self.log(&EventRecord::new(
            Severity::Debug,
            event_name,
            message,
            properties,
            site,
        ))
    }

    pub fn info(
        &self,
        event_name: &str,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> DeliveryReport {
        self.log(&EventRecord::new(
            Severity::Info,
            event_name,
            message,
            properties,
            site,
        ))
    }

    pub fn warning(
        &self,
        event_name: &str,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> DeliveryReport {
        self.log(&EventRecord::new(
            Severity::Warning,
            event_name,
            message,
            properties,
            site,
        ))
    }

    pub fn ui_event(
        &self,
        event_name: &str,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> DeliveryReport {
        self.log(&EventRecord::new(
            Severity::UiEvent,
            event_name,
            message,
            properties,
            site,
        ))
    }

    pub fn error(
        &self,
        event_name: &str,
        message: impl Into<String>,
        properties: Option<Properties>,
        site: CallSite,
    ) -> DeliveryReport {
        self.log(&EventRecord::new(
            Severity::Error,
            event_name,
            message,
            properties,
            site,
        ))
    }

    // === Per-destination settings ===

    /// Update the level mask of the named destinations; unknown identifiers are ignored
    pub fn set_log_level(&self, level: LevelMask, identifiers: &[&str]) {
        for destination in self.snapshot().iter() {
            if identifiers.iter().any(|id| *id == destination.identifier()) {
                destination.set_level(level);
            }
        }
    }

    /// Merge default properties into the named destinations, or all of them when `None`
    pub fn add_default_properties(&self, properties: &Properties, identifiers: Option<&[&str]>) {
        for destination in self.targets(identifiers) {
            destination.add_default_properties(properties);
        }
    }

    /// Remove a default property from the named destinations, or all of them when `None`
    pub fn remove_default_property(&self, key: &str, identifiers: Option<&[&str]>) {
        for destination in self.targets(identifiers) {
            destination.remove_default_property(key);
        }
    }

    fn targets(&self, identifiers: Option<&[&str]>) -> Vec<Arc<dyn Destination>> {
        self.snapshot()
            .iter()
            .filter(|d| identifiers.map_or(true, |ids| ids.iter().any(|id| *id == d.identifier())))
            .cloned()
            .collect()
    }

    // === Delivery internals ===

    fn dispatch<F>(&self, severity: Severity, deliver: F) -> DeliveryReport
    where
        F: Fn(&dyn Destination) -> std::result::Result<(), DestinationError>,
    {
        let mut report = DeliveryReport::default();

        for destination in self.snapshot().iter() {
            if !destination.level().allows(severity) {
                report.filtered += 1;
                continue;
            }

            let outcome = catch_unwind(AssertUnwindSafe(|| deliver(destination.as_ref())));
            let failure = match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(source)) => EvlogError::Destination {
                    identifier: destination.identifier().to_string(),
                    source,
                },
                Err(payload) => EvlogError::DestinationPanicked {
                    identifier: destination.identifier().to_string(),
                    message: panic_message(payload.as_ref()),
                },
            };

            self.report_failure(&failure);
            report.failures.push(failure);
        }

        report
    }

    fn report_failure(&self, failure: &EvlogError) {
        tracing::warn!(
            component = module_path!(),
            op = OP_DELIVER,
            event = EVENT_DESTINATION_FAILED,
            destination = failure.destination().unwrap_or_default(),
            err.kind = ?failure.kind(),
            err.code = failure.code(),
            "{}",
            failure
        );

        let hook = sync::read(&self.error_hook).clone();
        if let Some(hook) = hook {
            // A panicking hook must not escape into the caller either.
            let _ = catch_unwind(AssertUnwindSafe(|| hook(failure)));
        }
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLogger")
            .field("destinations", &self.identifiers())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
