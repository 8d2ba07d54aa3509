//! Process-wide default logger
//!
//! The call-site macros log through `current()`. The slot is created lazily
//! on first access with an empty logger, so logging before any configuration
//! is a silent no-op. Application code replaces it with `set_current`.
//!
//! `LoggerRegistry` is also usable on its own for code that prefers to inject
//! a registry rather than rely on the global one.

use crate::logger::EventLogger;
use crate::sync;
use evlog_core_types::schema::{EVENT_LOGGER_REPLACED, OP_SET_CURRENT};
use std::sync::{Arc, OnceLock, RwLock};

/// Holder of exactly one current logger
#[derive(Debug)]
pub struct LoggerRegistry {
    slot: RwLock<Arc<EventLogger>>,
}

impl LoggerRegistry {
    /// Registry whose current logger has no destinations
    pub fn new() -> Self {
        Self::with_logger(Arc::new(EventLogger::new()))
    }

    pub fn with_logger(logger: Arc<EventLogger>) -> Self {
        Self {
            slot: RwLock::new(logger),
        }
    }

    pub fn current(&self) -> Arc<EventLogger> {
        Arc::clone(&sync::read(&self.slot))
    }

    /// Replace the current logger, returning the previous one
    pub fn set_current(&self, logger: Arc<EventLogger>) -> Arc<EventLogger> {
        let previous = std::mem::replace(&mut *sync::write(&self.slot), logger);
        tracing::debug!(
            component = module_path!(),
            op = OP_SET_CURRENT,
            event = EVENT_LOGGER_REPLACED,
            previous_destinations = previous.len(),
            "Current logger replaced"
        );
        previous
    }

    /// Restore an empty logger, returning the previous one
    pub fn reset(&self) -> Arc<EventLogger> {
        self.set_current(Arc::new(EventLogger::new()))
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::new)
}

/// Current process-wide logger
pub fn current() -> Arc<EventLogger> {
    global().current()
}

/// Replace the process-wide logger, returning the previous one
pub fn set_current(logger: Arc<EventLogger>) -> Arc<EventLogger> {
    global().set_current(logger)
}

/// Restore an empty process-wide logger, returning the previous one
pub fn reset() -> Arc<EventLogger> {
    global().reset()
}
