//! Call-site logging macros
//!
//! Each severity macro formats its message with `format_args!`, captures the
//! caller's file, line, module and enclosing function, builds an
//! `EventRecord` and hands it to the process-wide logger. Prefix the
//! arguments with `logger: <expr>,` to log through an injected logger
//! instead of the registry.
//!
//! ```
//! # use evlog_core::{info, properties, EventLogger};
//! let name = "alice";
//! info!("login", "user {} signed in", name);
//! info!("login", properties = properties! { "user" => name }, "user signed in");
//!
//! let logger = EventLogger::new();
//! info!(logger: &logger, "login", "user {} signed in", name);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __evlog_log {
    ($severity:expr; logger: $logger:expr, $name:expr, properties = $props:expr, $fmt:literal $($arg:tt)*) => {
        $crate::__evlog_emit!($logger, $severity, $name, ::std::option::Option::Some($props), $fmt $($arg)*)
    };
    ($severity:expr; logger: $logger:expr, $name:expr, $fmt:literal $($arg:tt)*) => {
        $crate::__evlog_emit!($logger, $severity, $name, ::std::option::Option::None, $fmt $($arg)*)
    };
    ($severity:expr; $name:expr, properties = $props:expr, $fmt:literal $($arg:tt)*) => {
        $crate::__evlog_emit!($crate::registry::current(), $severity, $name, ::std::option::Option::Some($props), $fmt $($arg)*)
    };
    ($severity:expr; $name:expr, $fmt:literal $($arg:tt)*) => {
        $crate::__evlog_emit!($crate::registry::current(), $severity, $name, ::std::option::Option::None, $fmt $($arg)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __evlog_emit {
    ($logger:expr, $severity:expr, $name:expr, $props:expr, $fmt:literal $($arg:tt)*) => {{
        let record = $crate::EventRecord::new(
            $severity,
            $name,
            $crate::format::render_message(::std::format_args!($fmt $($arg)*), $fmt),
            $props,
            $crate::call_site!(),
        );
        let _ = $logger.log(&record);
    }};
}

/// Log a debug event
///
/// # Example
///
/// ```
/// # use evlog_core::debug;
/// debug!("cache", "evicted {} entries", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($($rest:tt)+) => {
        $crate::__evlog_log!($crate::Severity::Debug; $($rest)+)
    };
}

/// Log an info event
///
/// # Example
///
/// ```
/// # use evlog_core::info;
/// info!("login", "user {} signed in", "alice");
/// ```
#[macro_export]
macro_rules! info {
    ($($rest:tt)+) => {
        $crate::__evlog_log!($crate::Severity::Info; $($rest)+)
    };
}

/// Log a warning event
#[macro_export]
macro_rules! warn {
    ($($rest:tt)+) => {
        $crate::__evlog_log!($crate::Severity::Warning; $($rest)+)
    };
}

/// Log a UI event (user interaction worth recording)
///
/// # Example
///
/// ```
/// # use evlog_core::ui_event;
/// ui_event!("tap", "pressed {}", "save");
/// ```
#[macro_export]
macro_rules! ui_event {
    ($($rest:tt)+) => {
        $crate::__evlog_log!($crate::Severity::UiEvent; $($rest)+)
    };
}

/// Log an error event
#[macro_export]
macro_rules! error {
    ($($rest:tt)+) => {
        $crate::__evlog_log!($crate::Severity::Error; $($rest)+)
    };
}

/// Log a `std::error::Error` value at error severity
///
/// The value must be `'static`; pass the error itself rather than a
/// reference to a borrowed one.
///
/// # Example
///
/// ```
/// # use evlog_core::log_error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// log_error!(err);
/// ```
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $err:expr) => {{
        let _ = $logger.log_error(&$err, $crate::call_site!());
    }};
    ($err:expr) => {{
        let _ = $crate::registry::current().log_error(&$err, $crate::call_site!());
    }};
}
