//! Canonical schema constants for diagnostics and rendered events
//!
//! These constants keep the internal diagnostics emitted through `tracing`
//! and the console/tracing destinations consistent.

// Canonical field keys for diagnostics
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DESTINATION: &str = "destination";

// Event fields forwarded by the tracing destination
pub const FIELD_EVENT_NAME: &str = "event_name";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_FILE: &str = "file";
pub const FIELD_LINE: &str = "line";
pub const FIELD_FUNCTION: &str = "function";
pub const FIELD_PROPERTIES: &str = "properties";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical diagnostic event names
pub const EVENT_DESTINATION_FAILED: &str = "destination_failed";
pub const EVENT_DESTINATION_REGISTERED: &str = "destination_registered";
pub const EVENT_DESTINATION_DUPLICATE: &str = "destination_duplicate";
pub const EVENT_LOGGER_REPLACED: &str = "logger_replaced";

// Canonical operation names
pub const OP_DELIVER: &str = "deliver";
pub const OP_REGISTER: &str = "register";
pub const OP_SET_CURRENT: &str = "set_current";

/// Event name used when a record is built with an empty name
pub const UNNAMED_EVENT: &str = "unnamed_event";

/// Event name used for records produced from `std::error::Error` values
pub const ERROR_EVENT: &str = "error";

/// Property key carrying an error's source chain
pub const PROPERTY_ERROR_SOURCE: &str = "source";
