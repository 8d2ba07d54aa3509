//! Core types shared across evlog crates
//!
//! This crate provides the leaf value types used by the logger, its
//! destinations and the call-site macros:
//!
//! - **Severity**: the five event severities and per-destination `LevelMask`
//! - **Properties**: scalar key-value payload attached to events
//! - **Call sites**: `CallSite` plus the `call_site!` / `function_name!` macros
//! - **Schema constants**: canonical field keys and event names for diagnostics

pub mod property;
pub mod schema;
pub mod severity;
pub mod site;

pub use property::{describe_properties, Properties, PropertyValue};
pub use severity::{LevelMask, ParseLevelError, Severity};
pub use site::CallSite;
