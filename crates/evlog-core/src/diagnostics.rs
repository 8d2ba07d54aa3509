//! Internal diagnostics for evlog
//!
//! evlog reports its own problems (a destination failing, a duplicate
//! registration, the current logger being replaced) through `tracing`, and
//! the `TracingDestination` forwards application events there too. This
//! module installs the subscriber:
//!
//! - Single initialization point via `init(profile)`
//! - Test capture mode for asserting on diagnostics
//!
//! # Usage
//!
//! ```rust
//! use evlog_core::diagnostics::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
