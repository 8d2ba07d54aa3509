//! Event severities and per-destination level masks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use thiserror::Error;

/// Severity of a single logged event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    UiEvent,
    Error,
}

impl Severity {
    /// Every severity, least to most severe
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::UiEvent,
        Severity::Error,
    ];

    /// Bit identifying this severity inside a `LevelMask`
    pub const fn bit(self) -> u8 {
        match self {
            Severity::Debug => 1 << 0,
            Severity::Info => 1 << 1,
            Severity::Warning => 1 << 2,
            Severity::UiEvent => 1 << 3,
            Severity::Error => 1 << 4,
        }
    }

    /// Stable upper-case label used in rendered output
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::UiEvent => "UI_EVENT",
            Severity::Error => "ERROR",
        }
    }

    /// Marker prepended to rendered lines
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Debug | Severity::Info | Severity::UiEvent => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "🛑",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of severities a destination accepts
///
/// The named masks are cumulative: `WARNING` admits warnings, UI events and
/// errors; `DEBUG` admits everything. Masks can be combined with `|` to
/// build non-cumulative sets such as
/// `LevelMask::only(Severity::Info) | LevelMask::ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct LevelMask(u8);

impl LevelMask {
    pub const OFF: LevelMask = LevelMask(0);
    pub const ERROR: LevelMask = LevelMask(Severity::Error.bit());
    pub const UI_EVENT: LevelMask = LevelMask(Severity::UiEvent.bit() | Self::ERROR.0);
    pub const WARNING: LevelMask = LevelMask(Severity::Warning.bit() | Self::UI_EVENT.0);
    pub const INFO: LevelMask = LevelMask(Severity::Info.bit() | Self::WARNING.0);
    pub const DEBUG: LevelMask = LevelMask(Severity::Debug.bit() | Self::INFO.0);
    pub const ALL: LevelMask = LevelMask(0b1_1111);

    /// Mask admitting exactly one severity
    pub const fn only(severity: Severity) -> Self {
        LevelMask(severity.bit())
    }

    /// Build a mask from raw bits, discarding unknown ones
    pub const fn from_bits_truncate(bits: u8) -> Self {
        LevelMask(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether a record of `severity` passes this mask
    pub const fn allows(self, severity: Severity) -> bool {
        self.0 & severity.bit() == severity.bit()
    }

    pub const fn contains(self, other: LevelMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        LevelMask::ALL
    }
}

impl From<Severity> for LevelMask {
    fn from(severity: Severity) -> Self {
        LevelMask::only(severity)
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for LevelMask {
    fn bitor_assign(&mut self, rhs: LevelMask) {
        self.0 |= rhs.0;
    }
}

/// Error returned when a level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected off, error, ui_event, warning, info, debug or all)")]
pub struct ParseLevelError(pub String);

impl FromStr for LevelMask {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(LevelMask::OFF),
            "error" => Ok(LevelMask::ERROR),
            "ui_event" | "uievent" => Ok(LevelMask::UI_EVENT),
            "warning" | "warn" => Ok(LevelMask::WARNING),
            "info" => Ok(LevelMask::INFO),
            "debug" => Ok(LevelMask::DEBUG),
            "all" => Ok(LevelMask::ALL),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LevelMask {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
