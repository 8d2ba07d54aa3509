//! Console destination
//!
//! Writes one line per event. Defaults to standard output; any writer can be
//! injected, which is how the golden-output tests observe it.

use super::{Destination, DestinationBase};
use crate::errors::DestinationError;
use crate::record::EventRecord;
use crate::sync;
use chrono::{DateTime, Utc};
use evlog_core_types::{LevelMask, Properties, Severity};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Mutex;

/// Output format of a console destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleFormat {
    /// `[SEVERITY] ` followed by the canonical line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: DateTime<Utc>,
    severity: Severity,
    event_name: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a Properties>,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    default_properties: Properties,
    file: &'a str,
    line: u32,
    function: &'a str,
}

pub struct ConsoleDestination {
    base: DestinationBase,
    format: ConsoleFormat,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleDestination {
    /// Console destination writing text lines to standard output
    pub fn new(identifier: impl Into<String>, level: LevelMask) -> Self {
        Self::with_writer(identifier, level, io::stdout())
    }

    /// Console destination writing to `writer`
    pub fn with_writer(
        identifier: impl Into<String>,
        level: LevelMask,
        writer: impl Write + Send + 'static,
    ) -> Self {
        Self {
            base: DestinationBase::new(identifier, level),
            format: ConsoleFormat::Text,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn with_format(mut self, format: ConsoleFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_default_properties(mut self, properties: Properties) -> Self {
        self.base = self.base.with_default_properties(properties);
        self
    }

    pub fn format(&self) -> ConsoleFormat {
        self.format
    }

    /// Render `record` without writing it
    ///
    /// # Errors
    ///
    /// Returns `DestinationError::Serialization` if JSON encoding fails.
    pub fn format_record(&self, record: &EventRecord) -> Result<String, DestinationError> {
        match self.format {
            ConsoleFormat::Text => Ok(format!(
                "[{}] {}",
                record.severity(),
                self.base.render_line(record)
            )),
            ConsoleFormat::Json => {
                let site = record.site();
                let line = JsonLine {
                    timestamp: record.timestamp(),
                    severity: record.severity(),
                    event_name: record.event_name(),
                    message: record.message(),
                    properties: record
                        .properties()
                        .filter(|_| !record.properties_are_defaults()),
                    default_properties: self.base.default_properties(),
                    file: site.file,
                    line: site.line,
                    function: site.function,
                };
                Ok(serde_json::to_string(&line)?)
            }
        }
    }
}

impl Destination for ConsoleDestination {
    fn base(&self) -> &DestinationBase {
        &self.base
    }

    fn deliver(&self, record: &EventRecord) -> Result<(), DestinationError> {
        let line = self.format_record(record)?;
        let mut writer = sync::lock(&self.writer);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for ConsoleDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleDestination")
            .field("identifier", &self.base.identifier())
            .field("level", &self.base.level())
            .field("format", &self.format)
            .finish()
    }
}
