// Copyright (C) 2026  winnyboy5
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! Logger handles.
//!
//! A [`Logger`] is the built form of a [`LogConfig`]: a `tracing` dispatcher
//! with a formatting layer, a level filter and an output writer. Handles are
//! immutable; reconfiguring means building a new one.

use crate::config::{LogConfig, LogFormat, LogOutput, TimeEncoding};
use crate::error::LogError;
use chrono::{SecondsFormat, Utc};
use std::fmt as stdfmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::sync::{Arc, Mutex};
use tracing::Dispatch;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// A built, ready-to-use logger.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    config: Arc<LogConfig>,
    file: Option<Arc<File>>,
}

impl Logger {
    /// Build a logger from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] if the effective level filter does
    /// not parse, and [`LogError::OpenOutput`] if a file output cannot be
    /// opened for appending.
    pub fn build(config: LogConfig) -> Result<Self, LogError> {
        let env_filter = build_env_filter(&config)?;
        let (writer, file) = build_writer(&config.output)?;
        let layer = build_layer(&config, writer);

        let subscriber = Registry::default().with(layer).with(env_filter);

        Ok(Logger {
            dispatch: Dispatch::new(subscriber),
            config: Arc::new(config),
            file,
        })
    }

    /// Configuration this logger was built from
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Underlying `tracing` dispatcher
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the thread's default dispatcher.
    ///
    /// Every `tracing` event emitted inside `f` on the current thread is
    /// written by this logger.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Flush standard streams and sync file output to disk.
    ///
    /// Failures are ignored; this runs on the way out of the process.
    pub fn sync(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        if let Some(file) = &self.file {
            let _ = file.sync_data();
        }
    }
}

impl stdfmt::Debug for Logger {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Timestamp formatter selected by [`TimeEncoding`]
#[derive(Debug, Clone, Copy)]
struct LogTimer(TimeEncoding);

impl FormatTime for LogTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        match self.0 {
            TimeEncoding::SystemTime => fmt::time::SystemTime.format_time(w),
            TimeEncoding::Iso8601 => write!(
                w,
                "{}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        }
    }
}

/// Build the formatting layer for the configured format
fn build_layer(config: &LogConfig, writer: BoxMakeWriter) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.use_color)
        .with_target(config.include_targets)
        .with_thread_ids(config.include_thread_ids)
        .with_file(config.include_caller)
        .with_line_number(config.include_caller)
        .with_timer(LogTimer(config.time_encoding));

    match (config.format, config.use_timestamps) {
        (LogFormat::Full, true) => layer.boxed(),
        (LogFormat::Full, false) => layer.without_time().boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
        (LogFormat::Json, true) => layer.json().flatten_event(true).boxed(),
        (LogFormat::Json, false) => layer.json().flatten_event(true).without_time().boxed(),
    }
}

/// Open the writer for the specified output
fn build_writer(output: &LogOutput) -> Result<(BoxMakeWriter, Option<Arc<File>>), LogError> {
    match output {
        LogOutput::Stderr => Ok((BoxMakeWriter::new(io::stderr), None)),
        LogOutput::Stdout => Ok((BoxMakeWriter::new(io::stdout), None)),
        LogOutput::Buffer(buffer) => Ok((BoxMakeWriter::new(buffer.clone()), None)),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
            let handle = file.try_clone()?;
            Ok((BoxMakeWriter::new(Mutex::new(file)), Some(Arc::new(handle))))
        }
    }
}

/// Build an environment filter for the given configuration
fn build_env_filter(config: &LogConfig) -> Result<EnvFilter, LogError> {
    let level_str = config.get_effective_level();

    EnvFilter::try_new(&level_str).map_err(|e| LogError::InvalidLevel {
        filter: level_str,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogBuffer;

    fn buffered(config: LogConfig) -> (Logger, LogBuffer) {
        let buffer = LogBuffer::new();
        let logger = Logger::build(config.with_output(LogOutput::Buffer(buffer.clone()))).unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_env_filter_parsing() {
        let result = build_env_filter(&LogConfig::development().with_level("debug"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_directive_filter_parsing() {
        let result = build_env_filter(&LogConfig::production().with_level("logz=trace,warn"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_unparsable_explicit_level_fails() {
        let result = build_env_filter(&LogConfig::production().with_level("my_crate=verbose"));
        assert!(matches!(result, Err(LogError::InvalidLevel { .. })));
    }

    #[test]
    fn test_json_record_has_iso8601_timestamp() {
        let (logger, buffer) = buffered(LogConfig::production().with_level("info"));
        logger.in_scope(|| tracing::info!(request_id = "abc123", "Processing request"));

        let line = buffer.lines().pop().unwrap();
        let record: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(record["message"], "Processing request");
        assert_eq!(record["request_id"], "abc123");
        assert_eq!(record["level"], "INFO");

        let timestamp = record["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn test_level_filter_applies() {
        let (logger, buffer) = buffered(LogConfig::production().with_level("warn"));
        logger.in_scope(|| {
            tracing::debug!("dropped");
            tracing::info!("dropped");
            tracing::warn!("kept");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[test]
    fn test_development_output_is_colored() {
        let (logger, buffer) = buffered(LogConfig::development().with_level("debug"));
        logger.in_scope(|| tracing::debug!("hello"));

        let contents = buffer.contents();
        assert!(contents.contains("\u{1b}["));
        assert!(contents.contains("DEBUG"));
        assert!(contents.contains("hello"));
    }

    #[test]
    fn test_caller_location_toggle() {
        let (logger, buffer) = buffered(
            LogConfig::development()
                .with_level("info")
                .with_color(false)
                .with_caller(false),
        );
        logger.in_scope(|| tracing::info!("no caller"));
        assert!(!buffer.contents().contains("logger.rs"));

        let (logger, buffer) = buffered(LogConfig::development().with_level("info").with_color(false));
        logger.in_scope(|| tracing::info!("with caller"));
        assert!(buffer.contents().contains("logger.rs"));
    }

    #[test]
    fn test_events_outside_scope_are_not_captured() {
        let (logger, buffer) = buffered(LogConfig::production().with_level("info"));
        tracing::info!("outside");
        logger.in_scope(|| tracing::info!("inside"));

        let contents = buffer.contents();
        assert!(contents.contains("inside"));
        assert!(!contents.contains("outside"));
    }

    #[test]
    fn test_file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = LogConfig::production()
            .with_level("info")
            .with_output(LogOutput::File(path.clone()));

        let logger = Logger::build(config.clone()).unwrap();
        logger.in_scope(|| tracing::info!("first"));
        logger.sync();

        let logger = Logger::build(config).unwrap();
        logger.in_scope(|| tracing::info!("second"));
        logger.sync();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
    }

    #[test]
    fn test_unopenable_file_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let result = Logger::build(LogConfig::production().with_output(LogOutput::File(path)));
        assert!(matches!(result, Err(LogError::OpenOutput { .. })));
    }
}
