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
//! Configuration for the shared logger.
//!
//! A [`LogConfig`] starts from one of two presets selected by [`Mode`] and is
//! then adjusted by override functions before the logger is built.

use crate::error::LogError;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment the process runs in; selects the configuration preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human-readable, coloured output with caller locations
    Development,

    /// Machine-readable JSON records with ISO-8601 timestamps
    Production,
}

impl Mode {
    /// Map a mode name to a preset.
    ///
    /// Only the exact string `"development"` selects [`Mode::Development`];
    /// every other value, including the empty string, selects production.
    pub fn from_name(name: &str) -> Self {
        if name == "development" {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    /// Level filter used when neither the config nor `RUST_LOG` sets one
    pub fn default_level(self) -> &'static str {
        match self {
            Mode::Development => "debug",
            Mode::Production => "info",
        }
    }
}

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Default single-line human-readable format
    #[default]
    Full,

    /// Compact single-line format
    Compact,

    /// Multi-line pretty-printed format
    Pretty,

    /// JSON format for machine-readable logs
    Json,
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(LogError::UnknownFormat(s.to_string())),
        }
    }
}

/// How timestamps are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeEncoding {
    /// The formatter's own system-time rendering
    #[default]
    SystemTime,

    /// RFC 3339 / ISO-8601 in UTC with millisecond precision
    Iso8601,
}

/// Log output destination
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    /// Write to standard error
    Stderr,

    /// Write to standard output
    Stdout,

    /// Append to a file, creating it if needed
    File(PathBuf),

    /// Collect records in memory
    Buffer(LogBuffer),
}

/// In-memory log sink shared between clones.
///
/// Every clone appends to the same underlying buffer, so a test can keep one
/// clone and hand another to the logger configuration.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written records split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PartialEq for LogBuffer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Writer handed out by [`LogBuffer`] for each record
#[derive(Debug)]
pub struct LogBufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogBufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogBufferWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Configuration for the shared logger
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Preset this configuration was derived from
    pub mode: Mode,

    /// Output format for records
    pub format: LogFormat,

    /// Log level filter (e.g., "info", "debug", "my_crate=trace,warn").
    /// If None, falls back to `RUST_LOG`, then to the mode's default level
    pub level: Option<String>,

    /// Whether level labels are ANSI coloured (ignored by JSON)
    pub use_color: bool,

    /// Whether to include timestamps in output
    pub use_timestamps: bool,

    /// How timestamps are rendered
    pub time_encoding: TimeEncoding,

    /// Whether to include the caller's source file and line
    pub include_caller: bool,

    /// Whether to include thread IDs in output
    pub include_thread_ids: bool,

    /// Whether to include target module names
    pub include_targets: bool,

    /// Output destination (stderr by default)
    pub output: LogOutput,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::development()
    }
}

impl LogConfig {
    /// Human-oriented preset: coloured single-line output with callers.
    pub fn development() -> Self {
        LogConfig {
            mode: Mode::Development,
            format: LogFormat::Full,
            level: None,
            use_color: true,
            use_timestamps: true,
            time_encoding: TimeEncoding::SystemTime,
            include_caller: true,
            include_thread_ids: false,
            include_targets: true,
            output: LogOutput::Stderr,
        }
    }

    /// Machine-oriented preset: JSON records with an ISO-8601 `timestamp`.
    pub fn production() -> Self {
        LogConfig {
            mode: Mode::Production,
            format: LogFormat::Json,
            level: None,
            use_color: false,
            use_timestamps: true,
            time_encoding: TimeEncoding::Iso8601,
            include_caller: true,
            include_thread_ids: false,
            include_targets: true,
            output: LogOutput::Stderr,
        }
    }

    /// Preset for the given mode
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => Self::development(),
            Mode::Production => Self::production(),
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Enable or disable color output
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Enable or disable timestamps
    pub fn with_timestamps(mut self, use_timestamps: bool) -> Self {
        self.use_timestamps = use_timestamps;
        self
    }

    /// Set the timestamp encoding
    pub fn with_time_encoding(mut self, time_encoding: TimeEncoding) -> Self {
        self.time_encoding = time_encoding;
        self
    }

    /// Enable or disable caller file and line
    pub fn with_caller(mut self, include_caller: bool) -> Self {
        self.include_caller = include_caller;
        self
    }

    /// Enable or disable thread IDs
    pub fn with_thread_ids(mut self, include_thread_ids: bool) -> Self {
        self.include_thread_ids = include_thread_ids;
        self
    }

    /// Enable or disable target module names
    pub fn with_targets(mut self, include_targets: bool) -> Self {
        self.include_targets = include_targets;
        self
    }

    /// Set the output destination
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Get the effective log level from config, environment, or mode.
    ///
    /// An unparsable `RUST_LOG` is ignored so that a filter aimed at some
    /// other program cannot stop this one from logging.
    pub fn get_effective_level(&self) -> String {
        self.resolve_level(std::env::var("RUST_LOG").ok())
    }

    fn resolve_level(&self, env_filter: Option<String>) -> String {
        self.level
            .clone()
            .or_else(|| env_filter.filter(|filter| EnvFilter::try_new(filter).is_ok()))
            .unwrap_or_else(|| self.mode.default_level().to_string())
    }
}
