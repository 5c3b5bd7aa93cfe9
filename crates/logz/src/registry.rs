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
//! The shared logger registry.
//!
//! A [`LoggerRegistry`] owns at most one [`Logger`] at a time. Explicit
//! initialization replaces it wholesale; the first lookup without an explicit
//! initialization builds the development preset. Logging calls take a
//! snapshot of the current handle under the lock and write without holding it,
//! so a call racing with re-initialization is written entirely by either the
//! old or the new logger.
//!
//! The free functions in this module operate on the process-wide registry
//! returned by [`global`].

use crate::config::{LogConfig, Mode};
use crate::error::LogError;
use crate::logger::Logger;
use std::process;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL: LoggerRegistry = LoggerRegistry::new();

/// Holder of the single shared logger handle
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    current: Mutex<Option<Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create an empty registry; the first lookup builds the default logger.
    pub const fn new() -> Self {
        LoggerRegistry {
            current: Mutex::new(None),
        }
    }

    /// Build a logger for `mode` with `overrides` applied, and install it.
    ///
    /// `"development"` selects the development preset; any other mode
    /// selects production. Overrides run in order before the lock is taken.
    ///
    /// # Errors
    ///
    /// Returns the build error and leaves the current logger in place.
    pub fn init<I>(&self, mode: &str, overrides: I) -> Result<Arc<Logger>, LogError>
    where
        I: IntoIterator,
        I::Item: FnOnce(&mut LogConfig),
    {
        let mut config = LogConfig::for_mode(Mode::from_name(mode));
        for apply in overrides {
            apply(&mut config);
        }

        let mut current = self.lock();
        let logger = Arc::new(Logger::build(config)?);
        *current = Some(Arc::clone(&logger));
        Ok(logger)
    }

    /// Current logger, building the development preset on first use.
    ///
    /// # Errors
    ///
    /// Returns the build error if the default logger cannot be built.
    pub fn try_logger(&self) -> Result<Arc<Logger>, LogError> {
        let mut current = self.lock();
        if let Some(logger) = current.as_ref() {
            return Ok(Arc::clone(logger));
        }

        let logger = Arc::new(Logger::build(LogConfig::development())?);
        *current = Some(Arc::clone(&logger));
        Ok(logger)
    }

    /// Current logger, building the development preset on first use.
    ///
    /// Exits the process if the default logger cannot be built.
    pub fn logger(&self) -> Arc<Logger> {
        self.try_logger().unwrap_or_else(|err| startup_failure(&err))
    }

    /// Whether a logger has been built, explicitly or lazily
    pub fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }

    /// Run `f` with the current logger as the thread's default dispatcher
    pub fn with_logger<T>(&self, f: impl FnOnce() -> T) -> T {
        self.logger().in_scope(f)
    }

    /// Write through `f` with the current logger, sync it, then exit with status 1
    pub fn emit_fatal(&self, f: impl FnOnce()) -> ! {
        let logger = self.logger();
        logger.in_scope(f);
        logger.sync();
        process::exit(1)
    }

    // The guarded value is only ever replaced whole, so a poisoned lock still
    // holds either no logger or a complete one.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<Logger>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn startup_failure(err: &LogError) -> ! {
    eprintln!("logz: failed to initialize logger: {err}");
    process::exit(1)
}

/// The process-wide registry used by the logging macros
pub fn global() -> &'static LoggerRegistry {
    &GLOBAL
}

/// Initialize the shared logger for `mode` with preset defaults.
///
/// Exits the process with status 1 if the logger cannot be built.
///
/// # Example
///
/// ```ignore
/// logz::init_log("production");
/// logz::info!("Application started", version = env!("CARGO_PKG_VERSION"));
/// ```
pub fn init_log(mode: &str) {
    init_log_with(mode, std::iter::empty::<fn(&mut LogConfig)>());
}

/// Initialize the shared logger for `mode`, applying `overrides` in order.
///
/// Exits the process with status 1 if the logger cannot be built.
///
/// # Example
///
/// ```ignore
/// use logz::{init_log_with, overrides, LogOutput};
///
/// init_log_with("production", vec![
///     overrides::level("debug"),
///     overrides::output(LogOutput::Stdout),
/// ]);
/// ```
pub fn init_log_with<I>(mode: &str, overrides: I)
where
    I: IntoIterator,
    I::Item: FnOnce(&mut LogConfig),
{
    if let Err(err) = GLOBAL.init(mode, overrides) {
        startup_failure(&err);
    }
}

/// Initialize the shared logger, returning the build error instead of exiting.
///
/// # Errors
///
/// Returns the build error and leaves the current logger in place.
pub fn try_init_log_with<I>(mode: &str, overrides: I) -> Result<Arc<Logger>, LogError>
where
    I: IntoIterator,
    I::Item: FnOnce(&mut LogConfig),
{
    GLOBAL.init(mode, overrides)
}

/// Current shared logger, built from the development preset on first use
pub fn current_logger() -> Arc<Logger> {
    GLOBAL.logger()
}

/// Run `f` with the shared logger as the thread's default dispatcher
pub fn with_logger<T>(f: impl FnOnce() -> T) -> T {
    GLOBAL.with_logger(f)
}

/// Write through `f` with the shared logger, sync it, then exit with status 1
pub fn emit_fatal(f: impl FnOnce()) -> ! {
    GLOBAL.emit_fatal(f)
}
