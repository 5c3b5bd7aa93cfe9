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
//! Leveled logging macros.
//!
//! Every macro writes through the shared logger (see [`crate::registry`]),
//! building the development preset first if nothing was initialized. The
//! message comes first and structured fields follow in `tracing` syntax:
//!
//! ```ignore
//! logz::info!("Processing file", path = %path.display(), size = 1024);
//! logz::error!(err, operation = "upload");
//! logz::infof!("processed {} of {} files", done, total);
//! ```
//!
//! `error!` and `fatal!` take either text or an error value; both are
//! rendered through `Display`, so an error contributes exactly its message.
//! Because the macros expand at the call site, recorded source locations
//! point at the caller.

/// Log a debug message with optional structured fields
#[macro_export]
macro_rules! debug {
    ($msg:expr $(,)?) => {
        $crate::with_logger(|| $crate::__tracing::debug!("{}", $msg))
    };
    ($msg:expr, $($fields:tt)+) => {
        $crate::with_logger(|| $crate::__tracing::debug!($($fields)+, "{}", $msg))
    };
}

/// Log an info message with optional structured fields
#[macro_export]
macro_rules! info {
    ($msg:expr $(,)?) => {
        $crate::with_logger(|| $crate::__tracing::info!("{}", $msg))
    };
    ($msg:expr, $($fields:tt)+) => {
        $crate::with_logger(|| $crate::__tracing::info!($($fields)+, "{}", $msg))
    };
}

/// Log a warning message with optional structured fields
#[macro_export]
macro_rules! warn {
    ($msg:expr $(,)?) => {
        $crate::with_logger(|| $crate::__tracing::warn!("{}", $msg))
    };
    ($msg:expr, $($fields:tt)+) => {
        $crate::with_logger(|| $crate::__tracing::warn!($($fields)+, "{}", $msg))
    };
}

/// Log an error message or error value with optional structured fields
#[macro_export]
macro_rules! error {
    ($msg:expr $(,)?) => {
        $crate::with_logger(|| $crate::__tracing::error!("{}", $msg))
    };
    ($msg:expr, $($fields:tt)+) => {
        $crate::with_logger(|| $crate::__tracing::error!($($fields)+, "{}", $msg))
    };
}

/// Log an error message or error value tagged `fatal = true`, then exit with status 1.
///
/// The output is synced before the process exits. Evaluates to `!`.
#[macro_export]
macro_rules! fatal {
    ($msg:expr $(,)?) => {
        $crate::emit_fatal(|| $crate::__tracing::error!(fatal = true, "{}", $msg))
    };
    ($msg:expr, $($fields:tt)+) => {
        $crate::emit_fatal(|| $crate::__tracing::error!(fatal = true, $($fields)+, "{}", $msg))
    };
}

/// Format a message and log it at info level
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::info!(::std::format!($($arg)+))
    };
}

/// Format a message and log it at error level
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::error!(::std::format!($($arg)+))
    };
}

/// Format a message, log it as fatal, then exit with status 1
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatal!(::std::format!($($arg)+))
    };
}
