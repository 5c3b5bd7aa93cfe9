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
//! logz: process-wide structured logging
//!
//! One shared logger, configured for development or production, reachable
//! from anywhere through leveled macros.
//!
//! # Features
//!
//! - **Two presets**: coloured human-readable lines with caller locations for
//!   development; JSON records with an ISO-8601 `timestamp` for production
//! - **Ordered overrides**: adjust the preset before the logger is built
//! - **Lazy default**: logging before initialization uses the development preset
//! - **Safe reconfiguration**: re-initialization swaps the whole logger; each
//!   call is written by exactly one configuration
//! - **Environment-based filtering**: `RUST_LOG` applies when no level is set
//!
//! # Example
//!
//! ```ignore
//! use logz::{info, errorf, overrides};
//!
//! fn main() {
//!     logz::init_log_with("production", vec![overrides::level("debug")]);
//!
//!     info!("Application started", port = 8080);
//!     errorf!("failed to open {}: {}", "config.toml", "not found");
//! }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod overrides;
pub mod registry;
mod macros;

pub use config::{LogBuffer, LogConfig, LogFormat, LogOutput, Mode, TimeEncoding};
pub use error::LogError;
pub use logger::Logger;
pub use overrides::ConfigMutator;
pub use registry::{
    current_logger, emit_fatal, global, init_log, init_log_with, try_init_log_with, with_logger,
    LoggerRegistry,
};

#[doc(hidden)]
pub use tracing as __tracing;
