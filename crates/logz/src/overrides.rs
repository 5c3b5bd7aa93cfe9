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
//! Ready-made configuration overrides.
//!
//! Each function returns a boxed [`ConfigMutator`] so overrides of different
//! kinds can be collected into one list:
//!
//! ```ignore
//! use logz::{init_log_with, overrides, LogOutput};
//!
//! init_log_with(
//!     "production",
//!     vec![overrides::level("debug"), overrides::output(LogOutput::Stdout)],
//! );
//! ```

use crate::config::{LogConfig, LogFormat, LogOutput};

/// A caller-supplied adjustment applied to the preset before building
pub type ConfigMutator = Box<dyn FnOnce(&mut LogConfig) + Send>;

/// Set the level filter
pub fn level(level: impl Into<String>) -> ConfigMutator {
    let level = level.into();
    Box::new(move |config| config.level = Some(level))
}

/// Set the output format
pub fn format(format: LogFormat) -> ConfigMutator {
    Box::new(move |config| config.format = format)
}

/// Set the output destination
pub fn output(output: LogOutput) -> ConfigMutator {
    Box::new(move |config| config.output = output)
}

/// Enable or disable coloured level labels
pub fn color(use_color: bool) -> ConfigMutator {
    Box::new(move |config| config.use_color = use_color)
}

/// Enable or disable timestamps
pub fn timestamps(use_timestamps: bool) -> ConfigMutator {
    Box::new(move |config| config.use_timestamps = use_timestamps)
}

/// Enable or disable caller file and line
pub fn caller(include_caller: bool) -> ConfigMutator {
    Box::new(move |config| config.include_caller = include_caller)
}

/// Enable or disable thread IDs
pub fn thread_ids(include_thread_ids: bool) -> ConfigMutator {
    Box::new(move |config| config.include_thread_ids = include_thread_ids)
}

/// Enable or disable target module names
pub fn targets(include_targets: bool) -> ConfigMutator {
    Box::new(move |config| config.include_targets = include_targets)
}
