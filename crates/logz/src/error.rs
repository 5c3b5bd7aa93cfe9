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
//! Errors raised while building a logger.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a logger from a configuration.
#[derive(Error, Debug)]
pub enum LogError {
    /// The configured level filter does not parse
    #[error("Invalid log level filter '{filter}': {reason}")]
    InvalidLevel {
        /// Filter text as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A format name is not one of the known formats
    #[error("Unknown log format: {0}. Expected one of: full, compact, pretty, json")]
    UnknownFormat(String),

    /// A file output could not be opened for appending
    #[error("Failed to open log output {}: {source}", .path.display())]
    OpenOutput {
        /// Path of the output file
        path: PathBuf,
        /// Underlying open failure
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while preparing an output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
