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
//! Basic logging example demonstrating both presets.
//!
//! Run with: cargo run -p logz --example basic_logging -- <mode>
//! Where <mode> is "development" or anything else for production

use logz::{debug, error, errorf, info, infof, overrides, warn};
use std::env;
use std::io;

fn main() -> anyhow::Result<()> {
    info!("Logging before initialization uses the development preset");

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("development");

    println!("Initializing with mode: {}", mode);
    logz::try_init_log_with(mode, vec![overrides::level("debug")])?;

    info!("Application started");

    debug!("This is a debug message");
    info!("This is an info message");
    warn!("This is a warning message");

    // Structured logging with fields
    info!("Processing request", request_id = "abc123", duration_ms = 42);

    let result = process_file("/path/to/file");
    if let Err(err) = &result {
        error!(err, path = "/path/to/file");
    }
    infof!("File processing result: {:?}", result.is_ok());
    errorf!("{} of {} files failed", 1, 1);

    debug!("Application shutting down");

    Ok(())
}

fn process_file(path: &str) -> io::Result<String> {
    debug!("Starting file processing", path);
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path),
    ))
}
