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
//! Child-process harness shared by the integration tests.
//!
//! A test re-runs its own binary with `LOGZ_CHILD_CASE` set; the child takes
//! the branch for that case and the parent inspects status and output.

use std::env;
use std::process::{Command, Output};

const CASE_VAR: &str = "LOGZ_CHILD_CASE";

/// Re-run `test_name` from this test binary as a child with `case` selected
pub fn run_child(test_name: &str, case: &str, envs: &[(&str, &str)]) -> Output {
    Command::new(env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CASE_VAR, case)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .envs(envs.iter().copied())
        .output()
        .unwrap()
}

/// Case selected by the parent, if this process is a child
pub fn child_case() -> Option<String> {
    env::var(CASE_VAR).ok()
}
