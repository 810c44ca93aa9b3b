// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Failures reported by the log handle.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened, created or locked.
    #[error("log file unavailable: {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending to the file or writing the console line failed.
    #[error("failed to write log message: {source}")]
    WriteFailure {
        #[source]
        source: io::Error,
    },

    /// Settings of the global handle were already fixed, by an earlier
    /// `configure` or by a first access (successful or not).
    #[error("log settings already fixed to {}", .path.display())]
    SettingsFixed { path: PathBuf },
}

impl LogError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(source: io::Error) -> Self {
        Self::WriteFailure { source }
    }
}
