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

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logger::Settings;

/// Configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Path of the global log file
    pub log_file: Option<String>,

    /// Take an exclusive lock on the log file
    pub lock: Option<bool>,

    /// Prefix each message with the local time
    pub timestamp: Option<bool>,

    /// Number of threads the messages are spread across
    pub threads: Option<u16>,
}

impl Config {
    /// Load config from a file, or return default if file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Merge this config with CLI args, where CLI args take precedence
    pub fn merge_with_cli<T>(&self, cli_value: T, config_value: Option<T>, default_value: T) -> T
    where
        T: PartialEq + Clone,
    {
        if cli_value != default_value {
            cli_value
        } else if let Some(config_val) = config_value {
            config_val
        } else {
            default_value
        }
    }

    /// Settings for the global log handle, with the CLI path and lock flag
    /// taking precedence over the file.
    pub fn settings(&self, cli_log_file: Option<PathBuf>, cli_no_lock: bool) -> Settings {
        let defaults = Settings::default();
        let path = cli_log_file
            .or_else(|| self.log_file.as_ref().map(PathBuf::from))
            .unwrap_or(defaults.path);
        let lock = !self.merge_with_cli(cli_no_lock, self.lock.map(|l| !l), false);
        Settings { path, lock }
    }
}
