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

/// Path of the global log file when nothing else has been configured.
pub const DEFAULT_LOG_FILE: &str = "my_log.txt";

/// Prefix of every line mirrored to the console.
pub const CONSOLE_PREFIX: &str = "Logging ";

/// Written before each message in the log file.
pub const LINE_SEPARATOR: &str = "\n";

pub const DEFAULT_CONFIG_FILE: &str = "mylogger.toml";

/// `chrono` format used by the binary's `--timestamp` flag.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter applied to internal diagnostics when `RUST_LOG` is unset.
pub const DEFAULT_DIAGNOSTICS_FILTER: &str = "warn";
