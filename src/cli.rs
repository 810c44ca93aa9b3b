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

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mylogger")]
#[command(about = "Append messages to a shared log file and mirror them to stdout")]
#[command(version)]
pub struct Cli {
    /// Path to config file (defaults to mylogger.toml in current directory if it exists)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file to append to (defaults to my_log.txt)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not take an exclusive lock on the log file
    #[arg(long)]
    pub no_lock: bool,

    /// Prefix each message with the local time
    #[arg(long)]
    pub timestamp: bool,

    /// Spread the messages across this many threads
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Diagnostics filter for stderr (env_logger syntax, overrides RUST_LOG)
    #[arg(long)]
    pub diagnostics: Option<String>,

    /// Messages to log, one line each
    #[arg(required = true)]
    pub messages: Vec<String>,
}
