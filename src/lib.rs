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

//! Minimal process-wide logging: one lazily opened append-mode file, every
//! message mirrored to stdout.
//!
//! ```no_run
//! mylogger::log("start")?;
//! # Ok::<(), mylogger::LogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod logger;

pub use error::LogError;
pub use logger::{LogHandle, Settings, configure, instance, is_active, log, shutdown};
