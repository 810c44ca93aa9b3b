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

//! Internal diagnostics.
//!
//! The handle reports its own events through the `log` facade. These go to
//! stderr so they never mix with the mirrored `Logging ...` lines on stdout.

use std::sync::Once;

use crate::constants::DEFAULT_DIAGNOSTICS_FILTER;

static INIT: Once = Once::new();

/// Initializes the diagnostics logger once.
///
/// `filter` follows the `env_logger` filter syntax. Without it, `RUST_LOG`
/// is used, then the crate default. Subsequent calls are ignored.
pub fn init_diagnostics(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(DEFAULT_DIAGNOSTICS_FILTER);
        }

        builder.target(env_logger::Target::Stderr);

        // Another logger may already be installed by the host program.
        let _ = builder.try_init();

        log::debug!("diagnostics initialized");
    });
}
