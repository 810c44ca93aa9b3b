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

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::Parser;
use std::borrow::Cow;
use std::path::PathBuf;
use std::thread;

use mylogger::LogHandle;
use mylogger::cli::Cli;
use mylogger::config::Config;
use mylogger::constants::{DEFAULT_CONFIG_FILE, TIMESTAMP_FORMAT};
use mylogger::diagnostics::init_diagnostics;

fn log_one(handle: &LogHandle, message: &str, timestamp: bool) -> Result<()> {
    let line = if timestamp {
        Cow::Owned(format!(
            "{} {}",
            Local::now().format(TIMESTAMP_FORMAT),
            message
        ))
    } else {
        Cow::Borrowed(message)
    };

    handle
        .log(&line)
        .with_context(|| format!("Failed to log message: {}", message))
}

fn log_messages(
    handle: &'static LogHandle,
    messages: &[String],
    timestamp: bool,
    threads: u16,
) -> Result<()> {
    let threads = usize::from(threads).min(messages.len()).max(1);

    if threads == 1 {
        for message in messages {
            log_one(handle, message, timestamp)?;
        }
        return Ok(());
    }

    thread::scope(|scope| {
        let workers: Vec<_> = (0..threads)
            .map(|worker| {
                scope.spawn(move || -> Result<()> {
                    for message in messages.iter().skip(worker).step_by(threads) {
                        log_one(handle, message, timestamp)?;
                    }
                    Ok(())
                })
            })
            .collect();

        for worker in workers {
            worker
                .join()
                .map_err(|_| anyhow!("Logging thread panicked"))??;
        }
        Ok(())
    })
}

fn main() -> Result<()> {
    // Flush what was written and leave; stdout is reserved for mirrored lines.
    ctrlc::set_handler(|| {
        let _ = mylogger::shutdown();
        eprintln!("\nInterrupted. Exiting.");
        std::process::exit(0);
    })
    .context("Error setting Ctrl-C handler")?;

    let cli = Cli::parse();
    init_diagnostics(cli.diagnostics.as_deref());

    // Load config from specified path or default mylogger.toml
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)?;

    let settings = config.settings(cli.log_file.clone(), cli.no_lock);
    let timestamp = config.merge_with_cli(cli.timestamp, config.timestamp, false);
    let threads = config.merge_with_cli(cli.threads, config.threads, 1).max(1);

    log::debug!(
        "logging {} message(s) to {} on {} thread(s)",
        cli.messages.len(),
        settings.path.display(),
        threads
    );

    mylogger::configure(settings).context("Failed to configure log handle")?;
    let handle = mylogger::instance().context("Failed to open log file")?;

    let logged = log_messages(handle, &cli.messages, timestamp, threads);
    let flushed = mylogger::shutdown().context("Failed to flush log file");
    logged?;
    flushed?;

    Ok(())
}
