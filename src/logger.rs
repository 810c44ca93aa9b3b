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

//! Process-wide log handle mirroring every message to a file and the console.
//!
//! The global handle is built on first access through [`instance`] and lives
//! until the process exits. Independent handles can be built with
//! [`LogHandle::open`] and friends; they release their file when dropped.

use fs2::FileExt;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::constants::{CONSOLE_PREFIX, DEFAULT_LOG_FILE, LINE_SEPARATOR};
use crate::error::LogError;

static SETTINGS: OnceCell<Settings> = OnceCell::new();
static INSTANCE: OnceCell<LogHandle> = OnceCell::new();

/// Construction parameters of a log handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File the handle appends to.
    pub path: PathBuf,
    /// Take an exclusive advisory lock on the file for the handle's lifetime.
    pub lock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            lock: true,
        }
    }
}

struct Sinks {
    file: File,
    console: Box<dyn Write + Send>,
}

/// Owned append-mode log file plus the console it is mirrored to.
pub struct LogHandle {
    path: PathBuf,
    locked: bool,
    sinks: Mutex<Sinks>,
}

impl LogHandle {
    /// Open `path` for appending with default settings, mirroring to stdout.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::with_settings(&Settings {
            path: path.as_ref().to_path_buf(),
            ..Settings::default()
        })
    }

    pub fn with_settings(settings: &Settings) -> Result<Self, LogError> {
        Self::with_console(settings, Box::new(io::stdout()))
    }

    /// Open the file described by `settings`, mirroring to `console`.
    ///
    /// Pre-existing content is kept. Fails with `ResourceUnavailable` when
    /// the file cannot be opened or created, or when `settings.lock` is set
    /// and another handle already holds the lock.
    pub fn with_console(
        settings: &Settings,
        console: Box<dyn Write + Send>,
    ) -> Result<Self, LogError> {
        let path = settings.path.clone();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::unavailable(&path, e))?;

        if settings.lock {
            // Explicit trait call: newer std has an inherent `try_lock_exclusive`.
            if let Err(e) = FileExt::try_lock_exclusive(&file) {
                let source = if e.kind() == io::ErrorKind::WouldBlock {
                    io::Error::new(e.kind(), "log file is locked by another handle")
                } else {
                    e
                };
                warn!("could not lock {}: {}", path.display(), source);
                return Err(LogError::unavailable(path, source));
            }
        }

        debug!("opened log file {} (lock={})", path.display(), settings.lock);

        Ok(Self {
            path,
            locked: settings.lock,
            sinks: Mutex::new(Sinks { file, console }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `"\n" + message` to the file, then write `"Logging " + message`
    /// as one console line. Both writes happen under the same lock.
    pub fn log(&self, message: &str) -> Result<(), LogError> {
        let mut entry = String::with_capacity(LINE_SEPARATOR.len() + message.len());
        entry.push_str(LINE_SEPARATOR);
        entry.push_str(message);

        let mut sinks = self.sinks();
        sinks
            .file
            .write_all(entry.as_bytes())
            .map_err(LogError::write)?;
        writeln!(sinks.console, "{}{}", CONSOLE_PREFIX, message).map_err(LogError::write)?;
        Ok(())
    }

    /// Flush the console and sync the file to disk.
    pub fn flush(&self) -> Result<(), LogError> {
        let mut sinks = self.sinks();
        sinks.console.flush().map_err(LogError::write)?;
        sinks.file.sync_all().map_err(LogError::write)
    }

    fn sinks(&self) -> MutexGuard<'_, Sinks> {
        // A panic mid-write leaves nothing to repair: the file only ever grows.
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) {
        let sinks = self.sinks.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = sinks.console.flush();
        if self.locked {
            let _ = FileExt::unlock(&sinks.file);
        }
    }
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle")
            .field("path", &self.path)
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}

/// Fix the settings of the global handle before its first use.
///
/// Fails with `SettingsFixed` once settings were fixed, either by an
/// earlier call or by the first [`instance`] access, even one that failed
/// to open the file.
pub fn configure(settings: Settings) -> Result<(), LogError> {
    SETTINGS.set(settings).map_err(|rejected| LogError::SettingsFixed {
        path: SETTINGS.get().map_or(rejected.path, |s| s.path.clone()),
    })
}

/// The process-wide handle, opened on first access.
///
/// Concurrent first accesses block until one of them has opened the file;
/// all callers then share it. A failed open stores nothing.
pub fn instance() -> Result<&'static LogHandle, LogError> {
    INSTANCE.get_or_try_init(|| {
        let settings = SETTINGS.get_or_init(Settings::default);
        LogHandle::with_settings(settings)
    })
}

/// Whether the global handle has been opened.
pub fn is_active() -> bool {
    INSTANCE.get().is_some()
}

/// Log through the global handle.
pub fn log(message: &str) -> Result<(), LogError> {
    instance()?.log(message)
}

/// Flush the global handle if it was ever opened.
pub fn shutdown() -> Result<(), LogError> {
    match INSTANCE.get() {
        Some(handle) => {
            debug!("flushing {} at shutdown", handle.path().display());
            handle.flush()
        }
        None => Ok(()),
    }
}
