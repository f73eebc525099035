// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Binary unit suffixes used by `ls -h`, starting at 1024 bytes.
const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(&self.to_human())
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

impl FileSize {
    /// Returns the `ls -h` rendering: plain bytes below 1 KiB, otherwise a base-2
    /// value rounded up, with one decimal while the value is below ten.
    pub fn to_human(self) -> String {
        let bytes = u128::from(self.0);
        if bytes < 1024 {
            return bytes.to_string();
        }

        let mut unit = 0;
        let mut divisor: u128 = 1024;
        while unit + 1 < UNITS.len() && bytes >= divisor * 1024 {
            divisor *= 1024;
            unit += 1;
        }

        let tenths = (bytes * 10).div_ceil(divisor);
        if tenths < 100 {
            return format!("{}.{}{}", tenths / 10, tenths % 10, UNITS[unit]);
        }

        let whole = bytes.div_ceil(divisor);
        if whole >= 1024 && unit + 1 < UNITS.len() {
            // Rounding carried into the next unit.
            return format!("1.0{}", UNITS[unit + 1]);
        }
        format!("{whole}{}", UNITS[unit])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    /// Files older than this (or dated in the future) show the year instead of the time.
    pub const RECENT_WINDOW_SECS: i64 = 31_556_952 / 2;

    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// `ls -l` time column relative to `now`: `Mon dd HH:MM` or `Mon dd  YYYY`.
    pub fn to_listing(&self, now: &DateTime<Local>) -> String {
        let recent = self.0 <= *now && *now - self.0 < Duration::seconds(Self::RECENT_WINDOW_SECS);
        if recent {
            self.0.format("%b %e %H:%M").to_string()
        } else {
            self.0.format("%b %e  %Y").to_string()
        }
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
