//! Agent configuration
//!
//! `ClipboardOptions` can be built in code or deserialized from JSON:
//!
//! ```
//! use copy_to_clipboard::ClipboardOptions;
//!
//! let options = ClipboardOptions::new().duration_ms(2000).legacy(true);
//! assert_eq!(options.duration().as_millis(), 2000);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default auto-reset delay for the `copied` and `error` flags
pub const DEFAULT_DURATION_MS: u32 = 1000;

/// How overlapping copies treat reset timers that are still pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Every pulse schedules its own reset and none are cancelled.
    /// An earlier timer can clear a flag that a later copy just set.
    #[default]
    Independent,
    /// A new pulse cancels pending resets of the same flag
    LatestWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardOptions {
    /// Milliseconds before `copied` and `error` reset. 0 means the default.
    #[serde(rename = "duration")]
    pub duration_ms: u32,
    /// Allow the textarea + copy command fallback when the Clipboard API is missing
    pub legacy: bool,
    pub overlap: OverlapPolicy,
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            legacy: false,
            overlap: OverlapPolicy::Independent,
        }
    }
}

impl ClipboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Effective reset delay
    pub fn duration(&self) -> Duration {
        let ms = if self.duration_ms == 0 {
            DEFAULT_DURATION_MS
        } else {
            self.duration_ms
        };
        Duration::from_millis(u64::from(ms))
    }
}
