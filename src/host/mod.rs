//! Host capability interface
//!
//! The agent never touches `window`, `navigator` or `document` itself. It goes
//! through these traits so the logic runs without a browser and other hosts
//! can plug in their own clipboard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::agent::ClipboardError;

pub mod web;

#[cfg(test)]
pub(crate) mod mock;

pub use web::{WebClipboard, WebScheduler};

/// Permissions the clipboard probe can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionName {
    ClipboardRead,
    ClipboardWrite,
}

impl PermissionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClipboardRead => "clipboard-read",
            Self::ClipboardWrite => "clipboard-write",
        }
    }
}

/// Answer of a permission probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    /// `prompt` still lets the write go ahead; the browser asks the user then
    pub fn allows_write(&self) -> bool {
        matches!(self, Self::Granted | Self::Prompt)
    }
}

/// Clipboard side of the host environment
#[async_trait(?Send)]
pub trait ClipboardBackend {
    /// Whether the page runs in a secure (trusted) context
    fn has_secure_context(&self) -> bool;

    /// Whether an async clipboard-write API is exposed at all
    fn has_clipboard_write(&self) -> bool;

    async fn query_permission(&self, name: PermissionName) -> Result<PermissionState, ClipboardError>;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Insert a hidden editable element used by the legacy copy path
    fn create_offscreen_editable(&self) -> Result<Box<dyn OffscreenEditable>, ClipboardError>;

    /// Copy the current selection synchronously
    fn exec_copy(&self) -> Result<(), ClipboardError>;
}

/// Hidden element holding the text for the legacy copy command
pub trait OffscreenEditable {
    fn set_value(&self, text: &str);
    fn select_all(&self);
    /// Detach the element from the document
    fn remove(&self);
}

/// Future run to completion on the host's event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Timers and task spawning of the host event loop
pub trait Scheduler {
    /// Run `callback` once after `delay`
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&self, id: TimerId);

    fn spawn(&self, task: LocalTask);
}
