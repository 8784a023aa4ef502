//! ClipboardAgent - copies text through the best mechanism the host offers
//!
//! The agent prefers the permission-gated async Clipboard API. When that API
//! is missing and `legacy` is enabled it falls back to a hidden textarea and
//! the synchronous copy command. Results are reported through two pulse
//! flags on an [`OutcomeSink`]:
//! - `copied` goes true on success and resets after `duration`
//! - `error` holds the latest failure and resets after `duration`
//!
//! `copy` never returns an error. Callers watch the flags instead.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::host::{ClipboardBackend, OffscreenEditable, PermissionName, PermissionState, Scheduler, TimerId};

mod config;
mod error;
mod outcome;

pub use config::{ClipboardOptions, OverlapPolicy, DEFAULT_DURATION_MS};
pub use error::ClipboardError;
pub use outcome::{CopyOutcome, OutcomeSink, SharedOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pulse {
    Copied,
    Error,
}

#[derive(Debug)]
struct PendingReset {
    token: u64,
    timer: TimerId,
    pulse: Pulse,
}

#[derive(Default)]
struct ResetTimers {
    next_token: u64,
    pending: Vec<PendingReset>,
}

/// Removes the offscreen element when dropped, on every exit path
struct OffscreenGuard(Box<dyn OffscreenEditable>);

impl Drop for OffscreenGuard {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Copies text to the clipboard and reports the outcome as pulse flags
///
/// Cloning is cheap and every clone shares the same state and timers.
#[derive(Clone)]
pub struct ClipboardAgent {
    backend: Rc<dyn ClipboardBackend>,
    scheduler: Rc<dyn Scheduler>,
    sink: Rc<dyn OutcomeSink>,
    options: ClipboardOptions,
    resets: Rc<RefCell<ResetTimers>>,
    disposed: Rc<Cell<bool>>,
}

impl ClipboardAgent {
    pub fn new(
        backend: Rc<dyn ClipboardBackend>,
        scheduler: Rc<dyn Scheduler>,
        sink: Rc<dyn OutcomeSink>,
        options: ClipboardOptions,
    ) -> Self {
        Self {
            backend,
            scheduler,
            sink,
            options,
            resets: Rc::new(RefCell::new(ResetTimers::default())),
            disposed: Rc::new(Cell::new(false)),
        }
    }

    /// True if the host exposes clipboard-write in a secure context
    pub fn is_clipboard_api_supported(&self) -> bool {
        self.backend.has_clipboard_write() && self.backend.has_secure_context()
    }

    /// True if a copy can be attempted at all
    pub fn is_supported(&self) -> bool {
        self.is_clipboard_api_supported() || self.options.legacy
    }

    /// Query a clipboard permission, treating any query failure as `Denied`
    pub async fn check_permission(&self, name: PermissionName) -> PermissionState {
        match self.backend.query_permission(name).await {
            Ok(state) => state,
            Err(e) => {
                log::error!("Error checking clipboard permission: {}", e);
                PermissionState::Denied
            }
        }
    }

    /// Copy `text`, recording success or failure in the outcome flags
    pub async fn copy(&self, text: &str) {
        if self.is_disposed() {
            log::warn!("Ignoring copy on a disposed clipboard agent");
            return;
        }

        if !self.is_clipboard_api_supported() && self.options.legacy {
            self.legacy_copy(text);
            return;
        }

        // A denied permission is final: legacy only covers a missing API
        let state = self.check_permission(PermissionName::ClipboardWrite).await;
        if !state.allows_write() {
            self.set_error(ClipboardError::PermissionDenied);
            return;
        }

        match self.backend.write_text(text).await {
            Ok(()) => {
                log::debug!("Copied {} chars to clipboard", text.chars().count());
                self.set_copy();
            }
            Err(e) => {
                log::error!("Failed to copy to clipboard: {}", e);
                self.set_error(e);
            }
        }
    }

    /// Spawn `copy` on the host event loop, for use from sync event handlers
    pub fn copy_detached(&self, text: impl Into<String>) {
        let agent = self.clone();
        let text = text.into();
        self.scheduler.spawn(Box::pin(async move {
            agent.copy(&text).await;
        }));
    }

    /// Copy through a hidden textarea and the synchronous copy command
    pub fn legacy_copy(&self, text: &str) {
        let editable = match self.backend.create_offscreen_editable() {
            Ok(editable) => OffscreenGuard(editable),
            Err(e) => {
                log::error!("Failed to prepare legacy copy: {}", e);
                self.set_error(e);
                return;
            }
        };

        editable.0.set_value(text);
        editable.0.select_all();

        match self.backend.exec_copy() {
            Ok(()) => self.set_copy(),
            Err(e) => {
                log::error!("Legacy copy failed: {}", e);
                self.set_error(e);
            }
        }
    }

    /// Cancel pending resets and ignore any later state changes
    pub fn dispose(&self) {
        self.disposed.set(true);
        let drained: Vec<PendingReset> = self.resets.borrow_mut().pending.drain(..).collect();
        for reset in drained {
            self.scheduler.cancel(reset.timer);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Reset timers that have not fired yet
    pub fn pending_resets(&self) -> usize {
        self.resets.borrow().pending.len()
    }

    fn set_copy(&self) {
        if self.is_disposed() {
            return;
        }
        self.sink.set_copied(true);
        self.schedule_reset(Pulse::Copied);
    }

    fn set_error(&self, error: ClipboardError) {
        if self.is_disposed() {
            return;
        }
        self.sink.set_error(Some(error));
        self.schedule_reset(Pulse::Error);
    }

    fn schedule_reset(&self, pulse: Pulse) {
        if self.options.overlap == OverlapPolicy::LatestWins {
            self.cancel_resets(pulse);
        }

        let token = {
            let mut resets = self.resets.borrow_mut();
            resets.next_token += 1;
            resets.next_token
        };

        let sink = Rc::clone(&self.sink);
        let resets = Rc::clone(&self.resets);
        let timer = self.scheduler.schedule(
            self.options.duration(),
            Box::new(move || {
                resets.borrow_mut().pending.retain(|r| r.token != token);
                match pulse {
                    Pulse::Copied => sink.set_copied(false),
                    Pulse::Error => sink.set_error(None),
                }
            }),
        );

        self.resets
            .borrow_mut()
            .pending
            .push(PendingReset { token, timer, pulse });
    }

    fn cancel_resets(&self, pulse: Pulse) {
        let cancelled: Vec<TimerId> = {
            let mut resets = self.resets.borrow_mut();
            let mut cancelled = Vec::new();
            resets.pending.retain(|r| {
                if r.pulse == pulse {
                    cancelled.push(r.timer);
                    false
                } else {
                    true
                }
            });
            cancelled
        };
        for timer in cancelled {
            self.scheduler.cancel(timer);
        }
    }
}
