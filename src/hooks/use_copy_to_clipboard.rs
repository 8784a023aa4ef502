//! use_copy_to_clipboard hook - reactive clipboard copy state for a component
//!
//! Wraps a [`ClipboardAgent`] on the browser host whose outcome flags are
//! Dioxus signals, so components re-render when a copy succeeds, fails or
//! resets.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::agent::{ClipboardAgent, ClipboardError, ClipboardOptions, OutcomeSink};
use crate::host::{LocalTask, WebClipboard, WebScheduler};

/// Outcome sink writing into component signals
struct SignalSink {
    copied: Signal<bool>,
    error: Signal<Option<ClipboardError>>,
}

impl OutcomeSink for SignalSink {
    fn set_copied(&self, copied: bool) {
        let mut signal = self.copied;
        signal.set(copied);
    }

    fn set_error(&self, error: Option<ClipboardError>) {
        let mut signal = self.error;
        signal.set(error);
    }
}

// Signals may only be written from inside the Dioxus runtime, so copies and
// resets run as tasks of the owning component
fn spawn_in_component(task: LocalTask) {
    spawn(task);
}

/// Return type for the use_copy_to_clipboard hook
#[derive(Clone)]
pub struct UseCopyToClipboard {
    /// True for `duration` after a successful copy
    pub copied: Signal<bool>,
    /// Latest failure, cleared after `duration`
    pub error: Signal<Option<ClipboardError>>,
    /// Copy the given text
    pub copy: EventHandler<String>,
    agent: ClipboardAgent,
}

impl UseCopyToClipboard {
    /// Whether a copy affordance should be offered at all
    pub fn is_supported(&self) -> bool {
        self.agent.is_supported()
    }
}

impl PartialEq for UseCopyToClipboard {
    fn eq(&self, other: &Self) -> bool {
        *self.copied.read() == *other.copied.read() && *self.error.read() == *other.error.read()
    }
}

/// Hook for copying text to the clipboard
///
/// # Example
/// ```rust,ignore
/// let clipboard = use_copy_to_clipboard(ClipboardOptions::new().legacy(true));
///
/// button {
///     disabled: !clipboard.is_supported(),
///     onclick: move |_| clipboard.copy.call("npub1...".to_string()),
///     if *clipboard.copied.read() { "Copied!" } else { "Copy" }
/// }
/// ```
pub fn use_copy_to_clipboard(options: ClipboardOptions) -> UseCopyToClipboard {
    let copied = use_signal(|| false);
    let error: Signal<Option<ClipboardError>> = use_signal(|| None);

    let agent = use_hook(move || {
        ClipboardAgent::new(
            Rc::new(WebClipboard::new()),
            Rc::new(WebScheduler::with_spawner(spawn_in_component)),
            Rc::new(SignalSink { copied, error }),
            options,
        )
    });

    // Pending resets must not write signals of an unmounted component
    let agent_for_drop = agent.clone();
    use_drop(move || agent_for_drop.dispose());

    let agent_for_copy = agent.clone();
    let copy = use_callback(move |text: String| {
        agent_for_copy.copy_detached(text);
    });

    UseCopyToClipboard {
        copied,
        error,
        copy,
        agent,
    }
}
