//! Copy text to the system clipboard from Dioxus web apps
//!
//! Three entry points share one [`ClipboardAgent`]:
//! - [`use_copy_to_clipboard`] hook with `copied` / `error` signals
//! - [`use_clipboard_binding`] to make any element copy on click
//! - [`CopyToClipboard`] button component
//!
//! The agent talks to the browser only through the [`host`] traits.

#![allow(non_snake_case)]

pub mod agent;
pub mod components;
pub mod directives;
pub mod hooks;
pub mod host;

pub use agent::{
    ClipboardAgent, ClipboardError, ClipboardOptions, CopyOutcome, OutcomeSink, OverlapPolicy,
    SharedOutcome,
};
pub use components::CopyToClipboard;
pub use directives::{BindingOptions, ClipboardDirective};
pub use hooks::{use_clipboard_binding, use_copy_to_clipboard, UseCopyToClipboard};
pub use host::{PermissionName, PermissionState};
