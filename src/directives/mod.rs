//! Element bindings that copy a value when the element is interacted with
//!
//! Dioxus has no template directives, so the binding attaches a plain DOM
//! listener to an element found by id. See [`crate::hooks::use_clipboard_binding`]
//! for the hook that manages the lifecycle from a component.

mod clipboard;
mod dom;

pub use clipboard::{BindingOptions, ClipboardDirective, ListenerHost};
pub use dom::{DomListener, DomListeners};
