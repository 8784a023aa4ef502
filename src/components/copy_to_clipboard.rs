//! Copy button component
//! Forwards clicks to use_copy_to_clipboard and mirrors its copied/error state

use dioxus::prelude::*;

use crate::agent::{ClipboardError, ClipboardOptions};
use crate::components::icons::{AlertTriangleIcon, CheckIcon, CopyIcon};
use crate::hooks::use_copy_to_clipboard;

#[derive(Props, Clone, PartialEq)]
pub struct CopyToClipboardProps {
    /// Text placed on the clipboard when the button is pressed
    pub text: String,
    #[props(default)]
    pub options: ClipboardOptions,
    #[props(default = "Copy".to_string())]
    pub label: String,
    /// Label shown while the copied flag is set
    #[props(default = "Copied!".to_string())]
    pub copied_label: String,
    /// Additional button classes
    #[props(default = String::new())]
    pub class: String,
    #[props(default = "w-4 h-4".to_string())]
    pub icon_class: String,
    /// Called whenever a copy attempt fails
    #[props(default)]
    pub on_error: Option<EventHandler<ClipboardError>>,
}

#[component]
pub fn CopyToClipboard(props: CopyToClipboardProps) -> Element {
    let clipboard = use_copy_to_clipboard(props.options);
    let error_signal = clipboard.error;
    let on_error = props.on_error;

    use_effect(move || {
        if let Some(err) = error_signal.read().clone() {
            log::warn!("Copy to clipboard failed: {}", err);
            if let Some(handler) = on_error {
                handler.call(err);
            }
        }
    });

    let copied = *clipboard.copied.read();
    let error = clipboard.error.read().clone();
    let supported = clipboard.is_supported();

    let state_class = if copied {
        "text-green-500"
    } else if error.is_some() {
        "text-red-500"
    } else {
        "text-muted-foreground hover:text-foreground"
    };
    let button_class = format!(
        "inline-flex items-center gap-1 px-2 py-1.5 rounded transition hover:bg-accent disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        state_class, props.class
    );

    let title = match &error {
        Some(err) if err.is_permission_denied() => {
            "Clipboard access was blocked by the browser".to_string()
        }
        Some(err) => err.to_string(),
        None if !supported => "Clipboard is not available".to_string(),
        None => props.label.clone(),
    };

    let copy = clipboard.copy;
    let text = props.text.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{button_class}",
            title: "{title}",
            aria_label: "{props.label}",
            disabled: !supported,
            onclick: move |_| copy.call(text.clone()),
            if copied {
                CheckIcon { class: props.icon_class.clone() }
                span { "{props.copied_label}" }
            } else if error.is_some() {
                AlertTriangleIcon { class: props.icon_class.clone() }
                span { "{props.label}" }
            } else {
                CopyIcon { class: props.icon_class.clone() }
                span { "{props.label}" }
            }
        }
    }
}
