#![allow(non_snake_case)]

use copy_to_clipboard::{
    use_clipboard_binding, use_copy_to_clipboard, BindingOptions, ClipboardOptions, CopyToClipboard,
};
use dioxus::prelude::*;

const SNIPPET: &str = "cargo add copy-to-clipboard";

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting copy-to-clipboard demo");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut note = use_signal(|| "Hello from the clipboard".to_string());
    let clipboard = use_copy_to_clipboard(ClipboardOptions::new().duration_ms(1500).legacy(true));
    let snippet_id = use_clipboard_binding(Some(SNIPPET.to_string()), BindingOptions::default());

    let copy = clipboard.copy;
    let supported = clipboard.is_supported();
    let status = if *clipboard.copied.read() {
        "Copied".to_string()
    } else if let Some(err) = clipboard.error.read().as_ref() {
        err.to_string()
    } else {
        String::new()
    };

    rsx! {
        main { class: "max-w-xl mx-auto p-6 space-y-6",
            section { class: "space-y-2",
                h2 { class: "font-semibold", "Button" }
                CopyToClipboard {
                    text: note.read().clone(),
                    on_error: move |err| log::error!("Button copy failed: {}", err),
                }
            }

            section { class: "space-y-2",
                h2 { class: "font-semibold", "Hook" }
                input {
                    class: "w-full px-3 py-2 border rounded",
                    value: "{note}",
                    oninput: move |evt| note.set(evt.value()),
                }
                button {
                    class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg",
                    disabled: !supported,
                    onclick: move |_| copy.call(note.read().clone()),
                    "Copy note"
                }
                span { class: "ml-2 text-sm text-muted-foreground", "{status}" }
            }

            section { class: "space-y-2",
                h2 { class: "font-semibold", "Binding" }
                pre { id: "{snippet_id}", class: "p-3 bg-muted rounded cursor-pointer", "{SNIPPET}" }
            }
        }
    }
}
