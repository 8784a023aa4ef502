use dioxus::prelude::*;
use std::rc::Rc;

use crate::directives::{BindingOptions, ClipboardDirective, DomListeners};
use crate::host::{WebClipboard, WebScheduler};

/// Bind a clipboard copy to any element of a component
///
/// Returns a unique id that must be assigned to the element. Once rendered,
/// the element copies `text` on `options.event`. A `None` text logs a usage
/// error on interaction instead of copying. Changing `options` rebinds the
/// element; changing only `text` keeps the existing listener.
///
/// # Example
/// ```rust,ignore
/// let code_id = use_clipboard_binding(Some(snippet.clone()), BindingOptions::default());
///
/// // In your rsx:
/// pre { id: "{code_id}", class: "cursor-pointer", "{snippet}" }
/// ```
pub fn use_clipboard_binding(text: Option<String>, options: BindingOptions) -> String {
    let element_id = use_hook(|| format!("clipboard-{}", uuid::Uuid::new_v4()));

    let directive = use_hook(|| {
        Rc::new(ClipboardDirective::new(
            DomListeners,
            Rc::new(WebClipboard::new()),
            Rc::new(WebScheduler::new()),
        ))
    });

    let directive_for_effect = directive.clone();
    let id_for_effect = element_id.clone();
    use_effect(use_reactive((&text, &options), move |(text, options)| {
        let same_options = directive_for_effect
            .binding_options(&id_for_effect)
            .is_some_and(|bound| bound == options);
        if same_options && directive_for_effect.updated(&id_for_effect, text.clone()) {
            return;
        }
        if let Err(e) = directive_for_effect.mounted(&id_for_effect, text, &options) {
            log::warn!("Failed to bind clipboard copy to #{}: {}", id_for_effect, e);
        }
    }));

    let id_for_drop = element_id.clone();
    use_drop(move || {
        directive.before_unmount(&id_for_drop);
    });

    element_id
}
