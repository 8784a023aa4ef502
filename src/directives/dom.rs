use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::ListenerHost;
use crate::agent::ClipboardError;
use crate::host::web::{document, js_message};

/// A live DOM listener: the element and the closure registered on it
pub struct DomListener {
    element: web_sys::Element,
    closure: Closure<dyn Fn()>,
}

/// Listener host for elements of the current document
#[derive(Debug, Clone, Copy, Default)]
pub struct DomListeners;

impl ListenerHost for DomListeners {
    type Listener = DomListener;

    fn listen(
        &self,
        element_id: &str,
        event: &str,
        handler: Box<dyn Fn()>,
    ) -> Result<DomListener, ClipboardError> {
        let element = document()?
            .get_element_by_id(element_id)
            .ok_or_else(|| ClipboardError::HostUnavailable(format!("element #{}", element_id)))?;

        let closure = Closure::wrap(handler);
        element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| ClipboardError::HostUnavailable(format!("listener on #{}: {}", element_id, js_message(&e))))?;

        Ok(DomListener { element, closure })
    }

    fn unlisten(&self, element_id: &str, event: &str, listener: DomListener) {
        if let Err(e) = listener
            .element
            .remove_event_listener_with_callback(event, listener.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove '{}' listener from #{}: {:?}", event, element_id, e);
        }
        // Dropping the closure frees the JS function
    }
}
