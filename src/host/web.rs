//! Browser host built on web-sys
//!
//! Uses the async Clipboard API (`navigator.clipboard.writeText`) gated by the
//! Permissions API, and `document.execCommand("copy")` on a hidden textarea
//! for the legacy path.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{
    ClipboardBackend, LocalTask, OffscreenEditable, PermissionName, PermissionState, Scheduler,
    TimerId,
};
use crate::agent::ClipboardError;

/// Extract a readable message from a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, ClipboardError> {
    web_sys::window().ok_or_else(|| ClipboardError::HostUnavailable("window".to_string()))
}

pub(crate) fn document() -> Result<web_sys::Document, ClipboardError> {
    window()?
        .document()
        .ok_or_else(|| ClipboardError::HostUnavailable("document".to_string()))
}

/// Map the result of `execCommand("copy")`; a `false` return is a rejection
fn copy_command_outcome(result: Result<bool, String>) -> Result<(), ClipboardError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::LegacyCopyFailed(
            "copy command was rejected".to_string(),
        )),
        Err(message) => Err(ClipboardError::LegacyCopyFailed(message)),
    }
}

/// Clipboard access through the page's `window`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebClipboard;

impl WebClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ClipboardBackend for WebClipboard {
    fn has_secure_context(&self) -> bool {
        web_sys::window()
            .map(|w| w.is_secure_context())
            .unwrap_or(false)
    }

    fn has_clipboard_write(&self) -> bool {
        // `navigator.clipboard` is undefined outside secure contexts
        web_sys::window()
            .map(|w| {
                js_sys::Reflect::has(w.navigator().as_ref(), &JsValue::from_str("clipboard"))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    async fn query_permission(&self, name: PermissionName) -> Result<PermissionState, ClipboardError> {
        let query_failed = |e: JsValue| ClipboardError::PermissionQueryFailed(js_message(&e));

        let permissions = window()?.navigator().permissions().map_err(query_failed)?;

        let descriptor = js_sys::Object::new();
        js_sys::Reflect::set(
            &descriptor,
            &JsValue::from_str("name"),
            &JsValue::from_str(name.as_str()),
        )
        .map_err(query_failed)?;

        let promise = permissions.query(&descriptor).map_err(query_failed)?;
        let status = JsFuture::from(promise)
            .await
            .map_err(query_failed)?
            .dyn_into::<web_sys::PermissionStatus>()
            .map_err(query_failed)?;

        Ok(match status.state() {
            web_sys::PermissionState::Granted => PermissionState::Granted,
            web_sys::PermissionState::Prompt => PermissionState::Prompt,
            _ => PermissionState::Denied,
        })
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = window()?.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::WriteFailed(js_message(&e)))
    }

    fn create_offscreen_editable(&self) -> Result<Box<dyn OffscreenEditable>, ClipboardError> {
        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::HostUnavailable("document body".to_string()))?;

        let legacy_failed = |e: JsValue| ClipboardError::LegacyCopyFailed(js_message(&e));

        let textarea = document
            .create_element("textarea")
            .map_err(legacy_failed)?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::LegacyCopyFailed("created element is not a textarea".to_string()))?;

        // Keep it out of the viewport so it never flashes on screen
        let style = textarea.style();
        style.set_property("position", "absolute").map_err(legacy_failed)?;
        style.set_property("left", "-999999px").map_err(legacy_failed)?;

        body.append_child(&textarea).map_err(legacy_failed)?;

        Ok(Box::new(WebOffscreenEditable { textarea }))
    }

    fn exec_copy(&self) -> Result<(), ClipboardError> {
        let document = document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| ClipboardError::HostUnavailable("HTML document".to_string()))?;

        copy_command_outcome(document.exec_command("copy").map_err(|e| js_message(&e)))
    }
}

struct WebOffscreenEditable {
    textarea: web_sys::HtmlTextAreaElement,
}

impl OffscreenEditable for WebOffscreenEditable {
    fn set_value(&self, text: &str) {
        self.textarea.set_value(text);
    }

    fn select_all(&self) {
        self.textarea.select();
    }

    fn remove(&self) {
        self.textarea.remove();
    }
}

/// Scheduler running on the browser event loop
///
/// Timers are `gloo_timers` futures run through the scheduler's spawner. A
/// cancelled timer still wakes up but finds its id gone and skips the
/// callback.
#[derive(Debug, Clone)]
pub struct WebScheduler {
    spawner: fn(LocalTask),
    next_id: Rc<Cell<u64>>,
    live: Rc<RefCell<HashSet<u64>>>,
}

impl Default for WebScheduler {
    fn default() -> Self {
        Self::with_spawner(wasm_bindgen_futures::spawn_local)
    }
}

impl WebScheduler {
    /// Spawn on the bare browser event loop
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn through a custom executor, e.g. a UI framework's task system
    pub fn with_spawner(spawner: fn(LocalTask)) -> Self {
        Self {
            spawner,
            next_id: Rc::new(Cell::new(0)),
            live: Rc::new(RefCell::new(HashSet::new())),
        }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id);

        let live = Rc::clone(&self.live);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        (self.spawner)(Box::pin(async move {
            TimeoutFuture::new(millis).await;
            let still_live = live.borrow_mut().remove(&id);
            if still_live {
                callback();
            }
        }));

        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        self.live.borrow_mut().remove(&id.0);
    }

    fn spawn(&self, task: LocalTask) {
        (self.spawner)(task);
    }
}
