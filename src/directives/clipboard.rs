use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::agent::{
    ClipboardAgent, ClipboardError, ClipboardOptions, CopyOutcome, SharedOutcome, DEFAULT_DURATION_MS,
};
use crate::host::{ClipboardBackend, Scheduler};

/// Options for a single element binding
///
/// Unlike [`ClipboardOptions`], legacy fallback is on by default here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingOptions {
    #[serde(rename = "duration")]
    pub duration_ms: u32,
    pub legacy: bool,
    /// DOM event that triggers the copy
    pub event: String,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            legacy: true,
            event: "click".to_string(),
        }
    }
}

impl BindingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    pub fn clipboard_options(&self) -> ClipboardOptions {
        ClipboardOptions::new()
            .duration_ms(self.duration_ms)
            .legacy(self.legacy)
    }
}

/// Attaches and detaches event listeners on host elements
pub trait ListenerHost {
    /// Handle keeping the listener alive until `unlisten`
    type Listener;

    fn listen(
        &self,
        element_id: &str,
        event: &str,
        handler: Box<dyn Fn()>,
    ) -> Result<Self::Listener, ClipboardError>;

    fn unlisten(&self, element_id: &str, event: &str, listener: Self::Listener);
}

struct Binding<T> {
    options: BindingOptions,
    value: Rc<RefCell<Option<String>>>,
    agent: ClipboardAgent,
    outcome: SharedOutcome,
    listener: T,
}

/// Owns the clipboard bindings of a set of elements, keyed by element id
pub struct ClipboardDirective<L: ListenerHost> {
    listeners: L,
    backend: Rc<dyn ClipboardBackend>,
    scheduler: Rc<dyn Scheduler>,
    bindings: RefCell<HashMap<String, Binding<L::Listener>>>,
}

impl<L: ListenerHost> ClipboardDirective<L> {
    pub fn new(listeners: L, backend: Rc<dyn ClipboardBackend>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            listeners,
            backend,
            scheduler,
            bindings: RefCell::new(HashMap::new()),
        }
    }

    /// Bind `element_id` so that `options.event` copies the current value
    ///
    /// An element that is already bound is unbound first.
    pub fn mounted(
        &self,
        element_id: &str,
        value: Option<String>,
        options: &BindingOptions,
    ) -> Result<(), ClipboardError> {
        self.before_unmount(element_id);

        let outcome = SharedOutcome::new();
        let agent = ClipboardAgent::new(
            Rc::clone(&self.backend),
            Rc::clone(&self.scheduler),
            Rc::new(outcome.clone()),
            options.clipboard_options(),
        );
        let value = Rc::new(RefCell::new(value));

        let handler = {
            let agent = agent.clone();
            let value = Rc::clone(&value);
            let element_id = element_id.to_string();
            Box::new(move || match value.borrow().as_ref() {
                Some(text) => agent.copy_detached(text.clone()),
                None => log::error!(
                    "clipboard binding #{}: no valid text provided for copying",
                    element_id
                ),
            })
        };

        let listener = match self.listeners.listen(element_id, &options.event, handler) {
            Ok(listener) => listener,
            Err(e) => {
                agent.dispose();
                return Err(e);
            }
        };

        log::debug!("Bound clipboard copy to #{} on '{}'", element_id, options.event);

        self.bindings.borrow_mut().insert(
            element_id.to_string(),
            Binding {
                options: options.clone(),
                value,
                agent,
                outcome,
                listener,
            },
        );
        Ok(())
    }

    /// Replace the value copied by an existing binding
    pub fn updated(&self, element_id: &str, value: Option<String>) -> bool {
        match self.bindings.borrow().get(element_id) {
            Some(binding) => {
                *binding.value.borrow_mut() = value;
                true
            }
            None => false,
        }
    }

    /// Detach the listener and dispose the binding's agent
    ///
    /// Returns false if the element was not bound.
    pub fn before_unmount(&self, element_id: &str) -> bool {
        let removed = self.bindings.borrow_mut().remove(element_id);
        match removed {
            Some(binding) => {
                binding.agent.dispose();
                self.listeners
                    .unlisten(element_id, &binding.options.event, binding.listener);
                true
            }
            None => false,
        }
    }

    pub fn is_bound(&self, element_id: &str) -> bool {
        self.bindings.borrow().contains_key(element_id)
    }

    /// Options an element was mounted with
    pub fn binding_options(&self, element_id: &str) -> Option<BindingOptions> {
        self.bindings
            .borrow()
            .get(element_id)
            .map(|binding| binding.options.clone())
    }

    pub fn outcome(&self, element_id: &str) -> Option<CopyOutcome> {
        self.bindings
            .borrow()
            .get(element_id)
            .map(|binding| binding.outcome.snapshot())
    }

    /// Unbind every element
    pub fn clear(&self) {
        let ids: Vec<String> = self.bindings.borrow().keys().cloned().collect();
        for id in ids {
            self.before_unmount(&id);
        }
    }
}
