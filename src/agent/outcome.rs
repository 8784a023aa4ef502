//! Observable copy state
//!
//! The agent never owns its state directly. It writes through an
//! [`OutcomeSink`], which lets the hook back the flags with Dioxus signals
//! while the directive and tests use a plain shared cell.

use std::cell::RefCell;
use std::rc::Rc;

use super::ClipboardError;

/// Snapshot of the two pulse flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyOutcome {
    pub copied: bool,
    pub error: Option<ClipboardError>,
}

/// Receives state changes from a `ClipboardAgent`
pub trait OutcomeSink {
    fn set_copied(&self, copied: bool);
    fn set_error(&self, error: Option<ClipboardError>);
}

/// `OutcomeSink` backed by a shared `RefCell`
#[derive(Debug, Clone, Default)]
pub struct SharedOutcome {
    inner: Rc<RefCell<CopyOutcome>>,
}

impl SharedOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CopyOutcome {
        self.inner.borrow().clone()
    }

    pub fn copied(&self) -> bool {
        self.inner.borrow().copied
    }

    pub fn error(&self) -> Option<ClipboardError> {
        self.inner.borrow().error.clone()
    }
}

impl OutcomeSink for SharedOutcome {
    fn set_copied(&self, copied: bool) {
        self.inner.borrow_mut().copied = copied;
    }

    fn set_error(&self, error: Option<ClipboardError>) {
        self.inner.borrow_mut().error = error;
    }
}
