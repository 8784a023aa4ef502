//! In-memory host for tests
//!
//! `MockBackend` answers from scripted values and records every call.
//! `ManualScheduler` keeps a virtual clock that only moves on `advance`.

use async_trait::async_trait;
use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use super::{
    ClipboardBackend, LocalTask, OffscreenEditable, PermissionName, PermissionState, Scheduler,
    TimerId,
};
use crate::agent::ClipboardError;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    QueryPermission(PermissionName),
    WriteText(String),
    CreateEditable,
    SetValue(String),
    SelectAll,
    ExecCopy,
    RemoveEditable,
}

pub struct MockBackend {
    pub secure_context: Cell<bool>,
    pub clipboard_write: Cell<bool>,
    pub permission: RefCell<Result<PermissionState, ClipboardError>>,
    pub write_result: RefCell<Result<(), ClipboardError>>,
    pub create_result: RefCell<Result<(), ClipboardError>>,
    pub exec_result: RefCell<Result<(), ClipboardError>>,
    calls: Rc<RefCell<Vec<Call>>>,
    live_editables: Rc<Cell<usize>>,
}

impl MockBackend {
    /// Secure context, Clipboard API present, permission granted
    pub fn supported() -> Self {
        Self {
            secure_context: Cell::new(true),
            clipboard_write: Cell::new(true),
            permission: RefCell::new(Ok(PermissionState::Granted)),
            write_result: RefCell::new(Ok(())),
            create_result: RefCell::new(Ok(())),
            exec_result: RefCell::new(Ok(())),
            calls: Rc::new(RefCell::new(Vec::new())),
            live_editables: Rc::new(Cell::new(0)),
        }
    }

    /// No Clipboard API and an insecure context
    pub fn unsupported() -> Self {
        let backend = Self::supported();
        backend.secure_context.set(false);
        backend.clipboard_write.set(false);
        backend
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn queried_permission(&self) -> bool {
        self.calls().iter().any(|c| matches!(c, Call::QueryPermission(_)))
    }

    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::WriteText(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Offscreen elements created but not yet removed
    pub fn live_editables(&self) -> usize {
        self.live_editables.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ClipboardBackend for MockBackend {
    fn has_secure_context(&self) -> bool {
        self.secure_context.get()
    }

    fn has_clipboard_write(&self) -> bool {
        self.clipboard_write.get()
    }

    async fn query_permission(&self, name: PermissionName) -> Result<PermissionState, ClipboardError> {
        self.record(Call::QueryPermission(name));
        self.permission.borrow().clone()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.record(Call::WriteText(text.to_string()));
        self.write_result.borrow().clone()
    }

    fn create_offscreen_editable(&self) -> Result<Box<dyn OffscreenEditable>, ClipboardError> {
        self.record(Call::CreateEditable);
        self.create_result.borrow().clone()?;
        self.live_editables.set(self.live_editables.get() + 1);
        Ok(Box::new(MockEditable {
            calls: Rc::clone(&self.calls),
            live_editables: Rc::clone(&self.live_editables),
        }))
    }

    fn exec_copy(&self) -> Result<(), ClipboardError> {
        self.record(Call::ExecCopy);
        self.exec_result.borrow().clone()
    }
}

struct MockEditable {
    calls: Rc<RefCell<Vec<Call>>>,
    live_editables: Rc<Cell<usize>>,
}

impl OffscreenEditable for MockEditable {
    fn set_value(&self, text: &str) {
        self.calls.borrow_mut().push(Call::SetValue(text.to_string()));
    }

    fn select_all(&self) {
        self.calls.borrow_mut().push(Call::SelectAll);
    }

    fn remove(&self) {
        self.calls.borrow_mut().push(Call::RemoveEditable);
        self.live_editables.set(self.live_editables.get().saturating_sub(1));
    }
}

struct PendingTimer {
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Virtual-clock scheduler
///
/// Timers fire in deadline order (ties in scheduling order) when the clock is
/// advanced past them. Spawned tasks run on a `LocalPool` during
/// `run_until_stalled`.
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<BTreeMap<TimerId, PendingTimer>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    scheduled_total: Cell<usize>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            now: Cell::new(Duration::ZERO),
            next_id: Cell::new(0),
            timers: RefCell::new(BTreeMap::new()),
            pool: RefCell::new(pool),
            spawner,
            scheduled_total: Cell::new(0),
        }
    }

    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Timers ever scheduled, including fired and cancelled ones
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total.get()
    }

    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let due = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= target)
                    .min_by_key(|(id, t)| (t.deadline, **id))
                    .map(|(id, _)| *id)
            };
            let Some(id) = due else { break };
            let Some(timer) = self.timers.borrow_mut().remove(&id) else { break };
            self.now.set(timer.deadline);
            (timer.callback)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.scheduled_total.set(self.scheduled_total.get() + 1);
        self.timers.borrow_mut().insert(
            id,
            PendingTimer {
                deadline: self.now.get() + delay,
                callback,
            },
        );
        id
    }

    fn cancel(&self, id: TimerId) {
        self.timers.borrow_mut().remove(&id);
    }

    fn spawn(&self, task: LocalTask) {
        if let Err(e) = self.spawner.spawn_local(task) {
            panic!("failed to spawn task: {:?}", e);
        }
    }
}
