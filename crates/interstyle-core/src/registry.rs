//! Host-side callback registry
//!
//! Maps integer ids to Rust closures so a Rust host can hand ids to a style
//! and have them resolved again when the style fires its trampolines. A
//! registry is an ordinary value: share it between styles with `Rc`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::capability::CallbackInvoker;
use crate::event::{ActorHandle, CallbackId, DevicePosition, EventKind};

type PositionCallback = Rc<dyn Fn(DevicePosition)>;
type ActorCallback = Rc<dyn Fn(DevicePosition, Option<ActorHandle>)>;
type KeyCallback = Rc<dyn Fn(&str) -> bool>;

enum Entry {
    Position(EventKind, PositionCallback),
    Actor(EventKind, ActorCallback),
    Key(KeyCallback),
}

/// Registry of host closures addressed by [`CallbackId`]
pub struct CallbackRegistry {
    next_id: Cell<CallbackId>,
    entries: RefCell<HashMap<CallbackId, Entry>>,
}

impl CallbackRegistry {
    /// Create an empty registry; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            entries: RefCell::new(HashMap::new()),
        }
    }

    fn allocate(&self, entry: Entry) -> CallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().insert(id, entry);
        id
    }

    /// Register a position callback for a pointer event kind
    pub fn register_position<F>(&self, kind: EventKind, callback: F) -> CallbackId
    where
        F: Fn(DevicePosition) + 'static,
    {
        self.allocate(Entry::Position(kind, Rc::new(callback)))
    }

    /// Register an actor-aware callback for a pointer event kind
    pub fn register_actor<F>(&self, kind: EventKind, callback: F) -> CallbackId
    where
        F: Fn(DevicePosition, Option<ActorHandle>) + 'static,
    {
        self.allocate(Entry::Actor(kind, Rc::new(callback)))
    }

    /// Register a key callback; it returns `true` to consume the key
    pub fn register_key<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.allocate(Entry::Key(Rc::new(callback)))
    }

    /// Remove a callback; returns whether it was registered
    pub fn unregister(&self, id: CallbackId) -> bool {
        self.entries.borrow_mut().remove(&id).is_some()
    }

    pub fn contains(&self, id: CallbackId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    // Closures are cloned out so they can re-enter the registry.
    fn position_callback(&self, kind: EventKind, id: CallbackId) -> Option<PositionCallback> {
        match self.entries.borrow().get(&id) {
            Some(Entry::Position(registered, callback)) if *registered == kind => {
                Some(Rc::clone(callback))
            }
            _ => None,
        }
    }

    fn actor_callback(&self, kind: EventKind, id: CallbackId) -> Option<ActorCallback> {
        match self.entries.borrow().get(&id) {
            Some(Entry::Actor(registered, callback)) if *registered == kind => {
                Some(Rc::clone(callback))
            }
            _ => None,
        }
    }

    fn key_callback(&self, id: CallbackId) -> Option<KeyCallback> {
        match self.entries.borrow().get(&id) {
            Some(Entry::Key(callback)) => Some(Rc::clone(callback)),
            _ => None,
        }
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("next_id", &self.next_id.get())
            .field("len", &self.len())
            .finish()
    }
}

impl CallbackInvoker for CallbackRegistry {
    fn invoke_position(&self, kind: EventKind, id: CallbackId, position: DevicePosition) {
        if let Some(callback) = self.position_callback(kind, id) {
            callback(position);
        }
    }

    fn invoke_with_actor(
        &self,
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
        actor: Option<ActorHandle>,
    ) {
        if let Some(callback) = self.actor_callback(kind, id) {
            callback(position, actor);
        }
    }

    fn invoke_key(&self, id: CallbackId, key: &str) -> bool {
        self.key_callback(id).map(|callback| callback(key)).unwrap_or(false)
    }
}
