//! Per-style callback id slots

use std::cell::Cell;

use crate::error::{InterstyleError, InterstyleResult};
use crate::event::{CallbackId, EventKind, NO_CALLBACK};

/// One callback id per event kind.
///
/// Slots are `Cell`s so a host callback may re-register ids on the style
/// that is currently dispatching to it.
#[derive(Debug)]
pub struct CallbackSlots {
    style: &'static str,
    supported: &'static [EventKind],
    ids: [Cell<CallbackId>; EventKind::COUNT],
}

impl CallbackSlots {
    /// Create empty slots for the given kinds
    pub fn new(style: &'static str, supported: &'static [EventKind]) -> Self {
        Self {
            style,
            supported,
            ids: Default::default(),
        }
    }

    /// Whether the style has a slot for `kind`
    pub fn supports(&self, kind: EventKind) -> bool {
        self.supported.contains(&kind)
    }

    /// Store `id` for `kind`, replacing any earlier id. `0` clears the slot.
    pub fn set(&self, kind: EventKind, id: CallbackId) -> InterstyleResult<()> {
        if !self.supports(kind) {
            return Err(InterstyleError::UnsupportedEvent {
                style: self.style,
                kind,
            });
        }
        self.ids[kind.index()].set(id);
        Ok(())
    }

    /// Registered id for `kind`, or `None` when the slot is empty
    pub fn get(&self, kind: EventKind) -> Option<CallbackId> {
        match self.ids[kind.index()].get() {
            NO_CALLBACK => None,
            id => Some(id),
        }
    }

    /// All non-empty slots in slot order
    pub fn registered(&self) -> Vec<(EventKind, CallbackId)> {
        EventKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|id| (kind, id)))
            .collect()
    }
}
