//! Interactor styles
//!
//! Two styles route engine events to host callbacks:
//!
//! - [`ImageInteractorStyle`]: 2-D image viewing with rubber-band selection
//!   and key interception
//! - [`TrackballActorStyle`]: direct actor manipulation that reports the
//!   actor under the pointer
//!
//! Both are built on [`StyleCore`], which owns the callback slots, the
//! injected capabilities and the (optional) interactor attachment.

mod image;
mod trackball_actor;

pub use image::ImageInteractorStyle;
pub use trackball_actor::TrackballActorStyle;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::capability::{CallbackInvoker, DefaultBehavior, Interactor};
use crate::error::InterstyleResult;
use crate::event::{CallbackId, EngineEvent, EventKind};
use crate::selection::SelectionRect;
use crate::slots::CallbackSlots;

/// Engine base-class name every style answers to in `is_a`
pub const BASE_CLASS_NAME: &str = "InteractorStyle";

/// Serializable view of a style, in place of the engine's `PrintSelf`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    pub class_name: String,
    pub attached: bool,
    pub callbacks: Vec<RegisteredCallback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionSnapshot>,
}

/// A non-empty callback slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCallback {
    pub kind: EventKind,
    pub id: CallbackId,
}

/// Rubber-band state of an image style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub selection_mode: bool,
    pub moving: bool,
    pub rect: SelectionRect,
}

impl StyleSnapshot {
    /// Pretty JSON rendering
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.class_name.clone())
    }
}

/// State and capabilities shared by every style
pub struct StyleCore {
    class_name: &'static str,
    slots: CallbackSlots,
    invoker: Rc<dyn CallbackInvoker>,
    defaults: Rc<dyn DefaultBehavior>,
    interactor: RefCell<Option<Rc<dyn Interactor>>>,
}

impl StyleCore {
    pub fn new(
        class_name: &'static str,
        supported: &'static [EventKind],
        invoker: Rc<dyn CallbackInvoker>,
        defaults: Rc<dyn DefaultBehavior>,
    ) -> Self {
        Self {
            class_name,
            slots: CallbackSlots::new(class_name, supported),
            invoker,
            defaults,
            interactor: RefCell::new(None),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Type-name query in the engine's manner
    pub fn is_a(&self, name: &str) -> bool {
        name == self.class_name || name == BASE_CLASS_NAME
    }

    pub fn slots(&self) -> &CallbackSlots {
        &self.slots
    }

    pub fn invoker(&self) -> &dyn CallbackInvoker {
        self.invoker.as_ref()
    }

    pub fn set_callback_id(&self, kind: EventKind, id: CallbackId) -> InterstyleResult<()> {
        self.slots.set(kind, id)
    }

    /// Attach to (or with `None`, detach from) an engine interactor
    pub fn set_interactor(&self, interactor: Option<Rc<dyn Interactor>>) {
        let attached = interactor.is_some();
        *self.interactor.borrow_mut() = interactor;
        if attached {
            tracing::debug!("{} attached to interactor", self.class_name);
        } else {
            tracing::debug!("{} detached from interactor", self.class_name);
        }
    }

    /// The attached interactor, cloned out so handlers can run re-entrantly
    pub fn interactor(&self) -> Option<Rc<dyn Interactor>> {
        self.interactor.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.interactor.borrow().is_some()
    }

    /// Fire the position trampoline for `kind` if a callback is registered
    pub fn notify_position(&self, kind: EventKind, interactor: &dyn Interactor) {
        if let Some(id) = self.slots.get(kind) {
            let position = interactor.event_position();
            tracing::trace!(%kind, id, x = position.x, y = position.y, "position callback");
            self.invoker.invoke_position(kind, id, position);
        }
    }

    /// Fire the key trampoline; `false` when nothing consumed the key
    pub fn notify_key(&self, interactor: &dyn Interactor) -> bool {
        let Some(id) = self.slots.get(EventKind::KeyPress) else {
            return false;
        };
        let Some(key) = interactor.key_sym() else {
            return false;
        };
        let consumed = self.invoker.invoke_key(id, &key);
        tracing::trace!(id, key = key.as_str(), consumed, "key callback");
        consumed
    }

    /// Hand the event to the engine's stock behavior
    pub fn delegate(&self, event: EngineEvent) {
        self.defaults.perform(event);
    }

    /// Position-callback-then-default pattern used by the buttons no style
    /// gates
    pub fn forward_button(&self, event: EngineEvent) {
        let Some(interactor) = self.interactor() else {
            return;
        };
        self.notify_position(event.callback_kind(), interactor.as_ref());
        self.delegate(event);
    }

    fn registered_callbacks(&self) -> Vec<RegisteredCallback> {
        self.slots
            .registered()
            .into_iter()
            .map(|(kind, id)| RegisteredCallback { kind, id })
            .collect()
    }

    pub fn snapshot(&self, selection: Option<SelectionSnapshot>) -> StyleSnapshot {
        StyleSnapshot {
            class_name: self.class_name.to_string(),
            attached: self.is_attached(),
            callbacks: self.registered_callbacks(),
            selection,
        }
    }
}

impl fmt::Debug for StyleCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleCore")
            .field("class_name", &self.class_name)
            .field("slots", &self.slots)
            .field("attached", &self.is_attached())
            .finish()
    }
}
