//! Image interaction style
//!
//! Bridges mouse and keyboard events for 2-D image viewing. On top of the
//! plain "callback, then engine default" routing it adds:
//!
//! - rubber-band selection: while a drag is in progress the engine's
//!   left-button and move handling (window/level, camera) is suppressed
//! - key interception: the key callback can consume a key so the engine
//!   never sees it, and a redraw is requested after every key event

use std::rc::Rc;

use crate::capability::{CallbackInvoker, DefaultBehavior, EventHandler, Interactor};
use crate::config::StyleConfig;
use crate::error::InterstyleResult;
use crate::event::{CallbackId, EngineEvent, EventKind};
use crate::selection::{SelectionRect, SelectionTracker};
use crate::style::{SelectionSnapshot, StyleCore, StyleSnapshot};

const CLASS_NAME: &str = "InteractorStyleImage";

const SUPPORTED: &[EventKind] = &EventKind::ALL;

/// Callback-routing image interactor style
#[derive(Debug)]
pub struct ImageInteractorStyle {
    core: StyleCore,
    selection: SelectionTracker,
    redraw_after_key: bool,
}

impl ImageInteractorStyle {
    /// Create a style with default configuration
    pub fn new(invoker: Rc<dyn CallbackInvoker>, defaults: Rc<dyn DefaultBehavior>) -> Self {
        Self::with_config(invoker, defaults, &StyleConfig::default())
    }

    pub fn with_config(
        invoker: Rc<dyn CallbackInvoker>,
        defaults: Rc<dyn DefaultBehavior>,
        config: &StyleConfig,
    ) -> Self {
        Self {
            core: StyleCore::new(CLASS_NAME, SUPPORTED, invoker, defaults),
            selection: SelectionTracker::new(config.selection_mode),
            redraw_after_key: config.redraw_after_key,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.core.class_name()
    }

    pub fn is_a(&self, name: &str) -> bool {
        self.core.is_a(name)
    }

    // Attachment

    pub fn set_interactor(&self, interactor: Option<Rc<dyn Interactor>>) {
        self.core.set_interactor(interactor);
    }

    pub fn is_attached(&self) -> bool {
        self.core.is_attached()
    }

    // Callback registration

    /// Register `id` for `kind`; `0` unregisters. Every kind has a slot.
    pub fn set_callback_id(&self, kind: EventKind, id: CallbackId) -> InterstyleResult<()> {
        self.core.set_callback_id(kind, id)
    }

    pub fn callback_id(&self, kind: EventKind) -> Option<CallbackId> {
        self.core.slots().get(kind)
    }

    // Selection

    pub fn set_selection_mode(&self, enabled: bool) {
        self.selection.set_selection_mode(enabled);
        tracing::debug!(enabled, "image style selection mode");
    }

    pub fn selection_mode(&self) -> bool {
        self.selection.selection_mode()
    }

    pub fn is_moving(&self) -> bool {
        self.selection.is_moving()
    }

    /// Current or most recent rubber band
    pub fn selection_rect(&self) -> SelectionRect {
        self.selection.rect()
    }

    /// `(start_x, start_y, end_x, end_y)` of the rubber band
    pub fn selection_positions(&self) -> (i32, i32, i32, i32) {
        self.selection.rect().positions()
    }

    /// Anchor a rubber band at the current event position.
    ///
    /// No-op while detached.
    pub fn start_select(&self) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        let position = interactor.event_position();
        self.selection.start(position);
        tracing::debug!(x = position.x, y = position.y, "selection started");
    }

    pub fn end_select(&self) {
        self.selection.end();
        let (sx, sy, ex, ey) = self.selection_positions();
        tracing::debug!(sx, sy, ex, ey, "selection ended");
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        self.core.snapshot(Some(SelectionSnapshot {
            selection_mode: self.selection.selection_mode(),
            moving: self.selection.is_moving(),
            rect: self.selection.rect(),
        }))
    }

    /// JSON description of the style state
    pub fn describe(&self) -> String {
        self.snapshot().to_json()
    }

    fn handle_key(&self, fallback: EngineEvent) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        if !self.core.notify_key(interactor.as_ref()) {
            self.core.delegate(fallback);
        }
        if self.redraw_after_key {
            interactor.render();
        }
    }
}

impl EventHandler for ImageInteractorStyle {
    fn on_left_button_down(&self) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        if self.selection.selection_mode() {
            self.start_select();
        }
        self.core
            .notify_position(EventKind::LeftPress, interactor.as_ref());
        if !self.selection.is_moving() {
            self.core.delegate(EngineEvent::LeftButtonDown);
        }
    }

    fn on_left_button_up(&self) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        if self.selection.is_moving() {
            self.end_select();
        }
        self.core
            .notify_position(EventKind::LeftRelease, interactor.as_ref());
        // Ending the drag cleared the flag, so the release reaches the engine
        // unless a callback started a new drag.
        if !self.selection.is_moving() {
            self.core.delegate(EngineEvent::LeftButtonUp);
        }
    }

    fn on_mouse_move(&self) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        if self.selection.is_moving() {
            self.selection.update_end(interactor.event_position());
        }
        self.core
            .notify_position(EventKind::MouseMove, interactor.as_ref());
        if !self.selection.is_moving() {
            self.core.delegate(EngineEvent::MouseMove);
        }
    }

    fn on_middle_button_down(&self) {
        self.core.forward_button(EngineEvent::MiddleButtonDown);
    }

    fn on_middle_button_up(&self) {
        self.core.forward_button(EngineEvent::MiddleButtonUp);
    }

    fn on_right_button_down(&self) {
        self.core.forward_button(EngineEvent::RightButtonDown);
    }

    fn on_right_button_up(&self) {
        self.core.forward_button(EngineEvent::RightButtonUp);
    }

    fn on_char(&self) {
        self.handle_key(EngineEvent::Char);
    }

    fn on_key_press(&self) {
        self.handle_key(EngineEvent::KeyPress);
    }
}
