//! Trackball-actor interaction style
//!
//! Direct manipulation of actors (rotate, spin, pan, dolly, scale) stays
//! with the engine. The style only reports events to the host, and for
//! left-button and move events it also reports which actor is under the
//! pointer. The engine default always runs afterwards; nothing in this
//! style suppresses manipulation.

use std::rc::Rc;

use crate::capability::{
    CallbackInvoker, DefaultBehavior, EventHandler, Interactor, PickingService,
};
use crate::config::StyleConfig;
use crate::error::InterstyleResult;
use crate::event::{ActorHandle, CallbackId, DevicePosition, EngineEvent, EventKind};
use crate::style::{StyleCore, StyleSnapshot};

const CLASS_NAME: &str = "InteractorStyleTrackballActor";

const SUPPORTED: &[EventKind] = &[
    EventKind::LeftPress,
    EventKind::LeftRelease,
    EventKind::RightPress,
    EventKind::RightRelease,
    EventKind::MiddlePress,
    EventKind::MiddleRelease,
    EventKind::MouseMove,
];

/// Callback-routing trackball-actor interactor style
pub struct TrackballActorStyle {
    core: StyleCore,
    picker: Rc<dyn PickingService>,
    pick_on_move: bool,
}

impl TrackballActorStyle {
    pub fn new(
        invoker: Rc<dyn CallbackInvoker>,
        defaults: Rc<dyn DefaultBehavior>,
        picker: Rc<dyn PickingService>,
    ) -> Self {
        Self::with_config(invoker, defaults, picker, &StyleConfig::default())
    }

    pub fn with_config(
        invoker: Rc<dyn CallbackInvoker>,
        defaults: Rc<dyn DefaultBehavior>,
        picker: Rc<dyn PickingService>,
        config: &StyleConfig,
    ) -> Self {
        Self {
            core: StyleCore::new(CLASS_NAME, SUPPORTED, invoker, defaults),
            picker,
            pick_on_move: config.pick_on_move,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.core.class_name()
    }

    pub fn is_a(&self, name: &str) -> bool {
        self.core.is_a(name)
    }

    pub fn set_interactor(&self, interactor: Option<Rc<dyn Interactor>>) {
        self.core.set_interactor(interactor);
    }

    pub fn is_attached(&self) -> bool {
        self.core.is_attached()
    }

    /// Register `id` for `kind`; `0` unregisters.
    ///
    /// Fails for [`EventKind::KeyPress`], which this style has no slot for.
    pub fn set_callback_id(&self, kind: EventKind, id: CallbackId) -> InterstyleResult<()> {
        self.core.set_callback_id(kind, id)
    }

    pub fn callback_id(&self, kind: EventKind) -> Option<CallbackId> {
        self.core.slots().get(kind)
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        self.core.snapshot(None)
    }

    pub fn describe(&self) -> String {
        self.snapshot().to_json()
    }

    /// Actor under `position` in the first renderer.
    ///
    /// No renderer, no hit, or a hit on a non-actor prop all give `None`.
    fn pick_actor(
        &self,
        position: DevicePosition,
        interactor: &dyn Interactor,
    ) -> Option<ActorHandle> {
        let renderer = interactor.first_renderer()?;
        self.picker.pick(position, renderer)?.as_actor()
    }

    fn notify_with_actor(&self, kind: EventKind, interactor: &dyn Interactor) {
        let Some(id) = self.core.slots().get(kind) else {
            return;
        };
        let position = interactor.event_position();
        let actor = if kind == EventKind::MouseMove && !self.pick_on_move {
            None
        } else {
            self.pick_actor(position, interactor)
        };
        tracing::trace!(
            %kind,
            id,
            x = position.x,
            y = position.y,
            actor = actor.map(ActorHandle::as_raw),
            "actor callback"
        );
        self.core
            .invoker()
            .invoke_with_actor(kind, id, position, actor);
    }

    fn pick_then_delegate(&self, event: EngineEvent) {
        let Some(interactor) = self.core.interactor() else {
            return;
        };
        self.notify_with_actor(event.callback_kind(), interactor.as_ref());
        self.core.delegate(event);
    }

    fn delegate_only(&self, event: EngineEvent) {
        if self.core.is_attached() {
            self.core.delegate(event);
        }
    }
}

impl std::fmt::Debug for TrackballActorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackballActorStyle")
            .field("core", &self.core)
            .field("pick_on_move", &self.pick_on_move)
            .finish()
    }
}

impl EventHandler for TrackballActorStyle {
    fn on_left_button_down(&self) {
        self.pick_then_delegate(EngineEvent::LeftButtonDown);
    }

    fn on_left_button_up(&self) {
        self.pick_then_delegate(EngineEvent::LeftButtonUp);
    }

    fn on_mouse_move(&self) {
        self.pick_then_delegate(EngineEvent::MouseMove);
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

    // No key slot: keys go straight to the engine.
    fn on_char(&self) {
        self.delegate_only(EngineEvent::Char);
    }

    fn on_key_press(&self) {
        self.delegate_only(EngineEvent::KeyPress);
    }
}
