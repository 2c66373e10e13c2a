//! Capabilities a style is built from
//!
//! The styles never talk to the rendering engine or the host directly.
//! Instead they receive small capability objects:
//!
//! - [`Interactor`]: the engine interactor a style is attached to (event
//!   position, key symbol, redraw, first renderer)
//! - [`DefaultBehavior`]: the engine's stock handling, used as a fallback
//! - [`PickingService`]: topmost-prop queries for the actor-aware style
//! - [`CallbackInvoker`]: the trampoline side, resolving ids to host closures
//!
//! An engine adapter implements these and drives a style through
//! [`EventHandler`].

use std::rc::Rc;

use crate::event::{
    ActorHandle, CallbackId, DevicePosition, EngineEvent, EventKind, PickedProp, RendererHandle,
};

/// The engine interactor a style is attached to
pub trait Interactor {
    /// Device position of the event currently being dispatched
    fn event_position(&self) -> DevicePosition;

    /// Key symbol of the current key event ("f", "Escape", "F1", ...)
    fn key_sym(&self) -> Option<String>;

    /// Request a redraw of the render window
    fn render(&self);

    /// First renderer of the attached render window, if any
    fn first_renderer(&self) -> Option<RendererHandle>;
}

/// The engine's stock handling for an event
pub trait DefaultBehavior {
    fn perform(&self, event: EngineEvent);
}

impl<F> DefaultBehavior for F
where
    F: Fn(EngineEvent),
{
    fn perform(&self, event: EngineEvent) {
        self(event)
    }
}

/// Topmost-prop picking
pub trait PickingService {
    /// Pick at `position` in `renderer`; `None` on a miss
    fn pick(&self, position: DevicePosition, renderer: RendererHandle) -> Option<PickedProp>;
}

/// Host side of the trampoline bridge.
///
/// Calls are synchronous and expected to return promptly. Implementations
/// must tolerate ids they do not know.
pub trait CallbackInvoker {
    /// Position-only trampoline (press, release, move)
    fn invoke_position(&self, kind: EventKind, id: CallbackId, position: DevicePosition);

    /// Actor-aware trampoline; `actor` is `None` on a pick miss
    fn invoke_with_actor(
        &self,
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
        actor: Option<ActorHandle>,
    );

    /// Key trampoline; returns whether the key was consumed
    fn invoke_key(&self, id: CallbackId, key: &str) -> bool;
}

/// Invoker that drops every call.
///
/// Useful for styles driven purely through their default behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInvoker;

impl CallbackInvoker for NullInvoker {
    fn invoke_position(&self, _kind: EventKind, _id: CallbackId, _position: DevicePosition) {}

    fn invoke_with_actor(
        &self,
        _kind: EventKind,
        _id: CallbackId,
        _position: DevicePosition,
        _actor: Option<ActorHandle>,
    ) {
    }

    fn invoke_key(&self, _id: CallbackId, _key: &str) -> bool {
        false
    }
}

/// One method per engine hook a style overrides
pub trait EventHandler {
    fn on_left_button_down(&self);
    fn on_left_button_up(&self);
    fn on_middle_button_down(&self);
    fn on_middle_button_up(&self);
    fn on_right_button_down(&self);
    fn on_right_button_up(&self);
    fn on_mouse_move(&self);
    fn on_char(&self);
    fn on_key_press(&self);

    /// Route a tagged engine event to its handler
    fn dispatch(&self, event: EngineEvent) {
        match event {
            EngineEvent::LeftButtonDown => self.on_left_button_down(),
            EngineEvent::LeftButtonUp => self.on_left_button_up(),
            EngineEvent::MiddleButtonDown => self.on_middle_button_down(),
            EngineEvent::MiddleButtonUp => self.on_middle_button_up(),
            EngineEvent::RightButtonDown => self.on_right_button_down(),
            EngineEvent::RightButtonUp => self.on_right_button_up(),
            EngineEvent::MouseMove => self.on_mouse_move(),
            EngineEvent::Char => self.on_char(),
            EngineEvent::KeyPress => self.on_key_press(),
        }
    }
}

impl<T: EventHandler + ?Sized> EventHandler for Rc<T> {
    fn on_left_button_down(&self) {
        (**self).on_left_button_down()
    }

    fn on_left_button_up(&self) {
        (**self).on_left_button_up()
    }

    fn on_middle_button_down(&self) {
        (**self).on_middle_button_down()
    }

    fn on_middle_button_up(&self) {
        (**self).on_middle_button_up()
    }

    fn on_right_button_down(&self) {
        (**self).on_right_button_down()
    }

    fn on_right_button_up(&self) {
        (**self).on_right_button_up()
    }

    fn on_mouse_move(&self) {
        (**self).on_mouse_move()
    }

    fn on_char(&self) {
        (**self).on_char()
    }

    fn on_key_press(&self) {
        (**self).on_key_press()
    }
}
