//! `#[repr(C)]` hook tables and their capability adapters
//!
//! Every table is a set of nullable function pointers plus an opaque
//! `user_data` pointer handed back on each call. A missing hook degrades
//! to "nothing": no position, no key, no renderer, nothing picked, call
//! dropped.

use std::ffi::{c_char, c_int, c_void, CStr, CString};

use interstyle_core::{
    ActorHandle, CallbackId, CallbackInvoker, DefaultBehavior, DevicePosition, EngineEvent,
    EventKind, Interactor, PickedProp, PickingService, PropHandle, RendererHandle,
};

/// Engine event tag passed to [`InterstyleDefaultHooks::perform`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterstyleEvent {
    LeftButtonDown = 0,
    LeftButtonUp = 1,
    MiddleButtonDown = 2,
    MiddleButtonUp = 3,
    RightButtonDown = 4,
    RightButtonUp = 5,
    MouseMove = 6,
    Char = 7,
    KeyPress = 8,
}

impl From<EngineEvent> for InterstyleEvent {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::LeftButtonDown => Self::LeftButtonDown,
            EngineEvent::LeftButtonUp => Self::LeftButtonUp,
            EngineEvent::MiddleButtonDown => Self::MiddleButtonDown,
            EngineEvent::MiddleButtonUp => Self::MiddleButtonUp,
            EngineEvent::RightButtonDown => Self::RightButtonDown,
            EngineEvent::RightButtonUp => Self::RightButtonUp,
            EngineEvent::MouseMove => Self::MouseMove,
            EngineEvent::Char => Self::Char,
            EngineEvent::KeyPress => Self::KeyPress,
        }
    }
}

pub type PositionTrampoline = extern "C" fn(id: i64, x: i32, y: i32);
pub type ActorTrampoline = extern "C" fn(id: i64, x: i32, y: i32, actor: *mut c_void);
pub type KeyTrampoline = extern "C" fn(id: i64, key: *const c_char) -> c_int;

/// Host trampolines that resolve a callback id to a host closure
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct InterstyleTrampolines {
    pub on_left_press: Option<PositionTrampoline>,
    pub on_left_release: Option<PositionTrampoline>,
    pub on_mouse_move: Option<PositionTrampoline>,
    pub on_right_press: Option<PositionTrampoline>,
    pub on_right_release: Option<PositionTrampoline>,
    pub on_middle_press: Option<PositionTrampoline>,
    pub on_middle_release: Option<PositionTrampoline>,
    /// Non-zero return means the key was consumed
    pub on_key_press: Option<KeyTrampoline>,
    pub on_left_press_with_actor: Option<ActorTrampoline>,
    pub on_left_release_with_actor: Option<ActorTrampoline>,
    pub on_mouse_move_with_actor: Option<ActorTrampoline>,
}

impl InterstyleTrampolines {
    /// Copy the table behind `ptr`; null gives an empty table
    ///
    /// # Safety
    /// `ptr` must be null or point to a valid table.
    pub(crate) unsafe fn read(ptr: *const Self) -> Self {
        if ptr.is_null() {
            Self::default()
        } else {
            *ptr
        }
    }

    fn position(&self, kind: EventKind) -> Option<PositionTrampoline> {
        match kind {
            EventKind::LeftPress => self.on_left_press,
            EventKind::LeftRelease => self.on_left_release,
            EventKind::MouseMove => self.on_mouse_move,
            EventKind::RightPress => self.on_right_press,
            EventKind::RightRelease => self.on_right_release,
            EventKind::MiddlePress => self.on_middle_press,
            EventKind::MiddleRelease => self.on_middle_release,
            EventKind::KeyPress => None,
        }
    }

    fn with_actor(&self, kind: EventKind) -> Option<ActorTrampoline> {
        match kind {
            EventKind::LeftPress => self.on_left_press_with_actor,
            EventKind::LeftRelease => self.on_left_release_with_actor,
            EventKind::MouseMove => self.on_mouse_move_with_actor,
            _ => None,
        }
    }
}

impl CallbackInvoker for InterstyleTrampolines {
    fn invoke_position(&self, kind: EventKind, id: CallbackId, position: DevicePosition) {
        if let Some(trampoline) = self.position(kind) {
            trampoline(id, position.x, position.y);
        }
    }

    fn invoke_with_actor(
        &self,
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
        actor: Option<ActorHandle>,
    ) {
        if let Some(trampoline) = self.with_actor(kind) {
            let actor = actor.map_or(std::ptr::null_mut(), |a| a.as_raw() as *mut c_void);
            trampoline(id, position.x, position.y, actor);
        }
    }

    fn invoke_key(&self, id: CallbackId, key: &str) -> bool {
        let Some(trampoline) = self.on_key_press else {
            return false;
        };
        // A key symbol with an interior NUL cannot be passed on
        let Ok(key) = CString::new(key) else {
            return false;
        };
        trampoline(id, key.as_ptr()) != 0
    }
}

/// The engine's stock handlers
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InterstyleDefaultHooks {
    pub user_data: *mut c_void,
    pub perform: Option<extern "C" fn(user_data: *mut c_void, event: InterstyleEvent)>,
}

impl Default for InterstyleDefaultHooks {
    fn default() -> Self {
        Self {
            user_data: std::ptr::null_mut(),
            perform: None,
        }
    }
}

impl InterstyleDefaultHooks {
    /// # Safety
    /// `ptr` must be null or point to a valid table.
    pub(crate) unsafe fn read(ptr: *const Self) -> Self {
        if ptr.is_null() {
            Self::default()
        } else {
            *ptr
        }
    }
}

impl DefaultBehavior for InterstyleDefaultHooks {
    fn perform(&self, event: EngineEvent) {
        if let Some(perform) = self.perform {
            perform(self.user_data, event.into());
        }
    }
}

/// Accessors on the engine interactor a style is attached to
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InterstyleInteractorHooks {
    pub user_data: *mut c_void,
    pub event_position: Option<extern "C" fn(user_data: *mut c_void, x: *mut i32, y: *mut i32)>,
    /// Returned string is borrowed and must stay valid until the next call
    pub key_sym: Option<extern "C" fn(user_data: *mut c_void) -> *const c_char>,
    pub render: Option<extern "C" fn(user_data: *mut c_void)>,
    pub first_renderer: Option<extern "C" fn(user_data: *mut c_void) -> *mut c_void>,
}

impl Interactor for InterstyleInteractorHooks {
    fn event_position(&self) -> DevicePosition {
        let (mut x, mut y) = (0, 0);
        if let Some(event_position) = self.event_position {
            event_position(self.user_data, &mut x, &mut y);
        }
        DevicePosition::new(x, y)
    }

    fn key_sym(&self) -> Option<String> {
        let key = self.key_sym?(self.user_data);
        if key.is_null() {
            return None;
        }
        // SAFETY: the hook returns a NUL-terminated string valid for this call
        let key = unsafe { CStr::from_ptr(key) };
        Some(key.to_string_lossy().into_owned())
    }

    fn render(&self) {
        if let Some(render) = self.render {
            render(self.user_data);
        }
    }

    fn first_renderer(&self) -> Option<RendererHandle> {
        let renderer = self.first_renderer?(self.user_data);
        RendererHandle::from_raw(renderer as usize)
    }
}

/// Outcome of one pick; a null `prop` is a miss
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InterstylePickResult {
    pub prop: *mut c_void,
    pub is_actor: bool,
}

impl InterstylePickResult {
    pub fn miss() -> Self {
        Self {
            prop: std::ptr::null_mut(),
            is_actor: false,
        }
    }

    fn into_picked(self) -> Option<PickedProp> {
        let raw = self.prop as usize;
        if self.is_actor {
            ActorHandle::from_raw(raw).map(PickedProp::Actor)
        } else {
            PropHandle::from_raw(raw).map(PickedProp::Other)
        }
    }
}

/// Topmost-prop picker of the engine
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InterstylePickerHooks {
    pub user_data: *mut c_void,
    pub pick: Option<
        extern "C" fn(
            user_data: *mut c_void,
            x: i32,
            y: i32,
            renderer: *mut c_void,
        ) -> InterstylePickResult,
    >,
}

impl Default for InterstylePickerHooks {
    fn default() -> Self {
        Self {
            user_data: std::ptr::null_mut(),
            pick: None,
        }
    }
}

impl InterstylePickerHooks {
    /// # Safety
    /// `ptr` must be null or point to a valid table.
    pub(crate) unsafe fn read(ptr: *const Self) -> Self {
        if ptr.is_null() {
            Self::default()
        } else {
            *ptr
        }
    }
}

impl PickingService for InterstylePickerHooks {
    fn pick(&self, position: DevicePosition, renderer: RendererHandle) -> Option<PickedProp> {
        let pick = self.pick?;
        pick(
            self.user_data,
            position.x,
            position.y,
            renderer.as_raw() as *mut c_void,
        )
        .into_picked()
    }
}
