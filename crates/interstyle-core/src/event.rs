//! Event model shared by the interactor styles
//!
//! Everything that crosses between the engine, the styles and the host is a
//! small `Copy` value: device positions, callback ids, opaque engine object
//! handles and the tagged engine events themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Opaque host-side callback identifier.
///
/// The core never sees closures, only these ids. [`NO_CALLBACK`] marks an
/// empty slot.
pub type CallbackId = i64;

/// Sentinel id meaning "no callback registered".
pub const NO_CALLBACK: CallbackId = 0;

/// Kinds of events a host can register a callback for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    LeftPress,
    LeftRelease,
    RightPress,
    RightRelease,
    MiddlePress,
    MiddleRelease,
    MouseMove,
    KeyPress,
}

impl EventKind {
    /// Number of distinct event kinds
    pub const COUNT: usize = 8;

    /// All kinds in slot order
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::LeftPress,
        EventKind::LeftRelease,
        EventKind::RightPress,
        EventKind::RightRelease,
        EventKind::MiddlePress,
        EventKind::MiddleRelease,
        EventKind::MouseMove,
        EventKind::KeyPress,
    ];

    /// Slot index of this kind
    pub fn index(self) -> usize {
        match self {
            EventKind::LeftPress => 0,
            EventKind::LeftRelease => 1,
            EventKind::RightPress => 2,
            EventKind::RightRelease => 3,
            EventKind::MiddlePress => 4,
            EventKind::MiddleRelease => 5,
            EventKind::MouseMove => 6,
            EventKind::KeyPress => 7,
        }
    }

    /// Stable snake_case name, matching the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::LeftPress => "left_press",
            EventKind::LeftRelease => "left_release",
            EventKind::RightPress => "right_press",
            EventKind::RightRelease => "right_release",
            EventKind::MiddlePress => "middle_press",
            EventKind::MiddleRelease => "middle_release",
            EventKind::MouseMove => "mouse_move",
            EventKind::KeyPress => "key_press",
        }
    }

    /// Whether the trampoline for this kind carries a device position
    pub fn is_pointer(self) -> bool {
        !matches!(self, EventKind::KeyPress)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer device-space pixel position.
///
/// Origin and axis direction are whatever the engine uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DevicePosition {
    pub x: i32,
    pub y: i32,
}

impl DevicePosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for DevicePosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<DevicePosition> for (i32, i32) {
    fn from(p: DevicePosition) -> Self {
        (p.x, p.y)
    }
}

/// Opaque engine actor reference (the drawable prop subtype)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorHandle(NonZeroUsize);

impl ActorHandle {
    /// Wrap a raw engine address; `0` is "no actor"
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn as_raw(self) -> usize {
        self.0.get()
    }
}

/// Opaque engine prop reference that is not known to be an actor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropHandle(NonZeroUsize);

impl PropHandle {
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn as_raw(self) -> usize {
        self.0.get()
    }
}

/// Opaque engine renderer reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RendererHandle(NonZeroUsize);

impl RendererHandle {
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn as_raw(self) -> usize {
        self.0.get()
    }
}

/// Result of a successful pick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickedProp {
    /// The topmost prop is an actor
    Actor(ActorHandle),
    /// Something else was hit (volume, 2D actor, ...)
    Other(PropHandle),
}

impl PickedProp {
    /// Narrow the pick result to an actor, like a safe downcast
    pub fn as_actor(&self) -> Option<ActorHandle> {
        match self {
            PickedProp::Actor(actor) => Some(*actor),
            PickedProp::Other(_) => None,
        }
    }
}

/// Engine event hooks a style overrides.
///
/// The same tags name the stock behavior a style falls back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineEvent {
    LeftButtonDown,
    LeftButtonUp,
    MiddleButtonDown,
    MiddleButtonUp,
    RightButtonDown,
    RightButtonUp,
    MouseMove,
    Char,
    KeyPress,
}

impl EngineEvent {
    pub const ALL: [EngineEvent; 9] = [
        EngineEvent::LeftButtonDown,
        EngineEvent::LeftButtonUp,
        EngineEvent::MiddleButtonDown,
        EngineEvent::MiddleButtonUp,
        EngineEvent::RightButtonDown,
        EngineEvent::RightButtonUp,
        EngineEvent::MouseMove,
        EngineEvent::Char,
        EngineEvent::KeyPress,
    ];

    /// Callback slot consulted when this event arrives
    pub fn callback_kind(self) -> EventKind {
        match self {
            EngineEvent::LeftButtonDown => EventKind::LeftPress,
            EngineEvent::LeftButtonUp => EventKind::LeftRelease,
            EngineEvent::MiddleButtonDown => EventKind::MiddlePress,
            EngineEvent::MiddleButtonUp => EventKind::MiddleRelease,
            EngineEvent::RightButtonDown => EventKind::RightPress,
            EngineEvent::RightButtonUp => EventKind::RightRelease,
            EngineEvent::MouseMove => EventKind::MouseMove,
            EngineEvent::Char | EngineEvent::KeyPress => EventKind::KeyPress,
        }
    }
}
