//! interstyle-core - Callback-routing interactor styles
//!
//! This crate holds the event dispatch logic of two custom interactor styles
//! for a 3D visualization engine. The engine itself (rendering, picking,
//! camera manipulation) stays external; styles talk to it only through the
//! capabilities in [`capability`].
//!
//! # Key Components
//!
//! - **ImageInteractorStyle**: 2-D image viewing with rubber-band selection
//!   and interceptable key handling
//! - **TrackballActorStyle**: actor manipulation that reports the actor under
//!   the pointer to the host
//! - **CallbackRegistry**: host-side id → closure registry implementing the
//!   trampoline side
//! - **StyleConfig**: TOML-loadable tunables
//!
//! # Event flow
//!
//! engine event → handler reads the device position (and picks) → local
//! state update → host callback, if an id is registered → engine default
//! behavior, unless a drag or a consumed key suppresses it.

pub mod capability;
pub mod config;
pub mod error;
pub mod event;
pub mod registry;
pub mod selection;
pub mod slots;
pub mod style;

pub use capability::*;
pub use config::StyleConfig;
pub use error::{ConfigError, ConfigResult, InterstyleError, InterstyleResult};
pub use event::*;
pub use registry::CallbackRegistry;
pub use selection::{SelectionRect, SelectionTracker};
pub use slots::CallbackSlots;
pub use style::{
    ImageInteractorStyle, RegisteredCallback, SelectionSnapshot, StyleCore, StyleSnapshot,
    TrackballActorStyle,
};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
