//! Entry points for the trackball-actor style

use std::ffi::c_char;
use std::rc::Rc;

use interstyle_core::{EngineEvent, EventKind, Interactor, TrackballActorStyle};

use crate::handles::{self, StyleEntry, NULL_HANDLE};
use crate::hooks::{
    InterstyleDefaultHooks, InterstyleInteractorHooks, InterstylePickerHooks,
    InterstyleTrampolines,
};
use crate::{dispatch_to, guarded, into_c_string, read_config};

/// Create a trackball-actor style with default configuration.
///
/// # Safety
/// All pointers must be null or point to valid tables; the tables are
/// copied.
#[no_mangle]
pub unsafe extern "C" fn interstyle_trackball_actor_style_new(
    trampolines: *const InterstyleTrampolines,
    defaults: *const InterstyleDefaultHooks,
    picker: *const InterstylePickerHooks,
) -> u64 {
    interstyle_trackball_actor_style_new_with_config(
        trampolines,
        defaults,
        picker,
        std::ptr::null(),
    )
}

/// Create a trackball-actor style configured from TOML text.
///
/// # Safety
/// Pointers must be null or valid; `config_toml` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn interstyle_trackball_actor_style_new_with_config(
    trampolines: *const InterstyleTrampolines,
    defaults: *const InterstyleDefaultHooks,
    picker: *const InterstylePickerHooks,
    config_toml: *const c_char,
) -> u64 {
    guarded(NULL_HANDLE, || {
        let config = match read_config(config_toml) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "rejected trackball-actor style config");
                return NULL_HANDLE;
            }
        };
        let style = TrackballActorStyle::with_config(
            Rc::new(InterstyleTrampolines::read(trampolines)),
            Rc::new(InterstyleDefaultHooks::read(defaults)),
            Rc::new(InterstylePickerHooks::read(picker)),
            &config,
        );
        handles::insert(StyleEntry::TrackballActor(Rc::new(style)))
    })
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_delete(handle: u64) {
    guarded((), || drop(handles::remove(handle, StyleEntry::is_trackball_actor)))
}

/// # Safety
/// `hooks` must be null or point to a valid table; the table is copied.
#[no_mangle]
pub unsafe extern "C" fn interstyle_trackball_actor_style_set_interactor(
    handle: u64,
    hooks: *const InterstyleInteractorHooks,
) {
    guarded((), || {
        if let Some(style) = handles::trackball_actor(handle) {
            let interactor = if hooks.is_null() {
                None
            } else {
                Some(Rc::new(*hooks) as Rc<dyn Interactor>)
            };
            style.set_interactor(interactor);
        }
    })
}

fn set_callback_id(handle: u64, kind: EventKind, id: i64) {
    guarded((), || {
        if let Some(style) = handles::trackball_actor(handle) {
            if let Err(err) = style.set_callback_id(kind, id) {
                tracing::debug!(error = %err, "callback id ignored");
            }
        }
    })
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_left_press_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::LeftPress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_left_release_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::LeftRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_right_press_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::RightPress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_right_release_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::RightRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_middle_press_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::MiddlePress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_middle_release_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::MiddleRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_set_mouse_move_callback_id(
    handle: u64,
    id: i64,
) {
    set_callback_id(handle, EventKind::MouseMove, id);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_describe(handle: u64) -> *mut c_char {
    guarded(std::ptr::null_mut(), || {
        handles::trackball_actor(handle).map_or(std::ptr::null_mut(), |style| {
            into_c_string(style.describe())
        })
    })
}

fn on_event(handle: u64, event: EngineEvent) {
    guarded((), || dispatch_to(handles::trackball_actor(handle), event))
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_left_button_down(handle: u64) {
    on_event(handle, EngineEvent::LeftButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_left_button_up(handle: u64) {
    on_event(handle, EngineEvent::LeftButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_middle_button_down(handle: u64) {
    on_event(handle, EngineEvent::MiddleButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_middle_button_up(handle: u64) {
    on_event(handle, EngineEvent::MiddleButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_right_button_down(handle: u64) {
    on_event(handle, EngineEvent::RightButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_right_button_up(handle: u64) {
    on_event(handle, EngineEvent::RightButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_mouse_move(handle: u64) {
    on_event(handle, EngineEvent::MouseMove);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_char(handle: u64) {
    on_event(handle, EngineEvent::Char);
}

#[no_mangle]
pub extern "C" fn interstyle_trackball_actor_style_on_key_press(handle: u64) {
    on_event(handle, EngineEvent::KeyPress);
}
