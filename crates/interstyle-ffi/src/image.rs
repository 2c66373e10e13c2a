//! Entry points for the image style

use std::ffi::c_char;
use std::rc::Rc;

use interstyle_core::{EngineEvent, EventKind, ImageInteractorStyle, Interactor};

use crate::handles::{self, StyleEntry, NULL_HANDLE};
use crate::hooks::{InterstyleDefaultHooks, InterstyleInteractorHooks, InterstyleTrampolines};
use crate::{dispatch_to, guarded, into_c_string, read_config};

/// Create an image style with default configuration.
///
/// Returns the null handle if construction fails.
///
/// # Safety
/// Both pointers must be null or point to valid tables; the tables are
/// copied.
#[no_mangle]
pub unsafe extern "C" fn interstyle_image_style_new(
    trampolines: *const InterstyleTrampolines,
    defaults: *const InterstyleDefaultHooks,
) -> u64 {
    interstyle_image_style_new_with_config(trampolines, defaults, std::ptr::null())
}

/// Create an image style configured from TOML text; null text means
/// defaults. Invalid text gives the null handle.
///
/// # Safety
/// Pointers must be null or valid; `config_toml` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn interstyle_image_style_new_with_config(
    trampolines: *const InterstyleTrampolines,
    defaults: *const InterstyleDefaultHooks,
    config_toml: *const c_char,
) -> u64 {
    guarded(NULL_HANDLE, || {
        let config = match read_config(config_toml) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "rejected image style config");
                return NULL_HANDLE;
            }
        };
        let style = ImageInteractorStyle::with_config(
            Rc::new(InterstyleTrampolines::read(trampolines)),
            Rc::new(InterstyleDefaultHooks::read(defaults)),
            &config,
        );
        handles::insert(StyleEntry::Image(Rc::new(style)))
    })
}

/// Destroy an image style. Null or stale handles are ignored.
#[no_mangle]
pub extern "C" fn interstyle_image_style_delete(handle: u64) {
    guarded((), || {
        // The style itself drops here, outside the table borrow
        drop(handles::remove(handle, StyleEntry::is_image));
    })
}

/// Attach to an engine interactor, or detach when `hooks` is null.
///
/// # Safety
/// `hooks` must be null or point to a valid table; the table is copied.
#[no_mangle]
pub unsafe extern "C" fn interstyle_image_style_set_interactor(
    handle: u64,
    hooks: *const InterstyleInteractorHooks,
) {
    guarded((), || {
        if let Some(style) = handles::image(handle) {
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
        if let Some(style) = handles::image(handle) {
            if let Err(err) = style.set_callback_id(kind, id) {
                tracing::debug!(error = %err, "callback id ignored");
            }
        }
    })
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_left_press_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::LeftPress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_left_release_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::LeftRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_right_press_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::RightPress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_right_release_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::RightRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_middle_press_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::MiddlePress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_middle_release_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::MiddleRelease, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_mouse_move_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::MouseMove, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_key_press_callback_id(handle: u64, id: i64) {
    set_callback_id(handle, EventKind::KeyPress, id);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_set_selection_mode(handle: u64, enabled: bool) {
    guarded((), || {
        if let Some(style) = handles::image(handle) {
            style.set_selection_mode(enabled);
        }
    })
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_get_selection_mode(handle: u64) -> bool {
    guarded(false, || {
        handles::image(handle).is_some_and(|style| style.selection_mode())
    })
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_is_moving(handle: u64) -> bool {
    guarded(false, || {
        handles::image(handle).is_some_and(|style| style.is_moving())
    })
}

/// Write the selection corners as start x/y and end x/y.
///
/// Nothing is written for a null handle or when any pointer is null.
///
/// # Safety
/// Non-null pointers must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn interstyle_image_style_get_selection_positions(
    handle: u64,
    start_x: *mut i32,
    start_y: *mut i32,
    end_x: *mut i32,
    end_y: *mut i32,
) {
    if start_x.is_null() || start_y.is_null() || end_x.is_null() || end_y.is_null() {
        return;
    }
    guarded((), || {
        if let Some(style) = handles::image(handle) {
            let (sx, sy, ex, ey) = style.selection_positions();
            *start_x = sx;
            *start_y = sy;
            *end_x = ex;
            *end_y = ey;
        }
    })
}

/// Start a rubber-band drag at the current event position.
///
/// This does not consult selection mode: a drag started here is live even
/// while selection mode is off, and the engine's left-press and move
/// handling stay suppressed until the next left release or
/// `interstyle_image_style_set_selection_mode(handle, false)`.
#[no_mangle]
pub extern "C" fn interstyle_image_style_start_select(handle: u64) {
    guarded((), || {
        if let Some(style) = handles::image(handle) {
            style.start_select();
        }
    })
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_end_select(handle: u64) {
    guarded((), || {
        if let Some(style) = handles::image(handle) {
            style.end_select();
        }
    })
}

/// JSON description of the style; free with `interstyle_string_free`.
/// Null for a null handle.
#[no_mangle]
pub extern "C" fn interstyle_image_style_describe(handle: u64) -> *mut c_char {
    guarded(std::ptr::null_mut(), || {
        handles::image(handle).map_or(std::ptr::null_mut(), |style| {
            into_c_string(style.describe())
        })
    })
}

fn on_event(handle: u64, event: EngineEvent) {
    guarded((), || dispatch_to(handles::image(handle), event))
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_left_button_down(handle: u64) {
    on_event(handle, EngineEvent::LeftButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_left_button_up(handle: u64) {
    on_event(handle, EngineEvent::LeftButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_middle_button_down(handle: u64) {
    on_event(handle, EngineEvent::MiddleButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_middle_button_up(handle: u64) {
    on_event(handle, EngineEvent::MiddleButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_right_button_down(handle: u64) {
    on_event(handle, EngineEvent::RightButtonDown);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_right_button_up(handle: u64) {
    on_event(handle, EngineEvent::RightButtonUp);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_mouse_move(handle: u64) {
    on_event(handle, EngineEvent::MouseMove);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_char(handle: u64) {
    on_event(handle, EngineEvent::Char);
}

#[no_mangle]
pub extern "C" fn interstyle_image_style_on_key_press(handle: u64) {
    on_event(handle, EngineEvent::KeyPress);
}
