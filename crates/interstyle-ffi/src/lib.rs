//! interstyle-ffi - C entry points for interstyle-core styles
//!
//! Styles live in a thread-local handle table and are addressed by opaque
//! non-zero `u64` handles. Engine capabilities come in as `#[repr(C)]` hook
//! tables (see [`hooks`]). Every entry point:
//!
//! - treats a null, destroyed or foreign handle as a silent no-op
//! - catches panics; they never unwind into the caller
//! - keeps the style alive until the call returns, even if a host callback
//!   destroys it midway

use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::str::Utf8Error;

use interstyle_core::{ConfigError, EngineEvent, EventHandler, StyleConfig};
use thiserror::Error;

mod handles;
pub mod hooks;
pub mod image;
pub mod logging;
pub mod trackball_actor;

pub use handles::NULL_HANDLE;
pub use hooks::*;
pub use image::*;
pub use logging::interstyle_init_logging;
pub use trackball_actor::*;

/// Failures while reading arguments from C
#[derive(Error, Debug)]
pub(crate) enum FfiError {
    #[error("config text is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run `f`, returning `fallback` if it panics
pub(crate) fn guarded<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or(fallback)
}

/// Parse a NUL-terminated TOML config; null means defaults
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
pub(crate) unsafe fn read_config(text: *const c_char) -> Result<StyleConfig, FfiError> {
    if text.is_null() {
        return Ok(StyleConfig::default());
    }
    let text = CStr::from_ptr(text).to_str()?;
    Ok(StyleConfig::from_toml_str(text)?)
}

/// Hand a describe string to C; null if it cannot be represented
pub(crate) fn into_c_string(text: String) -> *mut c_char {
    CString::new(text).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Route an engine event to `style`
pub(crate) fn dispatch_to(style: Option<impl EventHandler>, event: EngineEvent) {
    if let Some(style) = style {
        style.dispatch(event);
    }
}

/// Whether the style behind `handle` is, or derives from, `class_name`.
///
/// # Safety
/// `class_name` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn interstyle_is_a(handle: u64, class_name: *const c_char) -> bool {
    if class_name.is_null() {
        return false;
    }
    guarded(false, || {
        let Ok(name) = CStr::from_ptr(class_name).to_str() else {
            return false;
        };
        if let Some(style) = handles::image(handle) {
            style.is_a(name)
        } else if let Some(style) = handles::trackball_actor(handle) {
            style.is_a(name)
        } else {
            false
        }
    })
}

/// Free a string returned by a `describe` entry point
///
/// # Safety
/// `text` must be null or a pointer returned by this library, freed once.
#[no_mangle]
pub unsafe extern "C" fn interstyle_string_free(text: *mut c_char) {
    if !text.is_null() {
        drop(CString::from_raw(text));
    }
}

/// Number of live style handles on the calling thread
#[no_mangle]
pub extern "C" fn interstyle_live_styles() -> usize {
    guarded(0, handles::live_count)
}
