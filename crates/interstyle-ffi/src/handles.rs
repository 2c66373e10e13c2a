//! Thread-local table of live styles behind opaque `u64` handles
//!
//! Handles start at 1 and are never reused, so a destroyed handle keeps
//! resolving to nothing. Lookups clone the `Rc` out of the table and release
//! the borrow before the caller touches the style; a host callback may then
//! create, destroy or query styles while a dispatch is running.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use interstyle_core::{ImageInteractorStyle, TrackballActorStyle};

/// The null handle
pub const NULL_HANDLE: u64 = 0;

#[derive(Clone)]
pub(crate) enum StyleEntry {
    Image(Rc<ImageInteractorStyle>),
    TrackballActor(Rc<TrackballActorStyle>),
}

impl StyleEntry {
    pub(crate) fn is_image(&self) -> bool {
        matches!(self, StyleEntry::Image(_))
    }

    pub(crate) fn is_trackball_actor(&self) -> bool {
        matches!(self, StyleEntry::TrackballActor(_))
    }

    fn class_name(&self) -> &'static str {
        match self {
            StyleEntry::Image(style) => style.class_name(),
            StyleEntry::TrackballActor(style) => style.class_name(),
        }
    }
}

struct HandleTable {
    next: u64,
    entries: HashMap<u64, StyleEntry>,
}

impl HandleTable {
    fn new() -> Self {
        Self {
            next: 1,
            entries: HashMap::new(),
        }
    }
}

thread_local! {
    static HANDLES: RefCell<HandleTable> = RefCell::new(HandleTable::new());
}

/// Store `entry` and return its new handle, or the null handle if this
/// thread's table is already gone.
pub(crate) fn insert(entry: StyleEntry) -> u64 {
    let class_name = entry.class_name();
    let handle = HANDLES
        .try_with(|table| {
            let mut table = table.borrow_mut();
            let handle = table.next;
            table.next += 1;
            table.entries.insert(handle, entry);
            handle
        })
        .unwrap_or(NULL_HANDLE);
    tracing::debug!(handle, class_name, "style created");
    handle
}

/// Remove `handle` from the table if its entry satisfies `is_kind`.
///
/// The entry is handed back so the style is dropped after the borrow ends.
pub(crate) fn remove(handle: u64, is_kind: fn(&StyleEntry) -> bool) -> Option<StyleEntry> {
    if handle == NULL_HANDLE {
        return None;
    }
    let entry = HANDLES
        .try_with(|table| {
            let mut table = table.borrow_mut();
            match table.entries.get(&handle) {
                Some(entry) if is_kind(entry) => table.entries.remove(&handle),
                _ => None,
            }
        })
        .ok()
        .flatten()?;
    tracing::debug!(handle, class_name = entry.class_name(), "style destroyed");
    Some(entry)
}

fn lookup(handle: u64) -> Option<StyleEntry> {
    if handle == NULL_HANDLE {
        return None;
    }
    HANDLES
        .try_with(|table| table.borrow().entries.get(&handle).cloned())
        .ok()
        .flatten()
}

/// Image style behind `handle`; `None` for null, stale or foreign handles
pub(crate) fn image(handle: u64) -> Option<Rc<ImageInteractorStyle>> {
    match lookup(handle)? {
        StyleEntry::Image(style) => Some(style),
        StyleEntry::TrackballActor(_) => None,
    }
}

/// Trackball-actor style behind `handle`
pub(crate) fn trackball_actor(handle: u64) -> Option<Rc<TrackballActorStyle>> {
    match lookup(handle)? {
        StyleEntry::TrackballActor(style) => Some(style),
        StyleEntry::Image(_) => None,
    }
}

/// Number of live handles on this thread
pub(crate) fn live_count() -> usize {
    HANDLES
        .try_with(|table| table.borrow().entries.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interstyle_core::{EngineEvent, NullInvoker};

    fn image_entry() -> StyleEntry {
        StyleEntry::Image(Rc::new(ImageInteractorStyle::new(
            Rc::new(NullInvoker),
            Rc::new(|_: EngineEvent| {}),
        )))
    }

    #[test]
    fn test_handles_are_not_reused() {
        let first = insert(image_entry());
        assert!(remove(first, StyleEntry::is_image).is_some());
        let second = insert(image_entry());
        assert_ne!(first, second);
        assert!(image(first).is_none());
        assert!(image(second).is_some());
        remove(second, StyleEntry::is_image);
    }

    #[test]
    fn test_wrong_kind_resolves_to_nothing() {
        let handle = insert(image_entry());
        assert!(trackball_actor(handle).is_none());
        assert!(remove(handle, StyleEntry::is_trackball_actor).is_none());
        assert!(image(handle).is_some());
        remove(handle, StyleEntry::is_image);
    }

    #[test]
    fn test_null_handle() {
        assert!(remove(NULL_HANDLE, StyleEntry::is_image).is_none());
        assert!(image(NULL_HANDLE).is_none());
    }
}
