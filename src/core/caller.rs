//! Call-site capture
//!
//! Logger methods are `#[track_caller]`, so the location of the user's log
//! call is known without walking the stack. While a writer runs, that
//! location is published in a thread-local so postponed fields can read the
//! emission site at encode time.

use std::cell::Cell;
use std::panic::Location;

thread_local! {
    static CALL_SITE: Cell<Option<&'static Location<'static>>> = const { Cell::new(None) };
}

/// Location of the log call currently being written on this thread
pub fn current() -> Option<&'static Location<'static>> {
    CALL_SITE.with(Cell::get)
}

// Restores the previous site on drop, so nested log calls (a field that logs
// while being encoded) and panics inside writers leave the slot consistent.
struct SiteGuard {
    previous: Option<&'static Location<'static>>,
}

impl Drop for SiteGuard {
    fn drop(&mut self) {
        CALL_SITE.with(|slot| slot.set(self.previous));
    }
}

/// Run `f` with `site` published as the current call site
pub(crate) fn with_site<R>(site: &'static Location<'static>, f: impl FnOnce() -> R) -> R {
    let previous = CALL_SITE.with(|slot| slot.replace(Some(site)));
    let _guard = SiteGuard { previous };
    f()
}

/// Final path component of `file`, accepting both separators
pub fn basename(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
