use crate::{Dispose, on_unmount, remember, scoped_effect};
use std::cell::RefCell;

// Per-callsite state for `disposable_effect`. A `last_key` of `None` doubles
// as "first composition": the unmount hook is installed exactly then.
struct CallSite<K> {
    last_key: Option<K>,
    cleanup: Option<Dispose>,
}

/// Keyed effect: cleanup on key change or unmount.
///
/// The first observation of a key value runs `effect` and stores the cleanup
/// it returns. A later call at the same slot with a *different* key runs the
/// stored cleanup first, then the new effect. When the owning scope is torn
/// down, the pending cleanup runs once.
///
/// Slot-based, so call it unconditionally and in a stable order within a
/// composition pass.
pub fn disposable_effect<K: PartialEq + Clone + 'static>(
    key: K,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    let site = remember(|| {
        RefCell::new(CallSite::<K> {
            last_key: None,
            cleanup: None,
        })
    });

    let mut state = site.borrow_mut();

    if state.last_key.is_none() {
        let site = site.clone();
        scoped_effect(move || {
            on_unmount(move || {
                if let Some(d) = site.borrow_mut().cleanup.take() {
                    d.run();
                }
            })
        });
    }

    if state.last_key.as_ref() != Some(&key) {
        state.last_key = Some(key);
        let previous = state.cleanup.take();
        drop(state);

        if let Some(d) = previous {
            d.run();
        }
        site.borrow_mut().cleanup = Some(effect());
    }
}
