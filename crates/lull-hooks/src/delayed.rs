use std::cell::RefCell;

use lull_core::{TimerHandle, on_unmount, remember, scoped_effect, set_timeout, signal};
use web_time::Duration;

/// Delay before a `delayed_value` call site flips to `true` when none is given.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// `false` until `delay` (default 500 ms) has elapsed since this call site
/// first composed, then `true` until teardown.
///
/// The timeout is cancelled and re-armed on every recomposition instead of
/// being keyed on `delay`. Kept as-is: once the flag has flipped, re-arming
/// schedules another write of the same `true`, which is idempotent in effect
/// though wasteful in timer churn. `cyclic_value` carries the same caveat.
pub fn delayed_value(delay: Option<Duration>) -> bool {
    let shown = remember(|| signal(false));
    let pending = remember(|| RefCell::new(None::<TimerHandle>));
    let installed = remember(|| RefCell::new(false));

    if !*installed.borrow() {
        *installed.borrow_mut() = true;
        let pending = pending.clone();
        scoped_effect(move || {
            on_unmount(move || {
                if let Some(handle) = pending.borrow_mut().take() {
                    handle.cancel();
                }
            })
        });
    }

    // Unconditional re-arm, once per recomposition.
    if let Some(prev) = pending.borrow_mut().take() {
        prev.cancel();
    }
    let handle = set_timeout(delay.unwrap_or(DEFAULT_REVEAL_DELAY), {
        let shown = (*shown).clone();
        move || shown.set(true)
    });
    *pending.borrow_mut() = Some(handle);

    shown.get()
}
