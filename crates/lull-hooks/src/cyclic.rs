use std::cell::RefCell;

use lull_core::{TimerHandle, on_unmount, remember, scoped_effect, set_interval, signal};
use web_time::Duration;

/// Step pause for `cyclic_value` when none is given.
pub const DEFAULT_STEP_PAUSE: Duration = Duration::from_millis(200);

/// Integer that starts at `start` and advances by one every `pause`
/// (default 200 ms) until teardown, wrapping modulo `end + 1`.
///
/// The wrap is a plain modulo, so a nonzero `start` only pins the first
/// value: with `start = 2, end = 5` the observed sequence is
/// `2, 3, 4, 5, 0, 1, 2, ...` — the cycle passes through 0 before reaching
/// `start` again. Observable behavior, kept deliberately.
///
/// Re-arms its interval on every recomposition (see `delayed_value`), which
/// also restarts the pause from the moment of the pass.
///
/// A degenerate range has no well-formed modulus (`end < 0`, or
/// `end == i64::MAX` where `end + 1` overflows); the counter then holds at
/// `start` instead of stepping.
pub fn cyclic_value(start: i64, end: i64, pause: Option<Duration>) -> i64 {
    let value = remember(|| signal(start));
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
    let modulus = end.checked_add(1).filter(|m| *m > 0);
    let handle = set_interval(pause.unwrap_or(DEFAULT_STEP_PAUSE), {
        let value = (*value).clone();
        move || {
            if let Some(m) = modulus {
                value.update(|v| *v = v.wrapping_add(1) % m);
            }
        }
    });
    *pending.borrow_mut() = Some(handle);

    value.get()
}
