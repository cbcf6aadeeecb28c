use lull_core::{Signal, disposable_effect, on_unmount, remember, set_timeout, signal};
use web_time::Duration;

/// Mirrors `input`, but only once it has held steady for `delay`.
///
/// Every change to `input` (or `delay`) cancels the pending update and arms a
/// fresh timeout, so a burst of changes inside the window collapses into a
/// single observed change to the final value once the burst goes quiet. If the
/// owning composition is torn down first, the pending update is cancelled and
/// never applied.
///
/// A zero delay still waits for the next timer pump rather than updating in
/// place.
pub fn debounced_value<T>(input: T, delay: Duration) -> T
where
    T: Clone + PartialEq + 'static,
{
    let mirror = remember({
        let seed = input.clone();
        move || signal(seed)
    });

    disposable_effect((input.clone(), delay), {
        let mirror: Signal<T> = (*mirror).clone();
        move || {
            let pending = set_timeout(delay, move || mirror.set(input));
            on_unmount(move || pending.cancel())
        }
    });

    mirror.get()
}
