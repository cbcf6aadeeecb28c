use std::any::Any;
use std::rc::Rc;

use lull_core::{Dispose, Signal, disposable_effect, on_unmount, remember_with_key, signal};
use web_time::Duration;

use crate::debounce::debounced_value;

/// Value shape exchanged with the store. Slots are type-erased; reading back
/// goes through the single downcast in `persisted_state`.
pub type StoredValue = Rc<dyn Any>;

pub type GetItem = Rc<dyn Fn(&str) -> Option<StoredValue>>;

/// Writer capability. `None` is the cleared marker written at teardown.
pub type SetItem = Rc<dyn Fn(&str, Option<StoredValue>)>;

/// Caller-owned persistence capabilities. Either half may be absent, which
/// turns the corresponding synchronization into a no-op: with no store at all,
/// `persisted_state` degenerates to plain in-memory reactive state.
///
/// The store itself (its lifetime, its contents, coordination between
/// concurrent writers of one key) stays the caller's business; last write
/// wins.
#[derive(Clone, Default)]
pub struct PersistedStateProps {
    pub get_item: Option<GetItem>,
    pub set_item: Option<SetItem>,
}

/// Quiescence window between the last change and the store write.
pub const WRITE_QUIESCENCE: Duration = Duration::from_millis(500);

/// Reactive state loosely synchronized with an external key/value store.
///
/// - Seeds once, on first composition: `get_item(key)` when present and of
///   the expected type, otherwise `initial_value`. The downcast is the one
///   place a stored shape mismatch can surface; it falls back to
///   `initial_value` with a warning instead of panicking.
/// - Returns the current value and a setter that applies writes verbatim.
/// - Writes through to `set_item` only with the debounced value (fixed 500 ms
///   window), so the write rate is bounded no matter how often the setter is
///   called. The first write-through fires right after mount, with the seed
///   value.
/// - When the (setter, key) association ends — key change, setter identity
///   change, or teardown — writes `set_item(key, None)` once to clear the
///   slot.
pub fn persisted_state<T>(
    props: &PersistedStateProps,
    key: &str,
    initial_value: T,
) -> (T, impl Fn(T) + 'static)
where
    T: Clone + PartialEq + 'static,
{
    let state: Rc<Signal<T>> = remember_with_key(format!("persisted:{key}"), {
        let get_item = props.get_item.clone();
        let key = key.to_string();
        move || {
            let restored = get_item
                .and_then(|get| get(&key))
                .and_then(|stored| match stored.downcast_ref::<T>() {
                    Some(v) => Some(v.clone()),
                    None => {
                        log::warn!(
                            "persisted_state: value under '{key}' has an unexpected type; \
                             seeding with the initial value instead."
                        );
                        None
                    }
                });
            signal(restored.unwrap_or(initial_value))
        }
    });

    let current = state.get();
    let quiescent = debounced_value(current.clone(), WRITE_QUIESCENCE);

    // Capability identity, for effect keying.
    let setter_id = props
        .set_item
        .as_ref()
        .map(|f| Rc::as_ptr(f) as *const () as usize);

    // Write-through with the quiescent value only; fires once on mount too.
    disposable_effect((setter_id, key.to_string(), quiescent.clone()), {
        let set_item = props.set_item.clone();
        let key = key.to_string();
        move || {
            if let Some(set) = &set_item {
                set(&key, Some(Rc::new(quiescent) as StoredValue));
            }
            Dispose::noop()
        }
    });

    // Clear the slot when this (setter, key) association ends.
    disposable_effect((setter_id, key.to_string()), {
        let set_item = props.set_item.clone();
        let key = key.to_string();
        move || {
            on_unmount(move || {
                if let Some(set) = &set_item {
                    set(&key, None);
                }
            })
        }
    });

    let setter = {
        let state = (*state).clone();
        move |v: T| state.set(v)
    };
    (current, setter)
}
