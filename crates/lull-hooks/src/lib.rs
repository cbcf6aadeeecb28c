//! Timer-driven state helpers.
//!
//! Small, composable conveniences over `lull-core`'s signals, effects, and
//! timer queue. Each helper owns at most one pending timer per call site and
//! cancels it on teardown, so nothing fires after the composition that armed
//! it is gone.
//!
//! - [`debounced_value`] — a copy of a value that only updates after the
//!   input has been quiet for a window.
//! - [`delayed_value`] — a flag that flips to `true` once, after a delay.
//! - [`cyclic_value`] — a counter stepping on an interval, wrapping modulo
//!   `end + 1`.
//! - [`persisted_state`] — reactive state seeded from, and debounce-written
//!   back to, a caller-supplied key/value store. The sole consumer of
//!   [`debounced_value`].
//!
//! All helpers are slot-based (`remember`): call them unconditionally and in
//! a stable order inside a composition pass.

pub mod cyclic;
pub mod debounce;
pub mod delayed;
pub mod persisted;
pub mod tests;

pub use cyclic::{DEFAULT_STEP_PAUSE, cyclic_value};
pub use debounce::debounced_value;
pub use delayed::{DEFAULT_REVEAL_DELAY, delayed_value};
pub use persisted::{
    GetItem, PersistedStateProps, SetItem, StoredValue, WRITE_QUIESCENCE, persisted_state,
};
