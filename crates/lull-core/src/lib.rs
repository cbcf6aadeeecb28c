//! # Signals, composition, and timers
//!
//! Lull's substrate is a small reactive core in the Compose style: state lives
//! in lifecycle-aware slots, side-effects carry cleanups, and time is a
//! capability you can swap out. There are four main pieces:
//!
//! - `Signal<T>` — observable, reactive value.
//! - `remember*` + `Composition` — slot storage bound to a composable instance.
//! - `effect` / `scoped_effect` / `disposable_effect` — side-effects with cleanup.
//! - `set_timeout` / `set_interval` + `Clock` — a pumped, cancellable timer queue.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use lull_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! A `Composition` owns slot storage and a root scope. Helpers called inside
//! `compose` use `remember` to keep state across recomposition passes:
//!
//! ```rust
//! use lull_core::*;
//!
//! let ui = Composition::new();
//!
//! let first = ui.compose(|| remember(|| 41));
//! let second = ui.compose(|| remember(|| 0)); // same slot, init ignored
//! assert_eq!(*first, 41);
//! assert_eq!(*second, 41);
//! ```
//!
//! - `remember` is order-based: the Nth call in a pass always refers to the
//!   Nth stored value, so call it unconditionally and in a stable order.
//! - `remember_with_key` is key-based and stable across conditional branches.
//!
//! ## Effects and cleanup
//!
//! `disposable_effect` re-runs when its key changes and runs the previous
//! cleanup first; the pending cleanup also runs once on teardown:
//!
//! ```rust
//! use lull_core::*;
//!
//! let ui = Composition::new();
//! ui.compose(|| {
//!     disposable_effect("route", || {
//!         log::info!("entered");
//!         on_unmount(|| log::info!("left"))
//!     });
//! });
//! ui.dispose(); // runs the pending cleanup
//! ```
//!
//! ## Timers
//!
//! Timers never fire on their own: the host loop pumps them, and the current
//! time comes from the thread's installed `Clock`. Tests drive both by hand:
//!
//! ```rust
//! use lull_core::*;
//! use web_time::Duration;
//!
//! let clock = TestClock::install();
//! let fired = signal(false);
//! let _handle = set_timeout(Duration::from_millis(100), {
//!     let fired = fired.clone();
//!     move || fired.set(true)
//! });
//!
//! pump_timers();
//! assert!(!fired.get()); // not due yet
//!
//! clock.advance(Duration::from_millis(100));
//! pump_timers();
//! assert!(fired.get());
//! ```
//!
//! Everything here is single-threaded and cooperative: callbacks run on the
//! pumping thread, never in parallel with composition.

pub mod clock;
pub mod effects;
pub mod effects_ext;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use effects_ext::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use timer::*;
