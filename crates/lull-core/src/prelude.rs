pub use crate::clock::{Clock, SystemClock, TestClock, now, set_clock};
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::effects_ext::disposable_effect;
pub use crate::runtime::{
    Composition, remember, remember_state, remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{
    TimerHandle, next_deadline, pending_timers, pump_timers, set_interval, set_timeout,
};
