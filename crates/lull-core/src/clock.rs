use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Source of "now" for timers.
///
/// One clock per thread, matching the single-threaded cooperative model: all
/// timers on a thread read the same clock. Platforms install `SystemClock`;
/// tests install a `TestClock` and advance it by hand so nothing ever sleeps.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

thread_local! {
    static CLOCK: RefCell<Option<Rc<dyn Clock>>> = const { RefCell::new(None) };
}

/// Installs the clock for this thread, replacing any previous one.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = Some(clock));
}

/// Current time per the installed clock (system time when none is installed).
pub fn now() -> Instant {
    CLOCK
        .with(|c| c.borrow().as_ref().map(|c| c.now()))
        .unwrap_or_else(Instant::now)
}

/// A clock driven deterministically.
///
/// Clones share the same instant, so the handle kept by a test and the one
/// installed as the thread clock stay in sync.
#[derive(Clone)]
pub struct TestClock(Rc<Cell<Instant>>);

impl TestClock {
    pub fn start() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    /// Creates a test clock and installs it as this thread's clock.
    pub fn install() -> Self {
        let clock = Self::start();
        set_clock(Rc::new(clock.clone()));
        clock
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.0.set(t);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}
