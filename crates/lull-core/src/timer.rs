use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::clock;

new_key_type! {
    struct TimerKey;
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(Duration, Rc<dyn Fn()>),
}

struct Entry {
    deadline: Instant,
    task: Task,
}

thread_local! {
    static QUEUE: RefCell<SlotMap<TimerKey, Entry>> = RefCell::new(SlotMap::with_key());
}

/// Handle to a pending timer. Generational, so `cancel` after the timer has
/// already fired (or been cancelled) is a harmless no-op.
#[derive(Clone, Copy)]
pub struct TimerHandle(TimerKey);

impl TimerHandle {
    pub fn cancel(self) {
        QUEUE.with(|q| {
            q.borrow_mut().remove(self.0);
        });
    }

    pub fn is_pending(self) -> bool {
        QUEUE.with(|q| q.borrow().contains_key(self.0))
    }
}

/// Schedules `f` to run once, `delay` from now, at the next `pump_timers`
/// whose pump time has reached the deadline. A zero delay therefore still
/// waits for the next pump rather than running in place.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> TimerHandle {
    let deadline = clock::now() + delay;
    let key = QUEUE.with(|q| {
        q.borrow_mut().insert(Entry {
            deadline,
            task: Task::Once(Box::new(f)),
        })
    });
    TimerHandle(key)
}

/// Schedules `f` to run every `period` until cancelled. A pump that arrives
/// late fires the interval once and reschedules from the pump time; missed
/// periods are not replayed.
pub fn set_interval(period: Duration, f: impl Fn() + 'static) -> TimerHandle {
    let deadline = clock::now() + period;
    let key = QUEUE.with(|q| {
        q.borrow_mut().insert(Entry {
            deadline,
            task: Task::Every(period, Rc::new(f)),
        })
    });
    TimerHandle(key)
}

enum Fire {
    Once(Box<dyn FnOnce()>),
    Every(Rc<dyn Fn()>),
}

/// Fires every timer due at the time the pump started, in deadline order, and
/// returns how many fired.
///
/// The host loop calls this once per tick. Callbacks run with the queue
/// unlocked, so they may schedule and cancel timers freely; timers scheduled
/// during a pump are held for the next one, and a cancellation during a pump
/// is honored for entries that have not fired yet.
pub fn pump_timers() -> usize {
    let now = clock::now();

    let mut due: SmallVec<[(Instant, TimerKey); 8]> = QUEUE.with(|q| {
        q.borrow()
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(k, e)| (e.deadline, k))
            .collect()
    });
    due.sort_by_key(|(deadline, _)| *deadline);

    let mut fired = 0;
    for (_, key) in due {
        let fire = QUEUE.with(|q| {
            let mut q = q.borrow_mut();
            let once = match q.get(key) {
                Some(entry) => matches!(entry.task, Task::Once(_)),
                None => return None, // cancelled by an earlier callback
            };
            if once {
                match q.remove(key) {
                    Some(Entry {
                        task: Task::Once(f),
                        ..
                    }) => Some(Fire::Once(f)),
                    _ => None,
                }
            } else {
                match q.get_mut(key) {
                    Some(Entry {
                        deadline,
                        task: Task::Every(period, f),
                    }) => {
                        *deadline = now + *period;
                        Some(Fire::Every(f.clone()))
                    }
                    _ => None,
                }
            }
        });

        match fire {
            Some(Fire::Once(f)) => {
                fired += 1;
                f();
            }
            Some(Fire::Every(f)) => {
                fired += 1;
                f();
            }
            None => {}
        }
    }

    fired
}

/// Earliest pending deadline, for host loops that sleep between pumps.
pub fn next_deadline() -> Option<Instant> {
    QUEUE.with(|q| q.borrow().values().map(|e| e.deadline).min())
}

pub fn pending_timers() -> usize {
    QUEUE.with(|q| q.borrow().len())
}
