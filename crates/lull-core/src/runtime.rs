use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// One live instance of a composable tree: its slot storage plus the root
/// scope that collects effect cleanups.
///
/// `compose` runs a single recomposition pass; slots persist between passes,
/// so `remember` calls resolve to the same storage every time. `dispose`
/// (or dropping the instance) tears it down and runs every pending cleanup
/// once. A fresh `Composition` shares nothing with a previous one.
pub struct Composition {
    composer: RefCell<Composer>,
    scope: Scope,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            composer: RefCell::new(Composer::default()),
            scope: Scope::new(),
        }
    }

    /// Runs one recomposition pass with this instance's slots installed.
    pub fn compose<R>(&self, f: impl FnOnce() -> R) -> R {
        COMPOSER.with(|c| {
            std::mem::swap(&mut *c.borrow_mut(), &mut *self.composer.borrow_mut());
            c.borrow_mut().cursor = 0;
        });
        let out = self.scope.run(f);
        COMPOSER.with(|c| {
            std::mem::swap(&mut *c.borrow_mut(), &mut *self.composer.borrow_mut());
        });
        out
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Tears the instance down: runs all pending cleanups, drops all slots.
    pub fn dispose(self) {
        self.scope.dispose();
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            // replace (else panics)
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            } else {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}
