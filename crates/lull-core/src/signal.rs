use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Observable, reactive value. Cloning a `Signal` clones the handle, not the
/// value: all clones read and write the same cell.
///
/// Single-threaded by construction (`Rc<RefCell<..>>`), matching the
/// cooperative render/effect loop the rest of the crate assumes.
/// Subscribers are notified after the cell's borrow is released, each with a
/// snapshot of the new value, so a subscriber may freely read or write the
/// signal it is observing.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Replaces the value and notifies every subscriber, even when the new
    /// value compares equal to the old one.
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
            (inner.value.clone(), inner.subs.clone())
        };
        for (_, s) in subs {
            s(&value);
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            (inner.value.clone(), inner.subs.clone())
        };
        for (_, s) in subs {
            s(&value);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
