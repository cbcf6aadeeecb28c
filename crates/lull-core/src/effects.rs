use std::cell::Cell;
use std::rc::Rc;

/// A cleanup action that runs at most once, no matter how many handles exist
/// or how many times `run` is called.
#[derive(Clone)]
pub struct Dispose(Rc<Cell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(Cell::new(Some(Box::new(f)))))
    }

    /// A cleanup that does nothing, for effects with no teardown.
    pub fn noop() -> Self {
        Self(Rc::new(Cell::new(None)))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.take() {
            f()
        }
    }
}

/// Runs `f()` immediately and returns its `Dispose`.
///
/// The cleanup is also registered with the current scope, if any, so it runs
/// automatically when the owning composition is torn down.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose + 'static,
{
    let d = f();

    if let Some(scope) = crate::scope::current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}

/// Helper to build the cleanup returned from an effect body.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}
