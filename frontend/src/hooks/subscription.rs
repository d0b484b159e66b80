/// Handle for a live browser listener or observer.
///
/// The teardown runs exactly once: either through [`Subscription::unsubscribe`]
/// or when the handle is dropped, whichever comes first.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Subscription that bumps a shared counter when torn down.
    pub(crate) fn counting() -> (Subscription, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        (sub, released)
    }

    #[test]
    fn unsubscribe_runs_teardown_once() {
        let (sub, released) = counting();
        sub.unsubscribe();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_runs_teardown() {
        let (sub, released) = counting();
        assert_eq!(released.get(), 0);
        drop(sub);
        assert_eq!(released.get(), 1);
    }
}
