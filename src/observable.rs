use tokio::sync::watch;

/// Latest-value channel: every `accept` replaces the stored value and wakes
/// subscribers, and a new subscriber starts from the current value.
///
/// Publishing never fails, even with no live receivers.
#[derive(Debug)]
pub struct Relay<T> {
    tx: watch::Sender<T>,
}

impl<T> Relay<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn accept(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the stored value in place and notify subscribers.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    pub fn borrow(&self) -> watch::Ref<'_, T> {
        self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Relay<T> {
    pub fn value(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Relay<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
