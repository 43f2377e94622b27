//! Snapshot store: one state value, broadcast to subscribers on every merge.
//!
//! # Notification model
//!
//! Every [`Store::set_state`] / [`Store::update_state`] call merges a
//! [`Patch`] into the state and then synchronously calls each subscriber, in
//! registration order, with its own deep copy of the new state. An empty
//! patch still notifies.
//!
//! # Re-entrancy
//!
//! Updates issued while a notification pass is running (for example from
//! inside a listener) are queued. The outermost call drains the queue after
//! the current pass, one merge and one full pass per queued update, so every
//! subscriber observes the same sequence of snapshots. A queued functional
//! update sees the state as of its own turn.
//!
//! The store is single-threaded (`!Send`). A multi-threaded host needs an
//! explicit mutex or actor boundary around it.
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::{Rc, Weak},
};

use crate::{model::Snapshot, patch::Patch};

type Listener = dyn Fn(Snapshot);

/// Identifier assigned to each registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

struct Subscriber {
    id: SubscriberId,
    listener: Box<Listener>,
    active: Cell<bool>,
}

enum Update {
    Merge(Patch),
    Derive(Box<dyn FnOnce(Snapshot) -> Patch>),
}

struct Shared {
    state: RefCell<Snapshot>,
    subscribers: RefCell<Vec<Rc<Subscriber>>>,
    pending: RefCell<VecDeque<Update>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

/// Restores the `notifying` flag when a pass ends, including on unwind.
struct PassGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> PassGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Owner of the application state.
///
/// Cloning a `Store` yields another handle to the same state.
#[derive(Clone)]
pub struct Store {
    shared: Rc<Shared>,
}

impl Store {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns a private copy of the current state.
    pub fn get_state(&self) -> Snapshot {
        self.shared.state.borrow().clone()
    }

    /// Shallow-merges `patch` into the state and notifies every subscriber.
    pub fn set_state(&self, patch: Patch) {
        self.dispatch(Update::Merge(patch));
    }

    /// Functional form of [`set_state`](Self::set_state).
    ///
    /// `derive` receives a copy of the state current at the time the update
    /// is applied and returns the patch to merge.
    pub fn update_state<F>(&self, derive: F)
    where
        F: FnOnce(Snapshot) -> Patch + 'static,
    {
        self.dispatch(Update::Derive(Box::new(derive)));
    }

    /// Registers `listener` and immediately calls it with the current state.
    ///
    /// The listener is called again, after every listener registered before
    /// it, on each later merge.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Snapshot) + 'static,
    {
        let id = SubscriberId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);

        let subscriber = Rc::new(Subscriber {
            id,
            listener: Box::new(listener),
            active: Cell::new(true),
        });
        self.shared
            .subscribers
            .borrow_mut()
            .push(Rc::clone(&subscriber));

        tracing::debug!(subscriber = id.0, "listener subscribed");

        let outermost = !self.shared.notifying.get();
        {
            let _pass = PassGuard::enter(&self.shared.notifying);
            (subscriber.listener)(self.get_state());
        }
        if outermost {
            self.flush();
        }

        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Removes the listener registered under `id`. Returns `false` if it was
    /// already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        remove_subscriber(&self.shared, id)
    }

    /// Removes every subscriber. State stays readable and writable.
    pub fn dispose(&self) {
        let removed: Vec<_> = self.shared.subscribers.borrow_mut().drain(..).collect();
        for subscriber in &removed {
            subscriber.active.set(false);
        }
        tracing::debug!(removed = removed.len(), "store disposed");
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    fn dispatch(&self, update: Update) {
        self.shared.pending.borrow_mut().push_back(update);
        if self.shared.notifying.get() {
            tracing::trace!(
                queued = self.shared.pending.borrow().len(),
                "update queued during notification"
            );
            return;
        }
        self.flush();
    }

    fn flush(&self) {
        if self.shared.notifying.get() {
            return;
        }
        let _pass = PassGuard::enter(&self.shared.notifying);
        while let Some(update) = self.next_pending() {
            self.apply(update);
        }
    }

    fn next_pending(&self) -> Option<Update> {
        self.shared.pending.borrow_mut().pop_front()
    }

    fn apply(&self, update: Update) {
        let patch = match update {
            Update::Merge(patch) => patch,
            Update::Derive(derive) => derive(self.get_state()),
        };
        let fields: Vec<_> = patch.fields().collect();

        {
            let mut state = self.shared.state.borrow_mut();
            let current = std::mem::take(&mut *state);
            *state = current.merge(patch);
        }

        // Listeners may (un)subscribe while we iterate, so walk a copy of the
        // list and honour removals through the `active` flag.
        let subscribers: Vec<_> = self.shared.subscribers.borrow().clone();
        tracing::debug!(?fields, subscribers = subscribers.len(), "state merged");

        for subscriber in subscribers {
            if subscriber.active.get() {
                (subscriber.listener)(self.get_state());
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.shared.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .field("notifying", &self.shared.notifying.get())
            .finish()
    }
}

/// Registration token returned by [`Store::subscribe`].
///
/// Dropping the token leaves the listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    shared: Weak<Shared>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Deregisters the listener. Returns `false` if the store is gone or the
    /// listener was already removed.
    pub fn unsubscribe(self) -> bool {
        match self.shared.upgrade() {
            Some(shared) => remove_subscriber(&shared, self.id),
            None => false,
        }
    }
}

fn remove_subscriber(shared: &Shared, id: SubscriberId) -> bool {
    let mut subscribers = shared.subscribers.borrow_mut();
    match subscribers.iter().position(|s| s.id == id) {
        Some(index) => {
            let removed = subscribers.remove(index);
            removed.active.set(false);
            tracing::debug!(subscriber = id.0, "listener unsubscribed");
            true
        }
        None => false,
    }
}
