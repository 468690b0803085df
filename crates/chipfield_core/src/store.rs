use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chipfield_logging::{chip_trace, chip_warn};

use crate::{reduce, Action, Snapshot};

pub type SubscriptionId = u64;

type Listener = Rc<dyn Fn()>;

/// Single-threaded item store.
///
/// Every dispatch replaces the current snapshot with a new one and then calls
/// each subscriber, in subscription order, before returning. Subscribers get no
/// argument and read the new state through [`Store::get_state`].
pub struct Store {
    state: RefCell<Rc<Snapshot>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<SubscriptionId>,
    closed: Cell<bool>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(Rc::new(Snapshot::new())),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(1),
            closed: Cell::new(false),
        }
    }

    pub fn get_state(&self) -> Rc<Snapshot> {
        Rc::clone(&self.state.borrow())
    }

    pub fn dispatch(&self, action: Action) -> Rc<Snapshot> {
        if self.closed.get() {
            chip_warn!("dispatch after teardown ignored: {:?}", action);
            return self.get_state();
        }

        chip_trace!("dispatch {:?}", action);
        let previous = self.get_state();
        let next = Rc::new(reduce(Snapshot::clone(&previous), action));
        *self.state.borrow_mut() = Rc::clone(&next);

        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
        next
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Tears the store down: drops all subscribers and ignores later dispatches.
    pub fn close(&self) {
        self.closed.set(true);
        self.listeners.borrow_mut().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}
