//! State container and subscription bus.
//!
//! [`Store`] owns the single live [`StoreState`] snapshot and the
//! subscriber list. Mutations go through [`Store::update`] or
//! [`Store::try_update`]: the snapshot is deep-cloned, the mutator runs
//! against the clone, the clone is swapped in, and all subscribers are
//! notified synchronously with the new snapshot. Subscribers never see a
//! half-applied update.
//!
//! Execution is single-threaded and cooperative; `&mut self` on every
//! mutating method statically rules out reentrant mutation during
//! notification.

use monsoon_core::{CartLine, Category, Order, Product, User};

use crate::catalog::CatalogFilters;

/// The complete application state at one instant.
///
/// Replaced wholesale on each mutation; treat a borrowed snapshot as
/// immutable.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    /// Loaded categories (immutable reference data).
    pub categories: Vec<Category>,
    /// Loaded products (immutable reference data).
    pub products: Vec<Product>,
    /// Cart lines, at most one per product id.
    pub cart: Vec<CartLine>,
    /// Order history, most recent first.
    pub orders: Vec<Order>,
    /// Current user, if logged in.
    pub user: Option<User>,
    /// Transient catalog filters.
    pub filters: CatalogFilters,
}

/// Handle identifying one subscription.
///
/// Each call to [`Store::subscribe`] returns a fresh token, so the same
/// closure subscribed twice yields two independent registrations and
/// [`Store::unsubscribe`] removes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

type Callback = Box<dyn FnMut(&StoreState)>;

struct Subscriber {
    token: SubscriptionToken,
    callback: Callback,
}

/// The observable state store.
///
/// Owned by the composition root and passed by `&mut` reference to
/// whatever needs it.
#[derive(Default)]
pub struct Store {
    state: StoreState,
    subscribers: Vec<Subscriber>,
    next_token: u64,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing snapshot.
    #[must_use]
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// The current snapshot.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply an infallible mutation.
    ///
    /// Clones the snapshot, runs `mutate` on the clone, swaps it in, and
    /// notifies every subscriber with the new snapshot in subscription
    /// order.
    pub fn update(&mut self, mutate: impl FnOnce(&mut StoreState)) {
        let mut next = self.state.clone();
        mutate(&mut next);
        self.commit(next);
    }

    /// Apply a fallible mutation.
    ///
    /// If `mutate` returns `Err`, the clone is discarded: the live
    /// snapshot is untouched and no subscriber runs.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the mutator returns.
    pub fn try_update<T, E>(
        &mut self,
        mutate: impl FnOnce(&mut StoreState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut next = self.state.clone();
        let value = mutate(&mut next)?;
        self.commit(next);
        Ok(value)
    }

    /// Register a callback invoked after every committed mutation.
    ///
    /// Callbacks run synchronously, in subscription order, with no
    /// deduplication and no error isolation (a panicking subscriber
    /// unwinds through the notify loop).
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreState) + 'static) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push(Subscriber {
            token,
            callback: Box::new(callback),
        });
        token
    }

    /// Remove the registration identified by `token`.
    ///
    /// Returns `false` if the token was already removed (or never
    /// existed).
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.token != token);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn commit(&mut self, next: StoreState) {
        self.state = next;
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.state);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use monsoon_core::{CartLine, ProductId};

    use super::*;

    #[test]
    fn test_update_swaps_and_notifies() {
        let mut store = Store::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.cart.len()));

        store.update(|state| state.cart.push(CartLine::single(ProductId::new("p1"))));
        store.update(|state| state.cart.push(CartLine::single(ProductId::new("p2"))));

        assert_eq!(store.state().cart.len(), 2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_subscriber_sees_full_snapshot() {
        // A single update touching two fields must be visible as one
        // atomic change.
        let mut store = Store::new();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&observed);
        store.subscribe(move |state| {
            sink.borrow_mut().push((state.cart.len(), state.orders.len()));
        });

        store.update(|state| {
            state.cart.push(CartLine::single(ProductId::new("p1")));
            state.cart.clear();
            state.orders.clear();
        });

        assert_eq!(*observed.borrow(), vec![(0, 0)]);
    }

    #[test]
    fn test_try_update_error_discards_clone() {
        let mut store = Store::new();
        let calls = Rc::new(RefCell::new(0_u32));

        let sink = Rc::clone(&calls);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        let result: Result<(), &str> = store.try_update(|state| {
            state.cart.push(CartLine::single(ProductId::new("p1")));
            Err("rejected")
        });

        assert_eq!(result, Err("rejected"));
        assert!(store.state().cart.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_notification_order_is_subscription_order() {
        let mut store = Store::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            store.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        store.update(|_| {});
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_same_closure_subscribed_twice_is_distinct() {
        let mut store = Store::new();
        let calls = Rc::new(RefCell::new(0_u32));

        let make = |sink: Rc<RefCell<u32>>| move |_: &StoreState| *sink.borrow_mut() += 1;
        let first = store.subscribe(make(Rc::clone(&calls)));
        let second = store.subscribe(make(Rc::clone(&calls)));
        assert_ne!(first, second);

        store.update(|_| {});
        assert_eq!(*calls.borrow(), 2);

        assert!(store.unsubscribe(first));
        store.update(|_| {});
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn test_unsubscribe_stale_token_is_noop() {
        let mut store = Store::new();
        let token = store.subscribe(|_| {});

        assert!(store.unsubscribe(token));
        assert!(!store.unsubscribe(token));
        assert_eq!(store.subscriber_count(), 0);
    }
}
