#![forbid(unsafe_code)]

//! Change-tracking value cell for driving host-framework refresh.
//!
//! [`Observable<T>`] wraps a value in `Rc<RefCell<..>>` for single-threaded
//! shared ownership. Subscribers are stored as `Weak` callbacks and cleaned
//! up lazily during notification, so dropping a [`Subscription`] is enough to
//! unsubscribe.
//!
//! # Invariants
//!
//! 1. The version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order, after the new value is
//!    stored (a callback that reads the observable sees the new value).
//! 3. `set()` with a value equal to the current one is a no-op: no version
//!    bump, no notifications.
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//!
//! # Failure Modes
//!
//! - A callback that panics propagates to the caller of the mutating method.
//! - Calling `set()` from inside a callback is allowed; the inner borrow is
//!   released before callbacks run.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<dyn Fn()>>,
}

/// A shared, version-tracked value with change notification.
///
/// `Clone` is shallow: clones share the same underlying cell.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Create a new observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Read the current value through a closure without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Mutate the value in place and notify subscribers.
    ///
    /// Always bumps the version: `update` cannot tell whether the closure
    /// changed anything. Use [`set`](Self::set) when equality can be checked.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = {
            let mut inner = self.inner.borrow_mut();
            let out = f(&mut inner.value);
            inner.version += 1;
            out
        };
        self.notify();
        out
    }

    /// Current version counter. Monotonically increasing per mutation.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Register a change callback, notified after every mutation.
    ///
    /// The callback stays registered as long as the returned [`Subscription`]
    /// is alive.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let strong: Rc<dyn Fn()> = Rc::new(callback);
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&strong));
        Subscription { _keepalive: strong }
    }

    fn notify(&self) {
        // Upgrade outside the borrow so callbacks may re-enter the cell.
        let alive: Vec<Rc<dyn Fn()>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in alive {
            callback();
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replace the value, skipping notification when nothing changed.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }
}

/// RAII guard for an [`Observable`] subscription.
///
/// The callback is dropped (and thus unsubscribed) when this guard is.
pub struct Subscription {
    _keepalive: Rc<dyn Fn()>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Subscription")
    }
}
