#![forbid(unsafe_code)]

//! Presentation slot: single-item "currently presented" storage.
//!
//! One [`PresentSlot`] exists per modal presentation kind (sheet, full-screen
//! cover, alert). Semantics are last-write-wins: presenting while something
//! is already displayed replaces it, and the host layer is expected to react
//! to the change notification by swapping the visible modal.
//!
//! The slot only stores state. Animating the presentation in and out, and
//! reporting when dismissal is visually complete, is the host framework's
//! job; it calls back into the owning coordinator (see the dismissed hooks on
//! [`crate::host::SheetHost`] and friends) once the item is fully gone.

use crate::reactive::{Observable, Subscription};

/// Optional "currently presented item" storage for one presentation kind.
#[derive(Debug)]
pub struct PresentSlot<T> {
    item: Observable<Option<T>>,
}

impl<T> Default for PresentSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PresentSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            item: Observable::new(None),
        }
    }

    /// Present `item`, replacing whatever was displayed (last write wins).
    pub fn present(&self, item: T) {
        self.item.update(|slot| *slot = Some(item));
        tracing::trace!("slot present");
    }

    /// Clear the slot, returning the item that was displayed.
    ///
    /// No-op (and no notification) when the slot is already empty.
    pub fn dismiss(&self) -> Option<T> {
        if !self.is_presented() {
            return None;
        }
        let item = self.item.update(Option::take);
        tracing::trace!("slot dismiss");
        item
    }

    /// Whether an item is currently presented.
    pub fn is_presented(&self) -> bool {
        self.item.with(Option::is_some)
    }

    /// Register a change callback fired after every present/dismiss.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.item.subscribe(callback)
    }
}

impl<T: Clone> PresentSlot<T> {
    /// Clone out the currently presented item, if any.
    pub fn current(&self) -> Option<T> {
        self.item.with(Clone::clone)
    }
}
