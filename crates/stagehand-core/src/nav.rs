#![forbid(unsafe_code)]

//! Navigation stack: an ordered sequence of pages above an implicit root.
//!
//! [`NavStack`] stores the pushed pages; the root page itself is not part of
//! the stack, so an empty stack means "showing the root". Mutation goes
//! through `&self` (interior mutability) so a coordinator can hold the stack
//! next to suspended flows, and every effective mutation notifies the
//! embedded [`Observable`] for host refresh.
//!
//! # Invariants
//!
//! - Depth never underflows: `pop` and `pop_to_root` at the root are safe
//!   no-ops and do not notify.
//! - Pages come back out in LIFO order.
//!
//! # Failure Modes
//!
//! - `pop()` on an empty stack returns `None` (no panic).
//! - `top()` on an empty stack returns `None`.

use crate::reactive::{Observable, Subscription};

/// Stack of pages pushed above a root page.
#[derive(Debug)]
pub struct NavStack<P> {
    pages: Observable<Vec<P>>,
}

impl<P> Default for NavStack<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> NavStack<P> {
    /// Create an empty stack (showing the root).
    pub fn new() -> Self {
        Self {
            pages: Observable::new(Vec::new()),
        }
    }

    /// Push a page onto the stack.
    pub fn push(&self, page: P) {
        self.pages.update(|pages| pages.push(page));
        tracing::trace!(depth = self.depth(), "nav push");
    }

    /// Pop the top page. No-op at the root.
    pub fn pop(&self) -> Option<P> {
        if self.is_at_root() {
            return None;
        }
        let page = self.pages.update(|pages| pages.pop());
        tracing::trace!(depth = self.depth(), "nav pop");
        page
    }

    /// Pop every page, returning to the root. Returns the number removed.
    pub fn pop_to_root(&self) -> usize {
        if self.is_at_root() {
            return 0;
        }
        let removed = self.pages.update(|pages| {
            let n = pages.len();
            pages.clear();
            n
        });
        tracing::trace!(removed, "nav pop_to_root");
        removed
    }

    /// Number of pages above the root.
    pub fn depth(&self) -> usize {
        self.pages.with(Vec::len)
    }

    /// Whether the stack is showing the root page.
    pub fn is_at_root(&self) -> bool {
        self.pages.with(Vec::is_empty)
    }

    /// Register a change callback fired after every push/pop.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.pages.subscribe(callback)
    }
}

impl<P: Clone> NavStack<P> {
    /// The page currently on top, if any.
    pub fn top(&self) -> Option<P> {
        self.pages.with(|pages| pages.last().cloned())
    }

    /// Snapshot of the pages from bottom to top.
    pub fn pages(&self) -> Vec<P> {
        self.pages.get()
    }
}

/// Capability trait for coordinators that own a [`NavStack`].
///
/// Implement `nav()` and the push/pop operations come for free.
pub trait Navigator {
    /// Page type identifying each destination in the stack.
    type Page;

    /// The stack this coordinator drives.
    fn nav(&self) -> &NavStack<Self::Page>;

    /// Push a page onto the stack.
    fn push(&self, page: Self::Page) {
        self.nav().push(page);
    }

    /// Pop the top page. No-op at the root.
    fn pop(&self) -> Option<Self::Page> {
        self.nav().pop()
    }

    /// Pop every page, returning to the root.
    fn pop_to_root(&self) -> usize {
        self.nav().pop_to_root()
    }
}
