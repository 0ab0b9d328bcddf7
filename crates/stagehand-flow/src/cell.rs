#![forbid(unsafe_code)]

//! One-shot flow state machine.
//!
//! [`FlowCell`] owns the state of a single in-flight awaited presentation:
//! the suspended waiter and the result staged for it. The phase diagram is
//!
//! ```text
//! Idle --begin()--> Presenting --stage()--> Finished
//!   ^                   |                      |
//!   +------settle()-----+-------settle()------+
//! ```
//!
//! `settle()` is the only way back to `Idle` and the only point where the
//! waiter is released, whether or not a result was staged.
//!
//! # Invariants
//!
//! - At most one waiter is registered at any time.
//! - The waiter is resumed at most once per cycle; after `settle()` both the
//!   waiter and the pending result are cleared, so nothing leaks into the
//!   next cycle.
//!
//! # Failure Modes
//!
//! - `begin()` while a flow is active returns [`FlowMisuse::AlreadyActive`]
//!   and leaves the active flow untouched.
//! - `stage()` / `settle()` with no active flow return
//!   [`FlowMisuse::NotActive`] / `None`. Neither panics.

use std::cell::RefCell;

use thiserror::Error;
use tokio::sync::oneshot;

/// Protocol misuse by the caller. Programmer errors, never runtime
/// conditions: there is no retry or recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowMisuse {
    /// A flow is already presenting; the handle supports one waiter at a time.
    #[error("a flow is already active on this cell")]
    AlreadyActive,
    /// No flow is active, so there is nothing to finish or dismiss.
    #[error("no flow is active on this cell")]
    NotActive,
}

/// Phase of the flow cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    /// No flow in flight.
    #[default]
    Idle,
    /// Waiter registered, presentation showing, no result staged yet.
    Presenting,
    /// Result staged, dismissal triggered, waiting for the dismissal
    /// callback to resume the waiter.
    Finished,
}

struct Inner<R> {
    phase: FlowPhase,
    waiter: Option<oneshot::Sender<R>>,
    pending: Option<R>,
}

/// State of one in-flight awaited presentation.
///
/// Owned by the coordinator driving the presentation. Not `Clone`: the cell
/// is the single rendezvous point between the suspended caller and the
/// dismissal callback.
pub struct FlowCell<R> {
    inner: RefCell<Inner<R>>,
}

impl<R> Default for FlowCell<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for FlowCell<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FlowCell")
            .field("phase", &inner.phase)
            .field("staged", &inner.pending.is_some())
            .finish()
    }
}

impl<R> FlowCell<R> {
    /// Create an idle cell.
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                phase: FlowPhase::Idle,
                waiter: None,
                pending: None,
            }),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> FlowPhase {
        self.inner.borrow().phase
    }

    /// `Idle -> Presenting`: register the waiter and hand back the receiver
    /// the caller suspends on.
    ///
    /// Fails with [`FlowMisuse::AlreadyActive`] if a waiter is already
    /// registered; the active flow is left untouched.
    pub fn begin(&self) -> Result<oneshot::Receiver<R>, FlowMisuse> {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != FlowPhase::Idle {
            return Err(FlowMisuse::AlreadyActive);
        }
        let (tx, rx) = oneshot::channel();
        inner.phase = FlowPhase::Presenting;
        inner.waiter = Some(tx);
        inner.pending = None;
        tracing::trace!("flow begin");
        Ok(rx)
    }

    /// `Presenting -> Finished`: stage the result the waiter will be resumed
    /// with once dismissal completes. Staging again overwrites (last write
    /// wins).
    ///
    /// Fails with [`FlowMisuse::NotActive`] when no flow is in flight.
    pub fn stage(&self, result: R) -> Result<(), FlowMisuse> {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == FlowPhase::Idle {
            return Err(FlowMisuse::NotActive);
        }
        inner.phase = FlowPhase::Finished;
        inner.pending = Some(result);
        tracing::trace!("flow stage");
        Ok(())
    }

    /// `Presenting | Finished -> Idle`: take the waiter and the staged
    /// result, clearing both.
    ///
    /// Returns `None` when no flow is in flight (dismiss-without-start or a
    /// second dismissal callback in one cycle).
    pub fn settle(&self) -> Option<(oneshot::Sender<R>, Option<R>)> {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == FlowPhase::Idle {
            return None;
        }
        inner.phase = FlowPhase::Idle;
        let pending = inner.pending.take();
        let waiter = inner.waiter.take()?;
        tracing::trace!(staged = pending.is_some(), "flow settle");
        Some((waiter, pending))
    }
}
