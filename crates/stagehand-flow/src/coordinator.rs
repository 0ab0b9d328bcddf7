#![forbid(unsafe_code)]

//! The [`FlowCoordinator`] trait: wiring a [`FlowCell`] to a coordinator's
//! presentation side effects.
//!
//! A coordinator implements the four required methods (cell accessor, default
//! outcome, show, hide) and gets the whole flow protocol provided:
//!
//! - [`run_flow`](FlowCoordinator::run_flow) presents and suspends,
//! - [`finish_flow`](FlowCoordinator::finish_flow) stages a result and
//!   triggers dismissal,
//! - [`on_flow_dismissed`](FlowCoordinator::on_flow_dismissed) resumes the
//!   waiter once the host reports dismissal visually complete.
//!
//! Misuse (double start, finish or dismiss with no active flow) asserts in
//! development builds and degrades to a logged no-op in release builds.
//!
//! Callers must serialize flows per coordinator: there is no reentrancy
//! guard beyond the rejection of the second `run_flow`.

use stagehand_core::{CoverHost, SheetHost};

use crate::cell::FlowCell;

/// A coordinator that can run one awaited modal flow at a time.
#[allow(async_fn_in_trait)]
pub trait FlowCoordinator {
    /// Result produced when the flow completes. An application-defined value
    /// type; encode cancellation as one of its cases if callers need to
    /// distinguish it (e.g. a `Cancelled` variant).
    type Outcome;

    /// The cell holding this coordinator's in-flight flow state.
    fn flow_cell(&self) -> &FlowCell<Self::Outcome>;

    /// Outcome substituted when the flow is dismissed interactively, without
    /// a preceding [`finish_flow`](Self::finish_flow).
    fn default_outcome(&self) -> Self::Outcome;

    /// Presentation side effect: show the modal carrying the flow.
    ///
    /// Typically `self.present_sheet(..)` or `self.present_cover(..)`.
    fn show_flow(&self);

    /// Presentation side effect: hide the modal carrying the flow.
    ///
    /// Typically [`SheetFlow::hide_flow_sheet`] or
    /// [`CoverFlow::hide_flow_cover`].
    fn hide_flow(&self);

    /// Reset hook, invoked once per completed cycle after the waiter has
    /// been resumed. Typically returns a navigation stack to its root.
    fn reset_after_flow(&self) {}

    /// Start the flow and suspend until it is dismissed.
    ///
    /// Registers the calling task as the waiter, triggers
    /// [`show_flow`](Self::show_flow), and suspends. Resumed exactly once,
    /// by [`on_flow_dismissed`](Self::on_flow_dismissed).
    ///
    /// Starting while a flow is already active is a protocol violation:
    /// asserts in development builds; in release builds the call logs,
    /// returns [`default_outcome`](Self::default_outcome) immediately, and
    /// leaves the active flow undisturbed.
    async fn run_flow(&self) -> Self::Outcome {
        let rx = match self.flow_cell().begin() {
            Ok(rx) => rx,
            Err(err) => {
                debug_assert!(false, "run_flow while a flow is active: {err}");
                tracing::warn!(%err, "run_flow rejected");
                return self.default_outcome();
            }
        };
        self.show_flow();
        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => {
                // Cell dropped mid-flight; the flow can never settle.
                tracing::warn!("flow channel closed before settling");
                self.default_outcome()
            }
        }
    }

    /// Finish the flow with `outcome` and trigger dismissal.
    ///
    /// Does not resume the waiter: resumption waits for
    /// [`on_flow_dismissed`](Self::on_flow_dismissed), so the awaited value
    /// is observed only after the modal has visually gone away. Calling
    /// `finish_flow` again before dismissal overwrites the staged outcome.
    fn finish_flow(&self, outcome: Self::Outcome) {
        match self.flow_cell().stage(outcome) {
            Ok(()) => self.hide_flow(),
            Err(err) => {
                debug_assert!(false, "finish_flow without an active flow: {err}");
                tracing::warn!(%err, "finish_flow ignored");
            }
        }
    }

    /// Dismissal-completion callback; the single resumption point.
    ///
    /// Invoke from the host layer once the modal is fully dismissed, for any
    /// reason. Resumes the waiter with the staged outcome if
    /// [`finish_flow`](Self::finish_flow) ran, otherwise with
    /// [`default_outcome`](Self::default_outcome) (interactive dismissal);
    /// clears the cell; then runs
    /// [`reset_after_flow`](Self::reset_after_flow).
    ///
    /// A second invocation in one cycle finds the cell idle: asserts in
    /// development builds, silent no-op in release builds.
    fn on_flow_dismissed(&self) {
        let Some((waiter, pending)) = self.flow_cell().settle() else {
            debug_assert!(false, "on_flow_dismissed without an active flow");
            tracing::warn!("on_flow_dismissed ignored: no active flow");
            return;
        };
        let interactive = pending.is_none();
        let outcome = pending.unwrap_or_else(|| self.default_outcome());
        if waiter.send(outcome).is_err() {
            // The awaiting task was dropped; nothing left to resume.
            tracing::debug!("flow waiter gone before resumption");
        }
        tracing::debug!(interactive, "flow dismissed");
        self.reset_after_flow();
    }
}

/// Glue for coordinators whose flow rides a sheet.
///
/// Blanket-implemented for every `FlowCoordinator + SheetHost`. Use
/// [`hide_flow_sheet`](Self::hide_flow_sheet) as the
/// [`FlowCoordinator::hide_flow`] body and wire the host's sheet-dismissed
/// callback to [`sheet_flow_dismissed`](Self::sheet_flow_dismissed).
pub trait SheetFlow: FlowCoordinator + SheetHost {
    /// Standard `hide_flow` body: dismiss the sheet.
    fn hide_flow_sheet(&self) {
        self.dismiss_sheet();
    }

    /// Forward the sheet's dismissal-completion callback to the flow.
    fn sheet_flow_dismissed(&self) {
        self.on_flow_dismissed();
    }
}

impl<T: FlowCoordinator + SheetHost> SheetFlow for T {}

/// Glue for coordinators whose flow rides a full-screen cover.
///
/// Blanket-implemented for every `FlowCoordinator + CoverHost`.
pub trait CoverFlow: FlowCoordinator + CoverHost {
    /// Standard `hide_flow` body: dismiss the cover.
    fn hide_flow_cover(&self) {
        self.dismiss_cover();
    }

    /// Forward the cover's dismissal-completion callback to the flow.
    fn cover_flow_dismissed(&self) {
        self.on_flow_dismissed();
    }
}

impl<T: FlowCoordinator + CoverHost> CoverFlow for T {}
