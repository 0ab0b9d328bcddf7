#![forbid(unsafe_code)]

//! Awaitable modal flows: present a modal, suspend the caller, resume it
//! exactly once with a result when the modal is dismissed.
//!
//! The primitive is a one-shot rendezvous. [`FlowCell`] holds the state of
//! one in-flight flow; [`FlowCoordinator`] wires the cell to a coordinator's
//! presentation side effects so a flow reads like a function call:
//!
//! ```ignore
//! let outcome = coordinator.run_flow().await;
//! match outcome {
//!     ExportOutcome::Saved(path) => open(path),
//!     ExportOutcome::Cancelled => {}
//! }
//! ```
//!
//! Resumption is deferred to the dismissal-completion callback
//! ([`FlowCoordinator::on_flow_dismissed`]) rather than happening in
//! [`FlowCoordinator::finish_flow`], so the awaited value is only observed
//! after the modal has actually finished animating away. A flow dismissed
//! interactively (the user swiping it away with no `finish_flow` call)
//! resumes with the coordinator's configured default outcome.
//!
//! Everything here is single-threaded: the cell is `RefCell`-based and the
//! resumption callback must run on the same executor that polled `run_flow`.

pub mod cell;
pub mod coordinator;

pub use cell::{FlowCell, FlowMisuse, FlowPhase};
pub use coordinator::{CoverFlow, FlowCoordinator, SheetFlow};
