#![forbid(unsafe_code)]

//! Stagehand public facade.
//!
//! Re-exports the coordinator primitives from `stagehand-core` and, with the
//! default `flow` feature, the awaitable modal flow machinery from
//! `stagehand-flow`.
//!
//! # Overview
//!
//! A coordinator is a struct owning the presentation state of one screen
//! region. Capability traits attach operations to it:
//!
//! - [`Navigator`] — push/pop navigation over a [`NavStack`],
//! - [`SheetHost`] / [`CoverHost`] / [`AlertHost`] — modal presentation via
//!   [`PresentSlot`]s,
//! - [`FlowCoordinator`] — run a modal flow and await its result.
//!
//! ```
//! use stagehand::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Sheet { Login }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum LoginOutcome { SignedIn, Cancelled }
//!
//! #[derive(Default)]
//! struct AuthCoordinator {
//!     sheet: PresentSlot<Sheet>,
//!     flow: FlowCell<LoginOutcome>,
//! }
//!
//! impl SheetHost for AuthCoordinator {
//!     type Sheet = Sheet;
//!     fn sheet_slot(&self) -> &PresentSlot<Sheet> { &self.sheet }
//! }
//!
//! impl FlowCoordinator for AuthCoordinator {
//!     type Outcome = LoginOutcome;
//!     fn flow_cell(&self) -> &FlowCell<LoginOutcome> { &self.flow }
//!     fn default_outcome(&self) -> LoginOutcome { LoginOutcome::Cancelled }
//!     fn show_flow(&self) { self.present_sheet(Sheet::Login); }
//!     fn hide_flow(&self) { self.hide_flow_sheet(); }
//! }
//! ```

pub use stagehand_core::{
    Alert, AlertButton, AlertButtonRole, AlertHost, CoverHost, NavStack, Navigator, Observable,
    PresentSlot, SheetHost, Subscription,
};

#[cfg(feature = "flow")]
pub use stagehand_flow::{CoverFlow, FlowCell, FlowCoordinator, FlowMisuse, FlowPhase, SheetFlow};

/// Single-import prelude for coordinator definitions.
pub mod prelude {
    pub use stagehand_core::{
        Alert, AlertButton, AlertButtonRole, AlertHost, CoverHost, NavStack, Navigator,
        PresentSlot, SheetHost,
    };

    #[cfg(feature = "flow")]
    pub use stagehand_flow::{CoverFlow, FlowCell, FlowCoordinator, SheetFlow};
}
