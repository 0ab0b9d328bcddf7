#![forbid(unsafe_code)]

//! Capability traits attaching presentation operations to coordinator structs.
//!
//! Each trait covers one presentation kind and requires only an accessor for
//! the backing [`PresentSlot`]; the present/dismiss operations are provided.
//! A coordinator adopts exactly the capabilities it needs:
//!
//! ```
//! use stagehand_core::{Alert, AlertHost, PresentSlot, SheetHost};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Sheet { Settings }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AlertItem { SaveFailed }
//!
//! #[derive(Default)]
//! struct AppCoordinator {
//!     sheet: PresentSlot<Sheet>,
//!     alert: PresentSlot<AlertItem>,
//! }
//!
//! impl SheetHost for AppCoordinator {
//!     type Sheet = Sheet;
//!     fn sheet_slot(&self) -> &PresentSlot<Sheet> { &self.sheet }
//! }
//!
//! impl AlertHost for AppCoordinator {
//!     type AlertItem = AlertItem;
//!     fn alert_slot(&self) -> &PresentSlot<AlertItem> { &self.alert }
//!     fn build_alert(&self, _item: &AlertItem) -> Alert {
//!         Alert::info("Save failed", "Could not write the file.")
//!     }
//! }
//!
//! let coordinator = AppCoordinator::default();
//! coordinator.present_sheet(Sheet::Settings);
//! assert!(coordinator.sheet_slot().is_presented());
//! ```
//!
//! The `on_*_dismissed` hooks are invoked by the host layer once a dismissal
//! is visually complete, for any reason (programmatic dismiss or the user
//! swiping the modal away). Flow-carrying coordinators forward them to the
//! flow resumption point (see `stagehand-flow`).

use crate::alert::Alert;
use crate::slot::PresentSlot;

/// Capability: coordinator presents modal sheets.
pub trait SheetHost {
    /// Item type identifying each sheet this coordinator can present.
    type Sheet;

    /// The slot backing sheet presentation.
    fn sheet_slot(&self) -> &PresentSlot<Self::Sheet>;

    /// Present a sheet, replacing any current one.
    fn present_sheet(&self, sheet: Self::Sheet) {
        self.sheet_slot().present(sheet);
    }

    /// Dismiss the current sheet, if any.
    fn dismiss_sheet(&self) {
        self.sheet_slot().dismiss();
    }

    /// Called by the host layer once the sheet is fully dismissed.
    ///
    /// Default: empty. Override to run work that depends on the sheet being
    /// completely gone.
    fn on_sheet_dismissed(&self) {}
}

/// Capability: coordinator presents full-screen covers.
pub trait CoverHost {
    /// Item type identifying each cover this coordinator can present.
    type Cover;

    /// The slot backing cover presentation.
    fn cover_slot(&self) -> &PresentSlot<Self::Cover>;

    /// Present a cover, replacing any current one.
    fn present_cover(&self, cover: Self::Cover) {
        self.cover_slot().present(cover);
    }

    /// Dismiss the current cover, if any.
    fn dismiss_cover(&self) {
        self.cover_slot().dismiss();
    }

    /// Called by the host layer once the cover is fully dismissed.
    fn on_cover_dismissed(&self) {}
}

/// Capability: coordinator presents alerts.
pub trait AlertHost {
    /// Item type identifying each alert this coordinator can present.
    type AlertItem;

    /// The slot backing alert presentation.
    fn alert_slot(&self) -> &PresentSlot<Self::AlertItem>;

    /// Build the displayable [`Alert`] for an item.
    fn build_alert(&self, item: &Self::AlertItem) -> Alert;

    /// Present an alert, replacing any current one.
    fn present_alert(&self, item: Self::AlertItem) {
        self.alert_slot().present(item);
    }

    /// Dismiss the current alert, if any.
    fn dismiss_alert(&self) {
        self.alert_slot().dismiss();
    }
}
