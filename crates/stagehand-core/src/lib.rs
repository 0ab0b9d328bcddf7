#![forbid(unsafe_code)]

//! Core coordinator primitives for Stagehand.
//!
//! A coordinator is a plain struct that owns the presentation state of one
//! screen region: a [`NavStack`] of pages, plus one [`PresentSlot`] per modal
//! presentation kind (sheet, full-screen cover, alert). Capability traits
//! ([`Navigator`], [`SheetHost`], [`CoverHost`], [`AlertHost`]) attach the
//! standard operations to whatever struct holds the state, so a coordinator
//! composes exactly the capabilities it needs instead of inheriting a
//! kitchen-sink base type.
//!
//! All state is single-threaded (`Rc`/`RefCell` internally) and mutated
//! through `&self`, so a coordinator can be shared between the host UI layer
//! and suspended async flows without fighting the borrow checker.
//!
//! Change notification flows through [`Observable`]: the host framework
//! subscribes once and re-renders whenever a stack or slot mutates.

pub mod alert;
pub mod host;
pub mod nav;
pub mod reactive;
pub mod slot;

pub use alert::{Alert, AlertButton, AlertButtonRole};
pub use host::{AlertHost, CoverHost, SheetHost};
pub use nav::{NavStack, Navigator};
pub use reactive::{Observable, Subscription};
pub use slot::PresentSlot;
