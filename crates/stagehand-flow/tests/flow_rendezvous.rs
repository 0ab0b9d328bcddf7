#![forbid(unsafe_code)]

//! End-to-end rendezvous scenarios for awaited modal flows.
//!
//! Coordinators are single-threaded (`Rc`/`RefCell`), so every scenario runs
//! on a current-thread runtime inside a `LocalSet`.

use std::cell::RefCell;
use std::rc::Rc;

use stagehand_core::{NavStack, Navigator, PresentSlot, SheetHost};
use stagehand_flow::{FlowCell, FlowCoordinator, FlowPhase, SheetFlow};
use tokio::task::{LocalSet, spawn_local, yield_now};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    PickFormat,
    PickDestination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sheet {
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExportOutcome {
    Saved(String),
    Cancelled,
}

/// Coordinator driving an export flow presented as a sheet.
#[derive(Default)]
struct ExportCoordinator {
    nav: NavStack<Page>,
    sheet: PresentSlot<Sheet>,
    flow: FlowCell<ExportOutcome>,
    events: RefCell<Vec<&'static str>>,
}

impl ExportCoordinator {
    fn log(&self, event: &'static str) {
        self.events.borrow_mut().push(event);
    }
}

impl Navigator for ExportCoordinator {
    type Page = Page;
    fn nav(&self) -> &NavStack<Page> {
        &self.nav
    }
}

impl SheetHost for ExportCoordinator {
    type Sheet = Sheet;
    fn sheet_slot(&self) -> &PresentSlot<Sheet> {
        &self.sheet
    }
}

impl FlowCoordinator for ExportCoordinator {
    type Outcome = ExportOutcome;

    fn flow_cell(&self) -> &FlowCell<ExportOutcome> {
        &self.flow
    }

    fn default_outcome(&self) -> ExportOutcome {
        ExportOutcome::Cancelled
    }

    fn show_flow(&self) {
        self.present_sheet(Sheet::Export);
    }

    fn hide_flow(&self) {
        self.hide_flow_sheet();
    }

    fn reset_after_flow(&self) {
        self.pop_to_root();
        self.log("reset");
    }
}

async fn with_coordinator<F>(scenario: F)
where
    F: AsyncFnOnce(Rc<ExportCoordinator>),
{
    let local = LocalSet::new();
    local
        .run_until(scenario(Rc::new(ExportCoordinator::default())))
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn finish_then_dismiss_resumes_with_staged_outcome() {
    with_coordinator(async |coord| {
        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        // The flow presented its sheet and is suspended.
        assert_eq!(coord.sheet.current(), Some(Sheet::Export));
        assert_eq!(coord.flow.phase(), FlowPhase::Presenting);

        coord.finish_flow(ExportOutcome::Saved("/tmp/report.pdf".into()));
        // Dismissal triggered, result staged, waiter not yet resumed.
        assert!(!coord.sheet.is_presented());
        assert_eq!(coord.flow.phase(), FlowPhase::Finished);
        assert!(!runner.is_finished());

        coord.sheet_flow_dismissed();
        let outcome = runner.await.unwrap();
        assert_eq!(outcome, ExportOutcome::Saved("/tmp/report.pdf".into()));
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn interactive_dismissal_resumes_with_default() {
    with_coordinator(async |coord| {
        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        // The user swipes the sheet away: the host clears the slot and
        // reports dismissal, with no finish_flow call.
        coord.dismiss_sheet();
        coord.sheet_flow_dismissed();

        assert_eq!(runner.await.unwrap(), ExportOutcome::Cancelled);
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn resumption_happens_only_after_dismissal_callback() {
    with_coordinator(async |coord| {
        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        coord.finish_flow(ExportOutcome::Saved("x".into()));
        yield_now().await;
        yield_now().await;
        // Logical completion is not visual completion.
        assert!(!runner.is_finished());

        coord.sheet_flow_dismissed();
        yield_now().await;
        assert!(runner.is_finished());
        assert_eq!(runner.await.unwrap(), ExportOutcome::Saved("x".into()));
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn cycle_leaves_no_state_behind() {
    with_coordinator(async |coord| {
        coord.push(Page::PickFormat);
        coord.push(Page::PickDestination);

        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        coord.finish_flow(ExportOutcome::Saved("y".into()));
        coord.sheet_flow_dismissed();
        runner.await.unwrap();

        // Waiter and pending slot cleared, reset hook ran exactly once and
        // returned the stack to its root.
        assert_eq!(coord.flow.phase(), FlowPhase::Idle);
        assert!(!coord.sheet.is_presented());
        assert!(coord.nav.is_at_root());
        assert_eq!(*coord.events.borrow(), vec!["reset"]);
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn reset_runs_once_per_cycle_including_interactive() {
    with_coordinator(async |coord| {
        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;
        coord.dismiss_sheet();
        coord.sheet_flow_dismissed();
        runner.await.unwrap();

        assert_eq!(*coord.events.borrow(), vec!["reset"]);
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn coordinator_is_reusable_across_cycles() {
    with_coordinator(async |coord| {
        // First cycle finishes explicitly.
        let first = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;
        coord.finish_flow(ExportOutcome::Saved("a".into()));
        coord.sheet_flow_dismissed();
        assert_eq!(first.await.unwrap(), ExportOutcome::Saved("a".into()));

        // Second cycle is dismissed interactively; the first cycle's staged
        // result must not leak into it.
        let second = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;
        coord.dismiss_sheet();
        coord.sheet_flow_dismissed();
        assert_eq!(second.await.unwrap(), ExportOutcome::Cancelled);

        assert_eq!(*coord.events.borrow(), vec!["reset", "reset"]);
    })
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn finish_overwrite_keeps_last_result() {
    with_coordinator(async |coord| {
        let runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        coord.finish_flow(ExportOutcome::Saved("first".into()));
        coord.finish_flow(ExportOutcome::Saved("second".into()));
        coord.sheet_flow_dismissed();

        assert_eq!(runner.await.unwrap(), ExportOutcome::Saved("second".into()));
    })
    .await;
}

#[cfg(debug_assertions)]
#[tokio::test(flavor = "current_thread")]
#[should_panic(expected = "run_flow while a flow is active")]
async fn second_run_flow_asserts_in_debug() {
    with_coordinator(async |coord| {
        let _runner = {
            let c = Rc::clone(&coord);
            spawn_local(async move { c.run_flow().await })
        };
        yield_now().await;

        let _ = coord.run_flow().await;
    })
    .await;
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "on_flow_dismissed without an active flow")]
fn dismiss_without_start_asserts_in_debug() {
    let coord = ExportCoordinator::default();
    coord.on_flow_dismissed();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "finish_flow without an active flow")]
fn finish_without_start_asserts_in_debug() {
    let coord = ExportCoordinator::default();
    coord.finish_flow(ExportOutcome::Cancelled);
}
