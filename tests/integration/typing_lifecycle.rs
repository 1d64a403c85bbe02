// Typing tracker lifecycle tests.
// Run under paused time: the 1s tick interval auto-advances, so these are
// deterministic and fast.

use chatterm::app::{TICK_INTERVAL, TypingTracker, ViewEvent};
use chatterm::chat::ChatDirectory;
use pretty_assertions::assert_eq;
use std::rc::Rc;
use tokio::sync::mpsc;

use crate::helpers::test_directory;

fn expect_footer(event: Option<ViewEvent>) -> Option<String> {
    match event {
        Some(ViewEvent::TypingFooter(footer)) => footer,
        other => panic!("expected a footer event, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn footer_follows_the_typing_set() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let directory = test_directory();
            let shared: Rc<dyn ChatDirectory> = Rc::clone(&directory);
            let (tx, mut rx) = mpsc::unbounded_channel();

            directory.set_typing(&["U1"]);
            let mut tracker = TypingTracker::spawn("C1".to_owned(), shared, tx);

            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer.as_deref(), Some("alice is typing..."));

            directory.set_typing(&["U1", "U2"]);
            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer.as_deref(), Some("alice and bob are typing..."));

            directory.set_typing(&[]);
            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer, None);

            tracker.stop().await;
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn unchanged_footer_sends_no_events() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let directory = test_directory();
            let shared: Rc<dyn ChatDirectory> = Rc::clone(&directory);
            let (tx, mut rx) = mpsc::unbounded_channel();

            directory.set_typing(&["U1"]);
            let mut tracker = TypingTracker::spawn("C1".to_owned(), shared, tx);
            let _ = expect_footer(rx.recv().await);

            // Several more ticks with the same set: silence.
            tokio::time::sleep(TICK_INTERVAL * 4).await;
            assert!(rx.try_recv().is_err());

            tracker.stop().await;
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn unresolvable_users_drop_from_the_footer() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let directory = test_directory();
            let shared: Rc<dyn ChatDirectory> = Rc::clone(&directory);
            let (tx, mut rx) = mpsc::unbounded_channel();

            // One known typer plus one the roster cannot resolve.
            directory.set_typing(&["U1", "UGONE"]);
            let mut tracker = TypingTracker::spawn("C1".to_owned(), shared, tx);

            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer.as_deref(), Some("alice is typing..."));

            // Only unresolvable typers left: the footer clears.
            directory.set_typing(&["UGONE"]);
            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer, None);

            tracker.stop().await;
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn four_typers_collapse_to_the_generic_line() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let directory = Rc::new(crate::helpers::TestDirectory::new(&[
                ("U1", "alice"),
                ("U2", "bob"),
                ("U3", "carl"),
                ("U4", "dan"),
            ]));
            let shared: Rc<dyn ChatDirectory> = Rc::clone(&directory);
            let (tx, mut rx) = mpsc::unbounded_channel();

            directory.set_typing(&["U1", "U2", "U3", "U4"]);
            let mut tracker = TypingTracker::spawn("C1".to_owned(), shared, tx);

            let footer = expect_footer(rx.recv().await);
            assert_eq!(footer.as_deref(), Some("Multiple people are typing..."));

            tracker.stop().await;
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn stop_is_idempotent_and_final() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let directory = test_directory();
            let shared: Rc<dyn ChatDirectory> = Rc::clone(&directory);
            let (tx, mut rx) = mpsc::unbounded_channel();

            let mut tracker = TypingTracker::spawn("C1".to_owned(), shared, tx);
            tracker.stop().await;
            tracker.stop().await;

            // Activity after stop never reaches the channel.
            directory.set_typing(&["U1"]);
            tokio::time::sleep(TICK_INTERVAL * 3).await;
            assert!(rx.try_recv().is_err());
        })
        .await;
}
