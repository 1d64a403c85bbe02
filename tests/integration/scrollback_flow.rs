// Scrollback flow integration tests.
// Exercise append/resize/scroll/channel-bind through the `App` surface, the
// way a host shell drives the view.

use chatterm::app::{
    App, FocusTarget, MORE_MARKER, ViewEvent, WindowRow, handle_terminal_event, handle_view_event,
};
use chatterm::chat::{Channel, ChannelEntry};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use crate::helpers::{message, test_app};

fn row_texts(app: &App, height: usize) -> Vec<String> {
    app.scrollback
        .visible_window(height)
        .into_iter()
        .map(|row| match row {
            WindowRow::Line(line) => line.text.clone(),
            WindowRow::More => MORE_MARKER.to_owned(),
        })
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

// --- formatting on ingest ---

#[test]
fn append_resolves_names_and_mentions() {
    let mut app = test_app();
    app.append(message("U1", "lunch <@U2>?"));

    assert_eq!(row_texts(&app, 5), ["alice: lunch @bob?"]);
}

#[test]
fn unknown_ids_degrade_to_raw_form() {
    let mut app = test_app();
    app.append(message("U404", "hi <@U405>"));

    assert_eq!(row_texts(&app, 5), ["U404: hi @U405"]);
}

#[test]
fn raw_entries_render_best_effort() {
    let mut app = test_app();
    handle_view_event(
        &mut app,
        ViewEvent::Entry(ChannelEntry::Raw(serde_json::json!({ "type": "member_joined" }))),
    );

    assert_eq!(row_texts(&app, 5), [r#"{"type":"member_joined"}"#]);
}

// --- windowing through the view ---

#[test]
fn new_messages_keep_the_bottom_in_view() {
    let mut app = test_app();
    for i in 0..12 {
        app.append(message("U1", &format!("m{i}")));
    }

    assert!(app.scrollback.is_at_bottom());
    assert_eq!(row_texts(&app, 5), [
        "alice: m7", "alice: m8", "alice: m9", "alice: m10", "alice: m11",
    ]);
}

#[test]
fn reading_upward_is_not_interrupted_by_appends() {
    let mut app = test_app();
    for i in 0..12 {
        app.append(message("U1", &format!("m{i}")));
    }
    app.scrollback.scroll_to_top();

    app.append(message("U2", "newest"));

    assert_eq!(app.scrollback.scroll_offset(), 0);
    let rows = row_texts(&app, 5);
    assert_eq!(rows[0], "alice: m0");
    assert_eq!(rows[4], MORE_MARKER);
}

#[test]
fn resize_rewraps_all_content() {
    let mut app = test_app();
    app.append(message("U1", "one two three four five six seven eight"));
    let wide_lines = app.scrollback.total_lines();
    assert_eq!(wide_lines, 2);

    app.resize(12, 5);
    assert!(app.scrollback.total_lines() > wide_lines);

    app.resize(40, 5);
    assert_eq!(app.scrollback.total_lines(), wide_lines);
}

// --- key handling ---

#[test]
fn scroll_keys_move_the_window() {
    let mut app = test_app();
    for i in 0..12 {
        app.append(message("U1", &format!("m{i}")));
    }
    assert_eq!(app.scrollback.scroll_offset(), 7);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.scrollback.scroll_offset(), 6);
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.scrollback.scroll_offset(), 2);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.scrollback.scroll_offset(), 0);
    press(&mut app, KeyCode::End);
    assert_eq!(app.scrollback.scroll_offset(), 7);
}

#[test]
fn horizontal_keys_request_focus_handoff() {
    let mut app = test_app();
    for i in 0..12 {
        app.append(message("U1", &format!("m{i}")));
    }
    let offset = app.scrollback.scroll_offset();

    press(&mut app, KeyCode::Left);
    assert_eq!(app.focus_request.take(), Some(FocusTarget::Left));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.focus_request.take(), Some(FocusTarget::Right));
    assert_eq!(app.scrollback.scroll_offset(), offset);
}

// --- channel binding ---

#[tokio::test]
async fn binding_a_channel_resets_the_buffer() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let mut app = test_app();
            app.append(message("U1", "left over from before"));
            app.typing_footer = Some("stale".to_owned());

            let channel = Channel {
                id: "C1".to_owned(),
                name: "general".to_owned(),
                topic: None,
                purpose: None,
                is_private: false,
            };
            app.set_channel(channel.clone()).await;

            assert_eq!(app.scrollback.entry_count(), 0);
            assert_eq!(app.typing_footer, None);
            assert_eq!(app.channel, Some(channel));

            app.teardown().await;
            // Teardown twice must be harmless.
            app.teardown().await;
        })
        .await;
}

#[tokio::test]
async fn rebinding_replaces_the_previous_tracker() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let mut app = test_app();
            let make = |id: &str| Channel {
                id: id.to_owned(),
                name: id.to_owned(),
                topic: None,
                purpose: None,
                is_private: false,
            };

            app.set_channel(make("C1")).await;
            app.append(message("U1", "only in C1"));
            app.set_channel(make("C2")).await;

            assert_eq!(app.scrollback.entry_count(), 0);
            assert_eq!(app.channel.as_ref().map(|c| c.id.as_str()), Some("C2"));

            app.teardown().await;
        })
        .await;
}
