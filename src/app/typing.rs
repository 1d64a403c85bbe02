// chatterm — a terminal scrollback viewer for chat streams
// Copyright (C) 2026  The chatterm authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::app::state::ViewEvent;
use crate::chat::ChatDirectory;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How often the typing set is polled.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Aggregate typing activity as of the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Active(usize),
}

impl TypingState {
    pub fn from_count(count: usize) -> Self {
        if count == 0 { Self::Idle } else { Self::Active(count) }
    }
}

/// Join resolved names into the status line.
///
/// Up to three names are listed, comma-separated with an "and" before the
/// last; four or more collapse into a generic line.
pub fn footer_text(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [name] => Some(format!("{name} is typing...")),
        [head @ .., last] if names.len() < 4 => {
            Some(format!("{} and {last} are typing...", head.join(", ")))
        }
        _ => Some("Multiple people are typing...".to_owned()),
    }
}

/// Background poller for one bound channel.
///
/// Owns none of the render state; each tick it derives the footer from the
/// directory's typing set and raises a footer event when the text changes.
/// The render loop stays the only writer of view state.
pub struct TypingTracker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl TypingTracker {
    pub fn spawn(
        channel_id: String,
        directory: Rc<dyn ChatDirectory>,
        events: UnboundedSender<ViewEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::task::spawn_local(async move {
            run_ticks(channel_id, directory, events, token).await;
        });
        Self { cancel, handle: Some(handle) }
    }

    /// Cancel the tick task and wait for it to wind down. Safe to call more
    /// than once; at most one in-flight tick runs after cancellation.
    pub async fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                tracing::debug!("typing tracker ended abnormally: {err}");
            }
        }
    }
}

impl Drop for TypingTracker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_ticks(
    channel_id: String,
    directory: Rc<dyn ChatDirectory>,
    events: UnboundedSender<ViewEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut state = TypingState::Idle;
    let mut footer: Option<String> = None;

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let typing = directory.typing_users(&channel_id);
        // A user without a resolvable name drops out of the display list;
        // a tick never aborts over a lookup miss.
        let names: Vec<String> =
            typing.iter().filter_map(|user| directory.display_name(user)).collect();

        let next_state = TypingState::from_count(names.len());
        if next_state != state {
            tracing::debug!(channel = %channel_id, ?next_state, "typing activity changed");
            state = next_state;
        }

        let next = footer_text(&names);
        if next != footer {
            footer = next.clone();
            // Footer-only redraw request; the view never re-wraps for this.
            if events.send(ViewEvent::TypingFooter(next)).is_err() {
                break;
            }
        }
    }
}
