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

mod events;
mod format;
mod mention;
mod scrollback;
mod state;
mod typing;

// Re-export the public surface so `crate::app::App`, `crate::app::ScrollbackBuffer`,
// etc. still work.
pub use events::{handle_terminal_event, handle_view_event};
pub use format::display_text;
pub use mention::resolve_first;
pub use scrollback::{MORE_MARKER, RenderLine, ScrollbackBuffer, WindowRow};
pub use state::{App, FocusTarget, ViewEvent};
pub use typing::{TICK_INTERVAL, TypingState, TypingTracker, footer_text};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt as _};
use std::time::Duration;

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(33);

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                events::handle_view_event(app, event);
            }
            () = tokio::time::sleep(tick_duration) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => events::handle_view_event(app, event),
                Err(_) => break,
            }
        }

        if let Some(target) = app.focus_request.take() {
            // Single-panel shell: there is no sibling to focus. A host UI
            // routes this to the adjacent widget.
            tracing::debug!(?target, "focus handoff requested");
        }

        if app.should_quit {
            break;
        }

        // Phase 3: draw once if anything changed
        if app.dirty {
            terminal.draw(|frame| crate::ui::render(frame, app))?;
            app.dirty = false;
        }
    }

    // --- Graceful shutdown ---
    app.teardown().await;
    ratatui::restore();

    Ok(())
}
