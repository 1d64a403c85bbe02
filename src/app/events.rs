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

use super::state::{App, FocusTarget, ViewEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(..) => {
            // New dimensions are picked up at the next draw; just repaint.
            app.dirty = true;
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,

        (KeyCode::Up | KeyCode::Char('k'), _) => {
            app.scrollback.scroll_by(-1);
            app.dirty = true;
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            app.scrollback.scroll_by(1);
            app.dirty = true;
        }
        (KeyCode::PageUp, _) => {
            app.scrollback.page_up();
            app.dirty = true;
        }
        (KeyCode::PageDown, _) => {
            app.scrollback.page_down();
            app.dirty = true;
        }
        (KeyCode::Home | KeyCode::Char('g'), _) => {
            app.scrollback.scroll_to_top();
            app.dirty = true;
        }
        (KeyCode::End | KeyCode::Char('G'), _) => {
            app.scrollback.scroll_to_bottom();
            app.dirty = true;
        }

        // Horizontal navigation exits toward a sibling panel; it never
        // scrolls.
        (KeyCode::Left, _) => app.focus_request = Some(FocusTarget::Left),
        (KeyCode::Right, _) => app.focus_request = Some(FocusTarget::Right),

        _ => {}
    }
}

pub fn handle_view_event(app: &mut App, event: ViewEvent) {
    match event {
        ViewEvent::Entry(entry) => app.append(entry),
        ViewEvent::TypingFooter(footer) => {
            if footer != app.typing_footer {
                app.typing_footer = footer;
                app.dirty = true;
            }
        }
    }
}
